//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use crate::config::{
    IMAGE_VIEWER_WINDOW, MATRIX_EFFECT, PDF_VIEWER_WINDOW, TERMINAL_WINDOW, matrix_messages,
};
use crate::core::VirtualFs;
use crate::core::error::ShellError;
use crate::core::host::WindowHost;
use crate::models::{Action, FileKind, Location, Node, OutputLine, ViewerPayload, WindowId};

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command and return output lines.
///
/// Navigation and log clearing are returned in the result, not applied.
/// Window and effect requests go straight to `host`.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `fs` - Virtual filesystem
/// * `current` - Current location (for resolving relative paths)
/// * `host` - Desktop side of window and effect requests
pub fn execute_command(
    cmd: Command,
    fs: &VirtualFs,
    current: &Location,
    host: &mut dyn WindowHost,
) -> CommandResult {
    match cmd {
        Command::Doc(body) => CommandResult::line(OutputLine::rich(body)),
        Command::Ls => execute_ls(fs, current),
        Command::Cd(None) => CommandResult::navigate(Location::root()),
        Command::Cd(Some(path)) => execute_cd(path, fs, current),
        Command::Open(None) => CommandResult::error(ShellError::Usage("open [filename]")),
        Command::Open(Some(path)) => execute_open(path, fs, current, host),
        Command::Clear => CommandResult::clear(),
        Command::Exit => {
            host.close_window(&WindowId::new(TERMINAL_WINDOW));
            CommandResult::empty()
        }
        Command::Matrix => {
            let active = host.toggle_effect(MATRIX_EFFECT);
            let message = if active {
                matrix_messages::ENABLED
            } else {
                matrix_messages::DISABLED
            };
            CommandResult::line(OutputLine::success(message))
        }
        Command::Unknown(verb) => CommandResult::error(ShellError::UnknownCommand(verb)),
    }
}

/// Execute `ls` command.
fn execute_ls(fs: &VirtualFs, current: &Location) -> CommandResult {
    match fs.list_dir(current) {
        Some(entries) => CommandResult::line(OutputLine::listing(entries)),
        // A well-formed location always names a directory.
        None => CommandResult::empty(),
    }
}

/// Execute `cd` command.
fn execute_cd(path: PathArg, fs: &VirtualFs, current: &Location) -> CommandResult {
    match fs.resolve(current, path.as_str()) {
        Ok(resolved) if resolved.node.is_directory() => CommandResult::navigate(resolved.location),
        Ok(_) => CommandResult::error(ShellError::NotADirectory {
            command: "cd".to_string(),
            path: path.to_string(),
        }),
        Err(err) => CommandResult::error(ShellError::from_resolve("cd", err)),
    }
}

/// Execute `open` command.
fn execute_open(
    path: PathArg,
    fs: &VirtualFs,
    current: &Location,
    host: &mut dyn WindowHost,
) -> CommandResult {
    let node = match fs.resolve(current, path.as_str()) {
        Ok(resolved) => resolved.node,
        Err(err) => return CommandResult::error(ShellError::from_resolve("open", err)),
    };

    match node {
        Node::Directory(_) => CommandResult::error(ShellError::IsADirectory {
            command: "open".to_string(),
            path: path.to_string(),
        }),
        Node::Shortcut(window) => {
            host.open_window(window, None);
            CommandResult::line(OutputLine::muted(format!("Launching {}...", path)))
        }
        Node::Executable(action) => {
            run_action(action, host);
            CommandResult::line(OutputLine::muted(format!("Executing {}...", path)))
        }
        Node::File(file) => match &file.kind {
            FileKind::Pdf => {
                open_viewer(host, PDF_VIEWER_WINDOW, &path, &file.content);
                CommandResult::line(OutputLine::muted(format!("Opening PDF: {}...", path)))
            }
            FileKind::Img => {
                open_viewer(host, IMAGE_VIEWER_WINDOW, &path, &file.content);
                CommandResult::line(OutputLine::muted(format!("Opening Image: {}...", path)))
            }
            FileKind::Text => CommandResult::line(OutputLine::text(file.content.clone())),
            FileKind::Other(kind) => {
                CommandResult::error(ShellError::UnsupportedFileKind(kind.clone()))
            }
        },
    }
}

fn open_viewer(host: &mut dyn WindowHost, window: &str, title: &PathArg, content_ref: &str) {
    host.open_window(
        &WindowId::new(window),
        Some(ViewerPayload {
            title: title.to_string(),
            content_ref: content_ref.to_string(),
        }),
    );
}

fn run_action(action: &Action, host: &mut dyn WindowHost) {
    match action {
        Action::OpenWindow(id) => host.open_window(id, None),
        Action::ToggleWindow(id) => host.toggle_window(id),
        Action::ToggleEffect(name) => {
            host.toggle_effect(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::{HostRequest, RecordingHost};
    use crate::models::OutputLineData;

    fn test_fs() -> VirtualFs {
        VirtualFs::from_json(
            r#"{"root": [
                {"name": "notes.txt", "type": "text", "content": "remember the milk"},
                {"name": "song.mp3", "type": "audio", "path": "a/song.mp3"},
                {"name": "run.exe", "type": "exec", "action": "effect:matrix"},
                {"name": "desktop", "type": "directory", "children": [
                    {"name": "mail.lnk", "type": "shortcut", "window": "mail"}
                ]},
                {"name": "pictures", "type": "directory", "children": [
                    {"name": "a.jpg", "type": "img", "path": "pics/a.jpg"}
                ]}
            ]}"#,
        )
        .unwrap()
    }

    fn run(cmd: Command, current: &Location, host: &mut RecordingHost) -> CommandResult {
        execute_command(cmd, &test_fs(), current, host)
    }

    #[test]
    fn test_cd_without_argument_goes_home() {
        let mut host = RecordingHost::new();
        let here = Location::from_segments(["pictures"]);
        let result = run(Command::Cd(None), &here, &mut host);
        assert_eq!(result.navigate_to, Some(Location::root()));
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_cd_into_file() {
        let mut host = RecordingHost::new();
        let result = run(
            Command::Cd(Some(PathArg::new("notes.txt"))),
            &Location::root(),
            &mut host,
        );
        assert!(result.navigate_to.is_none());
        assert_eq!(
            result.output[0].data,
            OutputLineData::Error("cd: notes.txt: Not a directory".to_string())
        );
    }

    #[test]
    fn test_open_text_prints_content() {
        let mut host = RecordingHost::new();
        let result = run(
            Command::Open(Some(PathArg::new("notes.txt"))),
            &Location::root(),
            &mut host,
        );
        assert_eq!(
            result.output[0].data,
            OutputLineData::Text("remember the milk".to_string())
        );
        assert!(host.requests.is_empty());
    }

    #[test]
    fn test_open_image() {
        let mut host = RecordingHost::new();
        let result = run(
            Command::Open(Some(PathArg::new("pictures/a.jpg"))),
            &Location::root(),
            &mut host,
        );
        assert_eq!(
            result.output[0].data,
            OutputLineData::Muted("Opening Image: pictures/a.jpg...".to_string())
        );
        assert_eq!(
            host.requests,
            vec![HostRequest::OpenWindow {
                id: WindowId::new("image"),
                payload: Some(ViewerPayload {
                    title: "pictures/a.jpg".to_string(),
                    content_ref: "pics/a.jpg".to_string(),
                }),
            }]
        );
    }

    #[test]
    fn test_open_shortcut_launches_window() {
        let mut host = RecordingHost::new();
        let result = run(
            Command::Open(Some(PathArg::new("/desktop/mail.lnk"))),
            &Location::root(),
            &mut host,
        );
        assert!(result.navigate_to.is_none());
        assert_eq!(
            result.output[0].data,
            OutputLineData::Muted("Launching /desktop/mail.lnk...".to_string())
        );
        assert_eq!(
            host.requests,
            vec![HostRequest::OpenWindow {
                id: WindowId::new("mail"),
                payload: None,
            }]
        );
    }

    #[test]
    fn test_open_executable_runs_action() {
        let mut host = RecordingHost::new();
        let result = run(
            Command::Open(Some(PathArg::new("run.exe"))),
            &Location::root(),
            &mut host,
        );
        assert_eq!(
            result.output[0].data,
            OutputLineData::Muted("Executing run.exe...".to_string())
        );
        assert!(host.effect_active("matrix"));
    }

    #[test]
    fn test_open_unsupported_kind() {
        let mut host = RecordingHost::new();
        let result = run(
            Command::Open(Some(PathArg::new("song.mp3"))),
            &Location::root(),
            &mut host,
        );
        assert_eq!(
            result.output[0].data,
            OutputLineData::Error("Cannot open file type: audio".to_string())
        );
    }

    #[test]
    fn test_open_missing_uses_open_prefix() {
        let mut host = RecordingHost::new();
        let result = run(
            Command::Open(Some(PathArg::new("ghost.pdf"))),
            &Location::root(),
            &mut host,
        );
        assert_eq!(
            result.output[0].data,
            OutputLineData::Error("open: ghost.pdf: No such file or directory".to_string())
        );
    }

    #[test]
    fn test_open_without_argument_is_usage_warning() {
        let mut host = RecordingHost::new();
        let result = run(Command::Open(None), &Location::root(), &mut host);
        assert_eq!(
            result.output[0].data,
            OutputLineData::Warning("usage: open [filename]".to_string())
        );
    }

    #[test]
    fn test_exit_closes_terminal() {
        let mut host = RecordingHost::new();
        let result = run(Command::Exit, &Location::root(), &mut host);
        assert!(result.output.is_empty());
        assert_eq!(
            host.requests,
            vec![HostRequest::CloseWindow(WindowId::new("terminal"))]
        );
    }

    #[test]
    fn test_matrix_reports_new_state() {
        let mut host = RecordingHost::new();
        let on = run(Command::Matrix, &Location::root(), &mut host);
        let off = run(Command::Matrix, &Location::root(), &mut host);
        assert_eq!(
            on.output[0].data,
            OutputLineData::Success(matrix_messages::ENABLED.to_string())
        );
        assert_eq!(
            off.output[0].data,
            OutputLineData::Success(matrix_messages::DISABLED.to_string())
        );
    }

    #[test]
    fn test_clear_and_unknown() {
        let mut host = RecordingHost::new();
        assert!(run(Command::Clear, &Location::root(), &mut host).clear_output);

        let result = run(
            Command::Unknown("sudo".to_string()),
            &Location::root(),
            &mut host,
        );
        assert_eq!(
            result.output[0].data,
            OutputLineData::Error("Command not found: sudo".to_string())
        );
    }
}
