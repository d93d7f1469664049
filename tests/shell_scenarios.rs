//! End-to-end terminal sessions against the built-in filesystem.

use gelos::core::{
    AutocompleteResult, HostRequest, RecordingHost, Shell, VirtualFs, WindowHost, WindowManager,
};
use gelos::models::{Location, OutputLineData, ViewerPayload, WindowId};

fn session() -> (Shell, RecordingHost) {
    (
        Shell::new(VirtualFs::builtin().expect("built-in manifest loads")),
        RecordingHost::new(),
    )
}

fn last(shell: &Shell) -> OutputLineData {
    shell.output().last().expect("log not empty").data.clone()
}

#[test]
fn documents_listing_and_pdf_open() {
    let (mut shell, mut host) = session();

    shell.execute("cd documents", &mut host);
    shell.execute("ls", &mut host);
    match last(&shell) {
        OutputLineData::Listing(entries) => {
            let names: Vec<String> = entries.iter().map(|e| e.display_name()).collect();
            assert_eq!(
                names,
                [
                    "cert_c3sa.pdf",
                    "cert_ccep.pdf",
                    "cert_cpps.pdf",
                    "cert_crtom.pdf"
                ]
            );
        }
        other => panic!("expected a listing, got {other:?}"),
    }

    shell.execute("open cert_c3sa.pdf", &mut host);
    assert!(matches!(
        last(&shell),
        OutputLineData::Muted(ref msg) if msg.starts_with("Opening")
    ));
    assert_eq!(
        host.drain(),
        vec![HostRequest::OpenWindow {
            id: WindowId::new("pdf"),
            payload: Some(ViewerPayload {
                title: "cert_c3sa.pdf".to_string(),
                content_ref: "assets/certs/cert_c3sa.pdf".to_string(),
            }),
        }]
    );
}

#[test]
fn missing_directory_keeps_location() {
    let (mut shell, mut host) = session();
    shell.execute("cd nowhere", &mut host);
    assert_eq!(
        last(&shell),
        OutputLineData::Error("cd: nowhere: No such file or directory".to_string())
    );
    assert_eq!(shell.current_location(), &Location::root());
}

#[test]
fn opening_a_directory_is_an_error() {
    let (mut shell, mut host) = session();
    shell.execute("open documents", &mut host);
    assert_eq!(
        last(&shell),
        OutputLineData::Error("open: documents: Is a directory".to_string())
    );
    assert!(host.requests.is_empty());
}

#[test]
fn empty_submission_changes_nothing() {
    let (mut shell, mut host) = session();
    let before = shell.output().len();
    shell.execute("", &mut host);
    assert_eq!(shell.output().len(), before);
    assert!(shell.history().is_empty());
}

#[test]
fn any_enter_after_browsing_parks_history_cursor() {
    let (mut shell, mut host) = session();
    shell.execute("cd documents", &mut host);
    shell.execute("ls", &mut host);

    shell.history_previous();
    shell.history_previous();
    shell.execute("   ", &mut host);
    assert_eq!(shell.history().cursor(), shell.history().len());

    shell.history_previous();
    shell.execute("cd ..", &mut host);
    assert_eq!(shell.history().cursor(), shell.history().len());
    assert_eq!(shell.history_previous().as_deref(), Some("cd .."));
}

#[test]
fn missing_open_target_names_the_verb() {
    let (mut shell, mut host) = session();
    shell.execute("open nowhere.pdf", &mut host);
    assert_eq!(
        last(&shell),
        OutputLineData::Error("open: nowhere.pdf: No such file or directory".to_string())
    );
    assert!(host.requests.is_empty());
}

#[test]
fn cd_then_parent_round_trips() {
    let (mut shell, mut host) = session();
    shell.execute("cd pictures", &mut host);
    assert_eq!(shell.prompt(), "root@gelo:~/pictures");
    shell.execute("cd ..", &mut host);
    assert_eq!(shell.current_location(), &Location::root());

    shell.execute("cd ../../..", &mut host);
    assert_eq!(shell.current_location(), &Location::root());
    assert!(matches!(last(&shell), OutputLineData::Command { .. }));
}

#[test]
fn absolute_paths_ignore_current_location() {
    let (mut shell, mut host) = session();
    shell.execute("cd documents", &mut host);
    shell.execute("cd /pictures", &mut host);
    assert_eq!(
        shell.current_location(),
        &Location::from_segments(["pictures"])
    );
}

#[test]
fn shortcut_launch_does_not_move() {
    let (mut shell, mut host) = session();
    shell.execute("open desktop/mail.lnk", &mut host);
    assert_eq!(shell.current_location(), &Location::root());
    assert_eq!(
        host.drain(),
        vec![HostRequest::OpenWindow {
            id: WindowId::new("mail"),
            payload: None,
        }]
    );
}

#[test]
fn tab_completion_of_verbs_and_paths() {
    let (shell, _) = session();
    assert_eq!(
        shell.complete("cl"),
        AutocompleteResult::Single("clear".to_string())
    );
    assert_eq!(
        shell.complete("cd doc"),
        AutocompleteResult::Single("cd documents".to_string())
    );
    match shell.complete("open documents/cert_c") {
        AutocompleteResult::Multiple(candidates) => assert_eq!(candidates.len(), 4),
        other => panic!("expected several candidates, got {other:?}"),
    }
    assert_eq!(shell.complete("xyz"), AutocompleteResult::None);
}

#[test]
fn window_manager_as_host() {
    let mut shell = Shell::new(VirtualFs::builtin().expect("built-in manifest loads"));
    let mut windows = WindowManager::new();
    windows.open_window(&WindowId::new("terminal"), None);

    shell.execute("open pictures/01_PyConAPAC.jpg", &mut windows);
    shell.execute("matrix", &mut windows);
    assert!(windows.is_open(&WindowId::new("image")));
    assert_eq!(
        windows.focused().map(|w| w.id.clone()),
        Some(WindowId::new("image"))
    );
    assert!(windows.effect_active("matrix"));

    shell.execute("exit", &mut windows);
    assert!(!windows.is_open(&WindowId::new("terminal")));
}

#[test]
fn documentation_commands_print_markup() {
    let (mut shell, mut host) = session();
    shell.execute("whoami", &mut host);
    let line = shell.output().last().expect("log not empty");
    assert!(line.is_rich());
    assert!(line.plain_text().contains(">> ABOUT ME"));
}
