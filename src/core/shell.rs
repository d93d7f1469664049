//! Per-terminal session state and the line-submission entry point.

use crate::config::{MAX_TERMINAL_HISTORY, PROMPT_HOST, PROMPT_USER, WELCOME_MESSAGE};
use crate::core::autocomplete::{AutocompleteResult, autocomplete};
use crate::core::commands::{Command, execute_command};
use crate::core::filesystem::VirtualFs;
use crate::core::history::CommandHistory;
use crate::core::host::WindowHost;
use crate::core::parser::parse_line;
use crate::models::{Location, OutputLine, OutputLog};

/// Session state of one terminal: where it is, what it printed, what was
/// typed.
///
/// The tree is owned read-only. Window and effect requests are passed to a
/// [`WindowHost`] on every call to [`Shell::execute`]; the shell itself
/// never persists anything.
#[derive(Clone, Debug)]
pub struct Shell {
    fs: VirtualFs,
    current: Location,
    output: OutputLog,
    history: CommandHistory,
}

impl Shell {
    /// Start a session at the root with the welcome line printed.
    pub fn new(fs: VirtualFs) -> Self {
        let mut output = OutputLog::new(MAX_TERMINAL_HISTORY);
        output.push(OutputLine::success(WELCOME_MESSAGE));
        Self {
            fs,
            current: Location::root(),
            output,
            history: CommandHistory::new(),
        }
    }

    /// Submit one input line.
    ///
    /// Whitespace-only input leaves the log and history alone but still
    /// parks the history cursor. Anything else is recorded in the history,
    /// echoed with the prompt and dispatched. Failures end up in the output
    /// log as styled lines.
    pub fn execute(&mut self, raw: &str, host: &mut dyn WindowHost) {
        let Some(parsed) = parse_line(raw) else {
            self.history.reset_cursor();
            return;
        };

        self.history.push(raw);
        self.output.push(OutputLine::command(self.prompt(), raw));

        let cmd = Command::parse(&parsed.verb, parsed.argument);
        log::debug!("dispatching {:?} at {}", cmd, self.current);

        let result = execute_command(cmd, &self.fs, &self.current, host);

        if result.clear_output {
            self.output.clear();
        }
        if let Some(location) = result.navigate_to {
            self.current = location;
        }
        self.output.extend(result.output);
    }

    /// Prompt shown before the input line, e.g. `root@gelo:~/documents`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}", PROMPT_USER, PROMPT_HOST, self.current.display())
    }

    /// Tab completion of `buffer` against the current directory.
    pub fn complete(&self, buffer: &str) -> AutocompleteResult {
        autocomplete(buffer, &self.current, &self.fs)
    }

    /// Arrow-Up. `None` means the buffer stays as it is.
    pub fn history_previous(&mut self) -> Option<String> {
        self.history.previous().map(str::to_string)
    }

    /// Arrow-Down. `None` means the buffer should be emptied.
    pub fn history_next(&mut self) -> Option<String> {
        self.history.next().map(str::to_string)
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn current_location(&self) -> &Location {
        &self.current
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }
}
