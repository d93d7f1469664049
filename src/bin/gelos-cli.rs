//! Native front end for the GelOS terminal.
//!
//! Reads lines from stdin (or `-c` arguments), runs them through the same
//! shell as the browser desktop, and prints the output as plain text.
//! Window requests are applied to an in-memory window manager and echoed.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::fs;
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;
    use env_logger::Env;
    use log::LevelFilter;
    use thiserror::Error;

    use gelos::config::{APP_NAME, APP_VERSION, TERMINAL_WINDOW};
    use gelos::core::error::ManifestError;
    use gelos::core::persistence::{self, MemoryPort};
    use gelos::core::{AutocompleteResult, Shell, VirtualFs, WindowHost, WindowManager};
    use gelos::models::{OutputLine, ViewerPayload, WindowId};

    /// GelOS terminal on the command line.
    #[derive(Debug, Parser)]
    #[command(version, about = "GelOS terminal on the command line", long_about = None)]
    struct Cli {
        /// Load the filesystem from this JSON manifest instead of the built-in one.
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Run this line and exit (repeatable, runs in order).
        #[arg(short = 'c', long = "command", value_name = "LINE")]
        commands: Vec<String>,

        /// Print the Tab completion of this buffer and exit.
        #[arg(long, value_name = "BUFFER", conflicts_with = "commands")]
        complete: Option<String>,

        /// Log level when RUST_LOG is not set.
        #[arg(long, default_value_t = LevelFilter::Warn)]
        log_level: LevelFilter,
    }

    #[derive(Debug, Error)]
    enum CliError {
        #[error("cannot read {path}: {source}")]
        Read {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
        #[error(transparent)]
        Manifest(#[from] ManifestError),
        #[error("stdin: {0}")]
        Stdin(#[source] io::Error),
    }

    /// Window manager that also prints every request it receives.
    struct EchoHost {
        windows: WindowManager,
    }

    impl EchoHost {
        fn new() -> Self {
            let mut windows = WindowManager::new();
            windows.open_window(&WindowId::new(TERMINAL_WINDOW), None);
            Self { windows }
        }

        fn terminal_open(&self) -> bool {
            self.windows.is_open(&WindowId::new(TERMINAL_WINDOW))
        }
    }

    impl WindowHost for EchoHost {
        fn open_window(&mut self, id: &WindowId, payload: Option<ViewerPayload>) {
            match &payload {
                Some(p) => println!("[desktop] open {} ({} -> {})", id, p.title, p.content_ref),
                None => println!("[desktop] open {}", id),
            }
            self.windows.open_window(id, payload);
        }

        fn close_window(&mut self, id: &WindowId) {
            println!("[desktop] close {}", id);
            self.windows.close_window(id);
        }

        fn toggle_window(&mut self, id: &WindowId) {
            println!("[desktop] toggle {}", id);
            self.windows.toggle_window(id);
        }

        fn toggle_effect(&mut self, name: &str) -> bool {
            let active = self.windows.toggle_effect(name);
            println!("[desktop] effect {} {}", name, if active { "on" } else { "off" });
            active
        }
    }

    fn init_logging(level: LevelFilter) {
        let mut builder =
            env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()));
        builder.format_timestamp_millis();
        let _ = builder.try_init();
    }

    fn load_fs(manifest: Option<&PathBuf>) -> Result<VirtualFs, CliError> {
        match manifest {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?;
                Ok(VirtualFs::from_json(&json)?)
            }
            None => Ok(VirtualFs::builtin()?),
        }
    }

    /// Print output lines added after the line with id `last_id`.
    ///
    /// After `clear` that line is gone and everything left is new.
    fn print_new(shell: &Shell, last_id: &mut Option<usize>) {
        let lines: Vec<&OutputLine> = shell.output().iter().collect();
        let start = match last_id {
            Some(id) => lines
                .iter()
                .position(|l| l.id == *id)
                .map_or(0, |pos| pos + 1),
            None => 0,
        };
        for line in &lines[start..] {
            println!("{}", line.plain_text());
        }
        *last_id = lines.last().map(|l| l.id);
    }

    fn repl(shell: &mut Shell, host: &mut EchoHost) -> Result<(), CliError> {
        let stdin = io::stdin();
        let mut last_id = None;
        print_new(shell, &mut last_id);

        loop {
            print!("{}$ ", shell.prompt());
            io::stdout().flush().map_err(CliError::Stdin)?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).map_err(CliError::Stdin)? == 0 {
                println!();
                break;
            }

            shell.execute(line.trim_end_matches(['\r', '\n']), host);
            print_new(shell, &mut last_id);

            if !host.terminal_open() {
                break;
            }
        }
        Ok(())
    }

    fn run_batch(shell: &mut Shell, host: &mut EchoHost, commands: &[String]) {
        let mut last_id = shell.output().last().map(|l| l.id);
        for command in commands {
            shell.execute(command, host);
            print_new(shell, &mut last_id);
            if !host.terminal_open() {
                break;
            }
        }
    }

    fn print_completion(result: AutocompleteResult) {
        match result {
            AutocompleteResult::Single(buffer) => println!("{}", buffer),
            AutocompleteResult::Multiple(candidates) => println!("{}", candidates.join("  ")),
            AutocompleteResult::None => {}
        }
    }

    fn try_run(cli: Cli) -> Result<(), CliError> {
        let fs = load_fs(cli.manifest.as_ref())?;
        let mut shell = Shell::new(fs);
        let mut host = EchoHost::new();

        if let Some(buffer) = cli.complete {
            print_completion(shell.complete(&buffer));
            return Ok(());
        }

        if cli.commands.is_empty() {
            log::info!("{} v{} interactive session", APP_NAME, APP_VERSION);
            repl(&mut shell, &mut host)?;
        } else {
            run_batch(&mut shell, &mut host, &cli.commands);
        }

        let port = MemoryPort::new();
        persistence::save_logged(&port, &host.windows.snapshot());
        log::debug!("final desktop state: {}", port.raw().unwrap_or_default());
        Ok(())
    }

    pub fn run() -> ExitCode {
        let cli = Cli::parse();
        init_logging(cli.log_level);

        match try_run(cli) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gelos-cli: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}
