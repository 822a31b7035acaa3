use crate::error::{BootstrapError, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "weather-time-agent", version)]
#[command(about = "Answers questions about the time and weather in a city", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run interactive console (default if no command specified)
    Chat,
    /// Start web server with UI
    Serve {
        /// Server port
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

impl Cli {
    pub fn mode(&self) -> Commands {
        self.command.unwrap_or(Commands::Chat)
    }
}

/// Parses launcher arguments, excluding the program name.
///
/// Returns `Ok(None)` once `--help` or `--version` has been printed.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Option<Cli>> {
    let argv = std::iter::once("weather-time-agent").chain(args.iter().map(|arg| arg.as_ref()));
    match Cli::try_parse_from(argv) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Printing help can only fail on a closed stdout.
            let _ = e.print();
            Ok(None)
        }
        Err(e) => Err(BootstrapError::Usage(e)),
    }
}

/// One-line command syntax, shown after launcher failures.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
