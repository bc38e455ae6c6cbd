use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;
use clap::{Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Profile to read the backend address from. Default is 'default'.
    /// If the profile is not configured, the local server address is used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    /// Output layout
    #[clap(long, value_enum, default_value_t = OutputFormat::Text, help = "output format")]
    format: OutputFormat,

    #[command(subcommand)]
    command: ClapCommand,
}

#[derive(Subcommand, Debug)]
enum ClapCommand {
    /// Evaluate a file on the execution service
    Run {
        /// File holding the code to run
        file: PathBuf,
    },
    /// Store a file on the snippet service and print its shareable link
    Share {
        /// File holding the code to share
        file: PathBuf,
    },
    /// Open a shared link, load its snippet and run it
    Open {
        /// Shareable link, e.g. https://jsonnet.dev/#<id>
        link: String,
        /// Write the loaded snippet into this file instead of printing it
        #[clap(long)]
        into: Option<PathBuf>,
    },
}

/// How session results are laid out on stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What a single invocation asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Run { file: PathBuf },
    Share { file: PathBuf },
    Open { link: String, into: Option<PathBuf> },
}

impl From<ClapCommand> for SessionCommand {
    fn from(command: ClapCommand) -> Self {
        match command {
            ClapCommand::Run { file } => SessionCommand::Run { file },
            ClapCommand::Share { file } => SessionCommand::Share { file },
            ClapCommand::Open { link, into } => SessionCommand::Open { link, into },
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    format: OutputFormat,
    command: SessionCommand,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            verbose: args.verbose,
            format: args.format,
            command: args.command.into(),
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn command(&self) -> &SessionCommand {
        &self.command
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_run() {
        let args = CommandLineArgs::parse_from(["program", "run", "main.jsonnet"]);
        assert_eq!(args.profile(), "default");
        assert!(!args.verbose());
        assert_eq!(args.format(), OutputFormat::Text);
        assert_eq!(
            args.command(),
            &SessionCommand::Run {
                file: PathBuf::from("main.jsonnet")
            }
        );
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-p", "dev", "-v", "share", "a.jsonnet"]);
        assert_eq!(args.profile(), "dev");
        assert!(args.verbose());
        assert_eq!(
            args.command(),
            &SessionCommand::Share {
                file: PathBuf::from("a.jsonnet")
            }
        );
    }

    #[test]
    fn test_parse_args_open_with_target_file() {
        let args = CommandLineArgs::parse_from([
            "program",
            "--format",
            "json",
            "open",
            "https://jsonnet.dev/#abc",
            "--into",
            "out.jsonnet",
        ]);
        assert_eq!(args.format(), OutputFormat::Json);
        assert_eq!(
            args.command(),
            &SessionCommand::Open {
                link: "https://jsonnet.dev/#abc".to_string(),
                into: Some(PathBuf::from("out.jsonnet")),
            }
        );
    }
}
