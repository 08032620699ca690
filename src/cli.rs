use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::record::Severity;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum SeverityArg {
    #[default]
    Info,
    #[value(alias = "warning")]
    Warn,
    Error,
    Assert,
}

impl From<SeverityArg> for Severity {
    fn from(s: SeverityArg) -> Self {
        match s {
            SeverityArg::Info => Severity::Info,
            SeverityArg::Warn => Severity::Warning,
            SeverityArg::Error => Severity::Error,
            SeverityArg::Assert => Severity::Assert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cutedebug",
    about = "cutedebug settings: choose whose debug messages you see",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct CuteDebugCli {
    /// Global: path to config (TOML); default: <config dir>/cutedebug/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the identity messages are filtered against
    Whoami,

    /// Store a new identity
    ///
    /// Examples:
    ///   cutedebug set alice
    Set {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Forget the stored identity (falls back to the account name)
    Clear,

    /// Show stored identity, account default and where it is kept
    Status {
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Ask for an identity when none is configured
    Init,

    /// Send one message through the filter
    ///
    /// Examples:
    ///   cutedebug log --author alice "player spawned"
    ///   cutedebug log --severity warn --context Door "stuck"
    Log {
        #[arg(long = "author", value_name = "NAME")]
        author: Option<String>,
        #[arg(long = "severity", value_enum, default_value_t = SeverityArg::Info)]
        severity: SeverityArg,
        /// Name of the object the message refers to
        #[arg(long = "context", value_name = "OBJECT")]
        context: Option<String>,
        #[arg(value_name = "MESSAGE", required = true, num_args = 1..)]
        message: Vec<String>,
    },
}
