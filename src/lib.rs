//! Command line validation for the Tempest UDP relay.
//!
//! The relay accepts one of a handful of mutually exclusive commands:
//!
//! ```text
//! tempest --url=<url> [--format=<fmt>] [--interval=<min>] [--log=<lev>] [--daemon]
//! tempest --trace [--format=<fmt>] [--interval=<min>] [--log=<lev>]
//! tempest --stop
//! tempest --version
//! tempest [--help]
//! ```
//!
//! [`Command::from_env`] turns the process arguments into exactly one
//! [`Command`]. Anything that is not a well-formed, legal combination of flags
//! becomes [`Command::Invalid`]; the reason is only reported through
//! `tracing` at the `debug` level.
//!
//! ```
//! use tempest_args::{Command, DataFormat};
//!
//! let cmd = Command::from_vec(vec!["--url=http://hub.local".into(), "-f".into(), "2".into()]);
//! let start = cmd.start().unwrap();
//! assert_eq!(start.format, DataFormat::Ecowitt);
//! assert_eq!(
//!     cmd.canonical().unwrap(),
//!     "tempest --url=http://hub.local --format=2 --interval=1 --log=2",
//! );
//! ```
use std::{ffi::OsString, ops::RangeInclusive};

mod canonical;
mod command;
mod fields;
mod flags;
mod help;
mod rt;

pub use crate::{
    command::{Command, Start, Trace},
    fields::{DataFormat, LogLevel},
    flags::{Flag, FlagSet, FlagSpec, FLAGS},
    help::{command_line, usage},
};

/// Program name used in canonical command lines and in the usage text.
pub const PROGRAM: &str = "tempest";

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a command line was rejected.
///
/// Never leaves the crate: every variant collapses into [`Command::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum Error {
    #[error("unknown flag: `{0}`")]
    UnknownFlag(String),

    #[error("expected a value for `--{0}`")]
    MissingOrEmptyValue(&'static str),

    #[error("`--{flag}` takes no value, got `{value}`")]
    UnexpectedValue { flag: &'static str, value: String },

    #[error("can't parse `--{flag}`, invalid utf8: {value:?}")]
    NotUtf8 { flag: &'static str, value: OsString },

    #[error("`--{flag}` expects an integer in {range:?}, got `{value}`")]
    OutOfRange { flag: &'static str, value: String, range: RangeInclusive<i64> },

    #[error("`--{command}` can't be combined with {extra}")]
    ConflictingFlags { command: &'static str, extra: FlagSet },

    #[error("unbalanced quote or trailing backslash in `{0}`")]
    UnbalancedQuote(String),

    #[error("no command given, only {0}")]
    AmbiguousCommandLine(FlagSet),
}
