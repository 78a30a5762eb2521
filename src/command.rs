use std::ffi::OsString;

use crate::{
    fields::{DataFormat, Fields, LogLevel},
    flags::{Flag, FlagSet},
    rt::Parser,
    Error, Result,
};

/// Relay data to `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Start {
    pub url: String,
    pub format: DataFormat,
    /// Minutes between relayed samples, `0..=30`.
    pub interval: u32,
    pub log: LogLevel,
    pub daemon: bool,
}

/// Relay data to standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub format: DataFormat,
    pub interval: u32,
    pub log: LogLevel,
}

/// The one thing the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(Start),
    Trace(Trace),
    Stop,
    Version,
    Help,
    /// No arguments at all.
    Empty,
    /// Malformed flags, or flags that don't form a legal command.
    Invalid,
}

impl Command {
    /// Parses the arguments of the current process.
    pub fn from_env() -> Command {
        Command::parse_(Parser::new_from_env())
    }

    /// Parses `args`, which must not include the program name.
    pub fn from_vec(args: Vec<OsString>) -> Command {
        Command::parse_(Parser::new(args))
    }

    fn parse_(mut p: Parser) -> Command {
        match resolve(&mut p) {
            Ok(cmd) => {
                tracing::debug!(command = cmd.canonical().as_deref(), "command line resolved");
                cmd
            }
            Err(err) => {
                tracing::debug!(error = %err, "command line rejected");
                Command::Invalid
            }
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Command::Invalid)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Command::Empty)
    }

    pub fn start(&self) -> Option<&Start> {
        match self {
            Command::Start(it) => Some(it),
            _ => None,
        }
    }

    pub fn trace(&self) -> Option<&Trace> {
        match self {
            Command::Trace(it) => Some(it),
            _ => None,
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Command::Stop)
    }

    pub fn is_version(&self) -> bool {
        matches!(self, Command::Version)
    }

    /// True only for an explicit `--help`; see also [`Command::wants_usage`].
    pub fn is_help(&self) -> bool {
        matches!(self, Command::Help)
    }

    /// Whether the caller should print [`usage`](crate::usage) and exit.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Command::Help | Command::Empty | Command::Invalid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Start,
    Trace,
    Stop,
    Version,
    Help,
}

impl Kind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Kind::Start => "Start",
            Kind::Trace => "Trace",
            Kind::Stop => "Stop",
            Kind::Version => "Version",
            Kind::Help => "Help",
        }
    }

    fn build(self, fields: Fields) -> Command {
        let Fields { url, format, interval, log, daemon, present: _ } = fields;
        match self {
            Kind::Start => Command::Start(Start { url, format, interval, log, daemon }),
            Kind::Trace => Command::Trace(Trace { format, interval, log }),
            Kind::Stop => Command::Stop,
            Kind::Version => Command::Version,
            Kind::Help => Command::Help,
        }
    }
}

/// A command is picked by its `required` flag and may only be combined with
/// `allowed` ones.
pub(crate) struct Rule {
    pub(crate) kind: Kind,
    pub(crate) required: Flag,
    pub(crate) allowed: FlagSet,
}

/// In priority order.
pub(crate) static RULES: [Rule; 5] = [
    Rule {
        kind: Kind::Start,
        required: Flag::Url,
        allowed: FlagSet::of(&[Flag::Url, Flag::Format, Flag::Interval, Flag::Log, Flag::Daemon]),
    },
    Rule {
        kind: Kind::Trace,
        required: Flag::Trace,
        allowed: FlagSet::of(&[Flag::Trace, Flag::Format, Flag::Interval, Flag::Log]),
    },
    Rule { kind: Kind::Stop, required: Flag::Stop, allowed: FlagSet::of(&[Flag::Stop]) },
    Rule { kind: Kind::Version, required: Flag::Version, allowed: FlagSet::of(&[Flag::Version]) },
    Rule { kind: Kind::Help, required: Flag::Help, allowed: FlagSet::of(&[Flag::Help]) },
];

impl Rule {
    fn selects(&self, present: FlagSet) -> bool {
        present.contains(self.required)
    }

    fn extraneous(&self, present: FlagSet) -> FlagSet {
        present.difference(self.allowed)
    }
}

pub(crate) fn resolve(p: &mut Parser) -> Result<Command> {
    let fields = Fields::accumulate(p)?;
    classify(fields)
}

fn classify(fields: Fields) -> Result<Command> {
    let present = fields.present;
    if present.is_empty() {
        return Ok(Command::Empty);
    }

    let rule = RULES
        .iter()
        .find(|rule| rule.selects(present))
        .ok_or(Error::AmbiguousCommandLine(present))?;

    let extra = rule.extraneous(present);
    if !extra.is_empty() {
        return Err(Error::ConflictingFlags { command: rule.required.long(), extra });
    }
    Ok(rule.kind.build(fields))
}
