//! Typed values collected from the command line.
use std::{fmt, ops::RangeInclusive};

use tracing::{level_filters::LevelFilter, Level};

use crate::{
    flags::{Flag, FlagSet},
    rt::{Parser, Token},
    Error, Result,
};

pub(crate) const MAX_INTERVAL: u32 = 30;

/// Shape of the data the relay forwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// The UDP payload as received, untranslated.
    Json,
    #[default]
    Rest,
    Ecowitt,
}

impl DataFormat {
    pub fn from_code(code: i64) -> Option<DataFormat> {
        match code {
            0 => Some(DataFormat::Json),
            1 => Some(DataFormat::Rest),
            2 => Some(DataFormat::Ecowitt),
            _ => None,
        }
    }

    /// The number used for this format on the command line.
    pub fn code(self) -> u8 {
        match self {
            DataFormat::Json => 0,
            DataFormat::Rest => 1,
            DataFormat::Ecowitt => 2,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataFormat::Json => "JSON",
            DataFormat::Rest => "REST",
            DataFormat::Ecowitt => "Ecowitt",
        })
    }
}

/// Verbosity of the relay's own log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    pub fn from_code(code: i64) -> Option<LogLevel> {
        match code {
            0 => Some(LogLevel::Error),
            1 => Some(LogLevel::Warn),
            2 => Some(LogLevel::Info),
            3 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
        }
    }

    pub fn filter(self) -> LevelFilter {
        LevelFilter::from_level(self.into())
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Level {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
        }
    }
}

/// Everything seen on the command line, with defaults for what wasn't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fields {
    pub(crate) url: String,
    pub(crate) format: DataFormat,
    pub(crate) interval: u32,
    pub(crate) log: LogLevel,
    pub(crate) daemon: bool,
    pub(crate) present: FlagSet,
}

impl Default for Fields {
    fn default() -> Fields {
        Fields {
            url: String::new(),
            format: DataFormat::default(),
            interval: 1,
            log: LogLevel::default(),
            daemon: false,
            present: FlagSet::EMPTY,
        }
    }
}

impl Fields {
    /// Stops at the first bad token or value.
    pub(crate) fn accumulate(p: &mut Parser) -> Result<Fields> {
        let mut fields = Fields::default();
        while let Some(token) = p.next_token() {
            fields.feed(token?)?;
        }
        Ok(fields)
    }

    fn feed(&mut self, token: Token) -> Result<()> {
        let Token { flag, value } = token;
        match flag {
            Flag::Url => self.url = required(flag, value)?,
            Flag::Format => {
                let value = required(flag, value)?;
                self.format = parse_int(&value)
                    .and_then(DataFormat::from_code)
                    .ok_or_else(|| out_of_range(flag, value, 0..=2))?;
            }
            Flag::Interval => {
                let value = required(flag, value)?;
                self.interval = parse_int(&value)
                    .and_then(|it| u32::try_from(it).ok())
                    .filter(|it| *it <= MAX_INTERVAL)
                    .ok_or_else(|| out_of_range(flag, value, 0..=i64::from(MAX_INTERVAL)))?;
            }
            Flag::Log => {
                let value = required(flag, value)?;
                self.log = parse_int(&value)
                    .and_then(LogLevel::from_code)
                    .ok_or_else(|| out_of_range(flag, value, 0..=3))?;
            }
            Flag::Daemon => self.daemon = true,
            Flag::Trace | Flag::Stop | Flag::Version | Flag::Help => (),
        }
        self.present.insert(flag);
        Ok(())
    }
}

fn required(flag: Flag, value: Option<String>) -> Result<String> {
    value.filter(|it| !it.is_empty()).ok_or(Error::MissingOrEmptyValue(flag.long()))
}

fn parse_int(value: &str) -> Option<i64> {
    value.parse().ok()
}

fn out_of_range(flag: Flag, value: String, range: RangeInclusive<i64>) -> Error {
    Error::OutOfRange { flag: flag.long(), value, range }
}
