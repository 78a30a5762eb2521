//! Fully expanded command lines, with every default spelled out.
//!
//! Words are separated by whitespace. A value containing whitespace, a quote
//! or a backslash is wrapped in single quotes, shell style, so that
//! [`Command::from_line`] splits the line back into the same arguments.
use std::{borrow::Cow, ffi::OsString, fmt};

use crate::{
    command::{Command, Start, Trace},
    Error, Result, PROGRAM,
};

impl fmt::Display for Start {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PROGRAM} --url={} --format={} --interval={} --log={}",
            quote(&self.url),
            self.format.code(),
            self.interval,
            self.log.code(),
        )?;
        if self.daemon {
            f.write_str(" --daemon")?;
        }
        Ok(())
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PROGRAM} --trace --format={} --interval={} --log={}",
            self.format.code(),
            self.interval,
            self.log.code(),
        )
    }
}

impl Command {
    /// The command line this command is equivalent to, `None` for
    /// [`Command::Invalid`].
    ///
    /// For `Start` and `Trace`, [`Command::from_line`] on the result gives
    /// back the same command. An empty command line is a request for help and
    /// renders as such.
    pub fn canonical(&self) -> Option<String> {
        let res = match self {
            Command::Start(it) => it.to_string(),
            Command::Trace(it) => it.to_string(),
            Command::Stop => format!("{PROGRAM} --stop"),
            Command::Version => format!("{PROGRAM} --version"),
            Command::Help | Command::Empty => format!("{PROGRAM} [--help]"),
            Command::Invalid => return None,
        };
        Some(res)
    }

    /// Parses a whole command line, program name included, as written by
    /// [`Command::canonical`] or typed into a POSIX shell.
    pub fn from_line(line: &str) -> Command {
        match split_line(line) {
            Ok(words) => Command::from_vec(words.into_iter().skip(1).collect()),
            Err(err) => {
                tracing::debug!(error = %err, "command line rejected");
                Command::Invalid
            }
        }
    }
}

fn needs_quotes(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\'' | '"' | '\\')
}

fn quote(value: &str) -> Cow<'_, str> {
    if value.contains(needs_quotes) {
        Cow::Owned(format!("'{}'", value.replace('\'', r"'\''")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Splits on whitespace; `'...'` is taken literally and `\x` is `x`.
fn split_line(line: &str) -> Result<Vec<OsString>> {
    let unbalanced = || Error::UnbalancedQuote(line.to_string());

    let mut words = Vec::new();
    let mut word: Option<String> = None;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                let buf = word.get_or_insert_with(String::new);
                loop {
                    match chars.next().ok_or_else(unbalanced)? {
                        '\'' => break,
                        c => buf.push(c),
                    }
                }
            }
            '\\' => {
                let c = chars.next().ok_or_else(unbalanced)?;
                word.get_or_insert_with(String::new).push(c);
            }
            c if c.is_whitespace() => words.extend(word.take().map(OsString::from)),
            c => word.get_or_insert_with(String::new).push(c),
        }
    }
    words.extend(word.map(OsString::from));
    Ok(words)
}
