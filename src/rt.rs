use std::ffi::OsString;

use crate::{
    flags::{Flag, FlagSpec},
    Error, Result,
};

/// A recognized flag together with its cleaned-up value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) flag: Flag,
    /// `Some` and non-empty iff the flag takes a value.
    pub(crate) value: Option<String>,
}

pub(crate) struct Parser {
    rargs: Vec<OsString>,
}

impl Parser {
    pub(crate) fn new(mut args: Vec<OsString>) -> Self {
        args.reverse();
        Self { rargs: args }
    }

    pub(crate) fn new_from_env() -> Self {
        let args = std::env::args_os().collect::<Vec<_>>();
        let mut res = Parser::new(args);
        let _progn = res.next();
        res
    }

    pub(crate) fn next_token(&mut self) -> Option<Result<Token>> {
        let arg = self.next()?;
        let res = self.token(arg);
        if let Ok(token) = &res {
            tracing::trace!(flag = token.flag.long(), value = ?token.value, "matched");
        }
        Some(res)
    }

    fn push_back(&mut self, arg: OsString) {
        self.rargs.push(arg)
    }

    fn next(&mut self) -> Option<OsString> {
        self.rargs.pop()
    }

    fn token(&mut self, arg: OsString) -> Result<Token> {
        let arg = arg.into_string().map_err(|it| Error::UnknownFlag(format!("{it:?}")))?;
        if let Some(rest) = arg.strip_prefix("--") {
            return self.long(&arg, rest);
        }
        if let Some(rest) = arg.strip_prefix('-').filter(|it| !it.is_empty()) {
            return self.short(&arg, rest);
        }
        Err(Error::UnknownFlag(arg))
    }

    fn long(&mut self, arg: &str, rest: &str) -> Result<Token> {
        let (name, inline) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (rest, None),
        };
        let spec = FlagSpec::by_long(name).ok_or_else(|| Error::UnknownFlag(arg.to_string()))?;

        if !spec.takes_value() {
            if let Some(value) = inline {
                return Err(Error::UnexpectedValue { flag: spec.long, value: value.to_string() });
            }
            return Ok(Token { flag: spec.flag, value: None });
        }

        let raw = match inline {
            Some(it) => it.to_string(),
            None => self.next_value(spec)?,
        };
        value_token(spec, &raw)
    }

    /// `-x`, `-x value`, `-x=value`, `-xvalue`, or a cluster of switches such
    /// as `-dt`.
    fn short(&mut self, arg: &str, rest: &str) -> Result<Token> {
        let mut chars = rest.chars();
        let spec = chars
            .next()
            .and_then(FlagSpec::by_short)
            .ok_or_else(|| Error::UnknownFlag(arg.to_string()))?;
        let tail = chars.as_str();

        if spec.takes_value() {
            let raw = if tail.is_empty() { self.next_value(spec)? } else { tail.to_string() };
            return value_token(spec, &raw);
        }

        // `-d-url=x` must not turn into `-d --url=x`.
        if tail.starts_with('-') {
            return Err(Error::UnknownFlag(arg.to_string()));
        }
        if !tail.is_empty() {
            self.push_back(format!("-{tail}").into());
        }
        Ok(Token { flag: spec.flag, value: None })
    }

    fn next_value(&mut self, spec: &FlagSpec) -> Result<String> {
        let value = self.next().ok_or(Error::MissingOrEmptyValue(spec.long))?;
        value.into_string().map_err(|value| Error::NotUtf8 { flag: spec.long, value })
    }
}

fn value_token(spec: &FlagSpec, raw: &str) -> Result<Token> {
    let value = trim_value(raw);
    if value.is_empty() {
        return Err(Error::MissingOrEmptyValue(spec.long));
    }
    Ok(Token { flag: spec.flag, value: Some(value.to_string()) })
}

/// Strips leading `=` and whitespace, and trailing whitespace.
fn trim_value(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c == '=' || c.is_whitespace()).trim_end()
}
