//! The table of recognized flags and the set type used to track which of them
//! were seen.
use std::fmt;

/// Identity of a recognized flag.
///
/// The discriminant is the flag's index in [`FLAGS`] and its bit in a
/// [`FlagSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    Url,
    Format,
    Interval,
    Log,
    Daemon,
    Trace,
    Stop,
    Version,
    Help,
}

impl Flag {
    pub const ALL: [Flag; 9] = [
        Flag::Url,
        Flag::Format,
        Flag::Interval,
        Flag::Log,
        Flag::Daemon,
        Flag::Trace,
        Flag::Stop,
        Flag::Version,
        Flag::Help,
    ];

    fn spec(self) -> &'static FlagSpec {
        &FLAGS[self as usize]
    }

    /// Long name, without the leading `--`.
    pub fn long(self) -> &'static str {
        self.spec().long
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Static description of one flag.
#[derive(Debug)]
pub struct FlagSpec {
    pub flag: Flag,
    pub long: &'static str,
    pub short: Option<char>,
    /// Placeholder shown in help, `Some` iff the flag requires a value.
    pub value: Option<&'static str>,
    pub doc: &'static str,
}

impl FlagSpec {
    pub fn takes_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn by_long(name: &str) -> Option<&'static FlagSpec> {
        FLAGS.iter().find(|it| it.long == name)
    }

    pub fn by_short(letter: char) -> Option<&'static FlagSpec> {
        FLAGS.iter().find(|it| it.short == Some(letter))
    }
}

pub static FLAGS: [FlagSpec; 9] = [
    FlagSpec {
        flag: Flag::Url,
        long: "url",
        short: Some('u'),
        value: Some("url"),
        doc: "full URL to relay data to",
    },
    FlagSpec {
        flag: Flag::Format,
        long: "format",
        short: Some('f'),
        value: Some("fmt"),
        doc: "format to which the UDP data is repackaged:\n\
              0) JSON untranslated, 1) REST API, 2) Ecowitt\n\
              (default if omitted: 1)",
    },
    FlagSpec {
        flag: Flag::Interval,
        long: "interval",
        short: Some('i'),
        value: Some("min"),
        doc: "interval in minutes at which data is relayed:\n\
              0 <= min <= 30 (default if omitted: 1)",
    },
    FlagSpec {
        flag: Flag::Log,
        long: "log",
        short: Some('l'),
        value: Some("lev"),
        doc: "0) only errors\n\
              1) errors and warnings\n\
              2) errors, warnings and info (default if omitted)\n\
              3) errors, warnings, info and debug (everything)",
    },
    FlagSpec {
        flag: Flag::Daemon,
        long: "daemon",
        short: Some('d'),
        value: None,
        doc: "run as a service",
    },
    FlagSpec {
        flag: Flag::Trace,
        long: "trace",
        short: Some('t'),
        value: None,
        doc: "relay data to the terminal standard output",
    },
    FlagSpec {
        flag: Flag::Stop,
        long: "stop",
        short: Some('s'),
        value: None,
        doc: "stop the relay and exit gracefully",
    },
    FlagSpec {
        flag: Flag::Version,
        long: "version",
        short: Some('v'),
        value: None,
        doc: "print version information",
    },
    FlagSpec {
        flag: Flag::Help,
        long: "help",
        short: Some('h'),
        value: None,
        doc: "print this help",
    },
];

/// A set of [`Flag`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlagSet(u16);

impl FlagSet {
    pub const EMPTY: FlagSet = FlagSet(0);

    pub const fn of(flags: &[Flag]) -> FlagSet {
        let mut bits = 0;
        let mut i = 0;
        while i < flags.len() {
            bits |= flags[i].bit();
            i += 1;
        }
        FlagSet(bits)
    }

    pub fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }

    pub const fn contains(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Flags in `self` that are not in `other`.
    pub const fn difference(self, other: FlagSet) -> FlagSet {
        FlagSet(self.0 & !other.0)
    }

    /// Iterates in table order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |&it| self.contains(it))
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> FlagSet {
        let mut res = FlagSet::EMPTY;
        for flag in iter {
            res.insert(flag);
        }
        res
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for flag in self.iter() {
            write!(f, "{sep}`--{}`", flag.long())?;
            sep = ", ";
        }
        Ok(())
    }
}
