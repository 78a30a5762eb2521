use std::{ffi::OsString, fmt::Write};

use crate::{
    command::{Kind, Rule, RULES},
    flags::FLAGS,
    PROGRAM,
};

macro_rules! w {
    ($($tt:tt)*) => {
        let _ = write!($($tt)*);
    };
}

const EXAMPLES: [&str; 3] = [
    "tempest --url=http://hubitat.local:39501 --format=2 --interval=5",
    "tempest -u=192.168.1.100:39500 -l=1 -d",
    "tempest --stop",
];

/// Full help text: one synopsis per command, every option, and examples.
pub fn usage() -> String {
    let mut buf = String::new();
    w!(buf, "Usage: {PROGRAM} [OPTIONS]\n");

    blank_line(&mut buf);
    w!(buf, "COMMANDS:\n");
    for rule in RULES.iter() {
        let name = format!("{}:", rule.kind.name());
        w!(buf, "    {name:<10}{}\n", synopsis(rule));
    }

    blank_line(&mut buf);
    w!(buf, "OPTIONS:\n");
    let mut blank = "";
    for spec in FLAGS.iter() {
        w!(buf, "{blank}");
        blank = "\n";

        let short = spec.short.map(|it| format!("-{it}, ")).unwrap_or_default();
        let value = spec.value.map(|it| format!(" <{it}>")).unwrap_or_default();
        w!(buf, "    {short}--{}{value}\n", spec.long);
        write_lines_indented(&mut buf, spec.doc, 6);
    }

    blank_line(&mut buf);
    w!(buf, "EXAMPLES:\n");
    for example in EXAMPLES {
        w!(buf, "    {example}\n");
    }
    buf
}

/// The raw command line, program name included, for "invoked as" logs.
pub fn command_line(args: &[OsString]) -> String {
    args.iter().map(|it| it.to_string_lossy()).collect::<Vec<_>>().join(" ")
}

/// The required flag comes first; everything else allowed is optional.
fn synopsis(rule: &Rule) -> String {
    // A bare `tempest` asks for help, so `--help` itself is optional.
    let required = Some(rule.required).filter(|_| rule.kind != Kind::Help);

    let mut buf = String::from(PROGRAM);
    let mut specs = FLAGS.iter().filter(|it| rule.allowed.contains(it.flag)).collect::<Vec<_>>();
    specs.sort_by_key(|it| Some(it.flag) != required);
    for spec in specs {
        let arg = match spec.value {
            Some(value) => format!("--{}=<{value}>", spec.long),
            None => format!("--{}", spec.long),
        };
        if Some(spec.flag) == required {
            w!(buf, " {arg}");
        } else {
            w!(buf, " [{arg}]");
        }
    }
    buf
}

fn write_lines_indented(buf: &mut String, multiline_str: &str, indent: usize) {
    for line in multiline_str.split('\n').map(str::trim_end) {
        if line.is_empty() {
            w!(buf, "\n");
        } else {
            w!(buf, "{blank:indent$}{line}\n", blank = "");
        }
    }
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}
