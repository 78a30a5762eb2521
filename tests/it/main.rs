
use std::ffi::OsString;

use expect_test::{expect, Expect};
use tempest_args::{Command, DataFormat, LogLevel, Start};

fn parse(args: &str) -> Command {
    let args = args.split_ascii_whitespace().map(OsString::from).collect::<Vec<_>>();
    Command::from_vec(args)
}

fn check(args: &str, expect: Expect) {
    expect.assert_debug_eq(&parse(args));
}

#[test]
fn empty() {
    check(
        "",
        expect![[r#"
            Empty
        "#]],
    );
    assert!(parse("").is_empty());
    assert!(parse("").wants_usage());
}

#[test]
fn start_with_defaults() {
    check(
        "--url=http://x",
        expect![[r#"
            Start(
                Start {
                    url: "http://x",
                    format: Rest,
                    interval: 1,
                    log: Info,
                    daemon: false,
                },
            )
        "#]],
    );
    assert_eq!(
        parse("-u http://x").start(),
        Some(&Start {
            url: "http://x".to_string(),
            format: DataFormat::Rest,
            interval: 1,
            log: LogLevel::Info,
            daemon: false,
        })
    );
}

#[test]
fn start_with_everything() {
    check(
        "-u=192.168.1.100:39500 --format=2 -i 30 --log 0 --daemon",
        expect![[r#"
            Start(
                Start {
                    url: "192.168.1.100:39500",
                    format: Ecowitt,
                    interval: 30,
                    log: Error,
                    daemon: true,
                },
            )
        "#]],
    );
}

#[test]
fn trace() {
    check(
        "--trace -f0 -l3",
        expect![[r#"
            Trace(
                Trace {
                    format: Json,
                    interval: 1,
                    log: Debug,
                },
            )
        "#]],
    );
    check(
        "-t",
        expect![[r#"
            Trace(
                Trace {
                    format: Rest,
                    interval: 1,
                    log: Info,
                },
            )
        "#]],
    );
}

#[test]
fn switches() {
    assert!(parse("--stop").is_stop());
    assert!(parse("-s").is_stop());
    assert!(parse("--version").is_version());
    assert!(parse("-v").is_version());
    assert!(parse("--help").is_help());
    assert!(parse("-h").is_help());
    assert!(parse("-h").wants_usage());
    assert!(!parse("").is_help());
    assert!(!parse("--stop").wants_usage());
}

#[test]
fn repeated_switch() {
    check(
        "--stop -s",
        expect![[r#"
            Stop
        "#]],
    );
}

#[test]
fn bad_values() {
    for args in [
        "--url=http://x --format=5",
        "--url=http://x --interval=31",
        "--url=http://x --log=-1",
        "--url=http://x --log=two",
        "--url=",
        "--url",
        "-u",
        "--url=http://x -f",
        "--trace --interval= ",
    ] {
        assert!(parse(args).is_invalid(), "{args}");
    }
}

#[test]
fn unknown_flags() {
    for args in [
        "--url=http://x extra",
        "stop",
        "--stop --",
        "-",
        "--verbose",
        "-x",
        "--daemon=1 --url=http://x",
        "--ver",
        "-d-url=http://x",
        "-t-log=3",
        "-dt-stop",
    ] {
        check(
            args,
            expect![[r#"
                Invalid
            "#]],
        );
    }
}

#[test]
fn conflicting_flags() {
    for args in [
        "--trace --daemon",
        "--stop --url=http://x",
        "--help --version",
        "--stop --trace",
        "--version --log=1",
        "--help -d",
        "--stop --help",
    ] {
        assert!(parse(args).is_invalid(), "{args}");
    }
}

#[test]
fn url_and_trace_is_invalid() {
    // `--url` picks Start, and Start doesn't take `--trace`.
    check(
        "--url=http://x --trace",
        expect![[r#"
            Invalid
        "#]],
    );
    check(
        "--trace --url=http://x",
        expect![[r#"
            Invalid
        "#]],
    );
}

#[test]
fn options_without_command() {
    for args in ["--format=1", "--daemon", "-i 5 -l 1", "-d -f 2"] {
        assert!(parse(args).is_invalid(), "{args}");
        assert!(parse(args).wants_usage(), "{args}");
    }
}

#[test]
fn short_clusters() {
    check(
        "-dl1 -u http://x",
        expect![[r#"
            Start(
                Start {
                    url: "http://x",
                    format: Rest,
                    interval: 1,
                    log: Warn,
                    daemon: true,
                },
            )
        "#]],
    );
    assert!(parse("-td").is_invalid());
}

#[test]
fn values_are_trimmed() {
    let cmd = Command::from_vec(vec!["--url= http://x ".into(), "--interval== 7".into()]);
    assert_eq!(cmd.start().map(|it| (it.url.as_str(), it.interval)), Some(("http://x", 7)));
}

#[test]
fn accessors_are_exclusive() {
    let cmds = ["--url=http://x", "--trace", "--stop", "--version", "--help", "", "--nope"]
        .map(parse);
    for (i, cmd) in cmds.iter().enumerate() {
        let hits = [
            cmd.start().is_some(),
            cmd.trace().is_some(),
            cmd.is_stop(),
            cmd.is_version(),
            cmd.is_help(),
            cmd.is_empty(),
            cmd.is_invalid(),
        ];
        let expected = (0..hits.len()).map(|j| j == i).collect::<Vec<_>>();
        assert_eq!(hits.to_vec(), expected, "{cmd:?}");
    }
}
