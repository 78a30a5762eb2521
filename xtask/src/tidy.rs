use std::path::{Path, PathBuf};

use xshell::Shell;

use crate::project_root;

fn rust_files(sh: &Shell, dir: &Path, acc: &mut Vec<PathBuf>) {
    let Ok(entries) = sh.read_dir(dir) else { return };
    for path in entries {
        if path.is_dir() {
            if !path.ends_with("target") {
                rust_files(sh, &path, acc);
            }
        } else if path.extension().map_or(false, |it| it == "rs") {
            acc.push(path);
        }
    }
}

fn sources() -> Vec<(PathBuf, String)> {
    let sh = Shell::new().unwrap();
    let root = project_root();
    let mut files = Vec::new();
    for dir in ["src", "tests", "demos", "xtask/src"] {
        rust_files(&sh, &root.join(dir), &mut files);
    }
    assert!(!files.is_empty());
    files
        .into_iter()
        .map(|path| {
            let text = sh.read_file(&path).unwrap();
            (path, text)
        })
        .collect()
}

#[test]
fn whitespace() {
    for (path, text) in sources() {
        assert!(text.ends_with('\n'), "{} must end with a newline", path.display());
        assert!(!text.contains('\t'), "{} contains tabs", path.display());
        assert!(!text.contains("\r\n"), "{} has CRLF line endings", path.display());
        for (i, line) in text.lines().enumerate() {
            assert!(
                line == line.trim_end(),
                "{}:{} has trailing whitespace",
                path.display(),
                i + 1
            );
        }
    }
}

#[test]
fn no_debug_leftovers() {
    let dbg = ["dbg", "!("].concat();
    for (path, text) in sources() {
        assert!(!text.contains(&dbg), "{} has a leftover debug macro", path.display());
    }
}
