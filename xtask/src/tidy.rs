use std::path::{Path, PathBuf};

use xshell::Shell;

#[test]
fn sources_are_tidy() {
    let sh = Shell::new().unwrap();
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap().join("crates");

    let mut problems = Vec::new();
    for path in rust_files(&sh, &root) {
        let text = sh.read_file(&path).unwrap();
        for (idx, line) in text.lines().enumerate() {
            let loc = format!("{}:{}", path.display(), idx + 1);
            if line.trim_end() != line {
                problems.push(format!("{loc}: trailing whitespace"));
            }
            for mac in [concat!("dbg", "!("), concat!("todo", "!(")] {
                if line.contains(mac) {
                    problems.push(format!("{loc}: stray `{mac}`"));
                }
            }
        }
        if !text.ends_with('\n') {
            problems.push(format!("{}: missing trailing newline", path.display()));
        }
    }
    assert!(problems.is_empty(), "\n{}\n", problems.join("\n"));
}

fn rust_files(sh: &Shell, dir: &Path) -> Vec<PathBuf> {
    let mut res = Vec::new();
    let mut work = vec![dir.to_path_buf()];
    while let Some(dir) = work.pop() {
        for path in sh.read_dir(&dir).unwrap() {
            if path.is_dir() {
                work.push(path);
            } else if path.extension().map_or(false, |it| it == "rs") {
                res.push(path);
            }
        }
    }
    res.sort();
    res
}
