//! End-to-end tests of the command-line binary.

use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_string-evolve"))
}

#[test]
fn test_usage_on_missing_argument() {
    let output = binary().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage:"));
}

#[test]
fn test_usage_on_extra_argument() {
    let output = binary().args(["one", "two"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage:"));
}

#[test]
fn test_generation_lines_and_final_count() {
    let output = binary().arg("Hi").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    let (last, generations) = lines.split_last().unwrap();

    let count: usize = last.parse().unwrap();
    assert_eq!(count, generations.len());

    let mut previous = 0;
    for (i, line) in generations.iter().enumerate() {
        let fitness: usize = line
            .strip_prefix(&format!("generation {}: fitness ", i + 1))
            .unwrap_or_else(|| panic!("unexpected line {line:?}"))
            .parse()
            .unwrap();
        assert!(fitness >= previous && fitness <= 2);
        previous = fitness;
    }
    assert_eq!(previous, 2);
}

#[test]
fn test_empty_target_prints_zero() {
    let output = binary().arg("").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0\n");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_target() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = binary()
        .arg(OsStr::from_bytes(&[b'A', 0xff]))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let last = stdout.lines().last().unwrap();
    assert!(last.parse::<usize>().unwrap() >= 1);
    assert!(stdout.contains(": fitness 2\n"));
}
