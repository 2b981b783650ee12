use std::process::{Command, Output};

fn run_binary(rust_log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scan_quicksort"));
    match rust_log {
        Some(filter) => cmd.env("RUST_LOG", filter),
        None => cmd.env_remove("RUST_LOG"),
    };
    cmd.output().unwrap()
}

#[test]
fn prints_single_integer_without_newline() {
    let output = run_binary(None);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "3");
    assert!(output.stderr.is_empty());
}

#[test]
fn logging_stays_off_stdout() {
    let output = run_binary(Some("scan_quicksort=trace"));

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "3");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("partition"));
    assert!(stderr.contains("sort finished"));
}

#[test]
fn output_parses_as_decimal() {
    let output = run_binary(None);
    let text = String::from_utf8(output.stdout).unwrap();

    assert!(text.chars().all(|c| c.is_ascii_digit() || c == '-'));
    assert_eq!(text.parse::<i32>().unwrap(), scan_quicksort::run_seeded().unwrap());
}
