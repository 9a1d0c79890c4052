use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const PEOPLE: &str = "name,age,city\nAlice,30,NY\nBob,25,LA\nCarol,40,NY\n";

fn csv_file(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{}", contents).unwrap();
    tmp
}

fn run(file: &NamedTempFile, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv-sieve"))
        .arg(file.path())
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn filter_prints_matching_rows_in_order() {
    let file = csv_file(PEOPLE);
    let out = run(&file, &["--where", "age>28"]);

    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Alice") && text.contains("Carol"));
    assert!(!text.contains("Bob"));
    assert!(text.find("Alice").unwrap() < text.find("Carol").unwrap());
}

#[test]
fn filter_then_average() {
    let file = csv_file(PEOPLE);
    let out = run(&file, &["--where", "age>28", "--aggregate", "age=avg"]);

    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "avg(age): 35.00");
}

#[test]
fn no_arguments_prints_whole_table() {
    let file = csv_file(PEOPLE);
    let out = run(&file, &[]);

    assert!(out.status.success());
    let text = stdout(&out);
    for name in ["Alice", "Bob", "Carol"] {
        assert!(text.contains(name));
    }
}

#[test]
fn no_matching_rows_is_success() {
    let file = csv_file(PEOPLE);
    let out = run(&file, &["--where", "city=Paris"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains("No rows match"));
}

#[test]
fn aggregate_over_nothing_falls_back_to_table_branch() {
    let file = csv_file(PEOPLE);
    let out = run(&file, &["--where", "age>100", "--aggregate", "age=max"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains("No rows match"));
}

#[test]
fn missing_file_fails() {
    let out = Command::new(env!("CARGO_BIN_EXE_csv-sieve"))
        .arg("/no/such/file.csv")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("not found"));
    assert!(out.stdout.is_empty());
}

#[test]
fn malformed_inputs_fail_with_status_one() {
    let file = csv_file(PEOPLE);
    let cases: &[&[&str]] = &[
        &["--where", "age30"],
        &["--where", "salary>10"],
        &["--where", "city>5"],
        &["--aggregate", "age"],
        &["--aggregate", "salary=avg"],
        &["--aggregate", "city=min"],
    ];
    for args in cases {
        let out = run(&file, args);
        assert_eq!(out.status.code(), Some(1), "args: {args:?}");
        assert!(stderr(&out).starts_with("Error:"), "args: {args:?}");
        assert!(out.stdout.is_empty(), "args: {args:?}");
    }
}

#[test]
fn unsupported_function_is_reported() {
    let file = csv_file(PEOPLE);
    let out = run(&file, &["--aggregate", "age=sum"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("unsupported aggregation function 'sum'"));
}

#[test]
fn directory_path_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_csv-sieve"))
        .arg(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("Error: cannot read"), "{err}");
    assert!(!err.contains("malformed CSV"), "{err}");
    assert_eq!(err.matches("is a directory").count(), 1, "{err}");
}
