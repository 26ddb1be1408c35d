mod common;

use std::path::PathBuf;
use std::process::Output;

use common::command;
use regex::Regex;
use test_generator::test_resources;

struct Expected {
    out: Vec<String>,
    lexical_err: Vec<String>,
}

#[test_resources("tests/suite/*/*.lox")]
fn tokenize_file_test(filename: &str) {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(filename);
    let expected = parse_comments(&path);
    let output = command()
        .arg("tokenize")
        .arg(path)
        .output()
        .expect("Command execution error.");

    let out: Vec<String> = String::from_utf8(output.stdout.clone())
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect();
    let err: Vec<String> = String::from_utf8(output.stderr.clone())
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect();

    run_assertions(expected, output, out, err);
}

#[test]
fn missing_file_exits_with_io_error() {
    let output = command()
        .arg("tokenize")
        .arg("tests/suite/does_not_exist.lox")
        .output()
        .expect("Command execution error.");
    assert_eq!(output.status.code(), Some(74));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_utf8_bytes_pass_through_unchanged() {
    let output = command()
        .arg("tokenize")
        .arg("tests/raw/invalid_utf8.lox")
        .output()
        .expect("Command execution error.");
    assert_eq!(output.status.code(), Some(65));
    assert_eq!(output.stdout, b"STRING \"\xC3\" \xC3\nEOF  null\n");
    assert_eq!(output.stderr, b"[line 1] Error: Unexpected character: \xE9\n");
}

#[test]
fn bad_arguments_exit_with_usage_error() {
    let output = command().output().expect("Command execution error.");
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8(output.stderr).expect("Invalid UTF-8");
    assert!(stderr.contains("tokenize <filename>"));

    let output = command()
        .arg("evaluate")
        .arg("tests/suite/scanning/empty.lox")
        .output()
        .expect("Command execution error.");
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8(output.stderr).expect("Invalid UTF-8");
    assert_eq!(stderr.trim_end(), "Unknown command: evaluate");
}

fn parse_comments(path: &PathBuf) -> Expected {
    let output_re = Regex::new(r"// expect: ?(.*)").expect("Invalid regex.");
    let error_re = Regex::new(r"// (Error.*)").expect("Invalid regex.");
    let error_line_re = Regex::new(r"// \[line (\d+)\] (Error.*)").expect("Invalid regex.");

    let mut expected = Expected {
        out: vec![],
        lexical_err: vec![],
    };

    println!("{}", path.display());
    let content = std::fs::read_to_string(path).expect("Could not read path to string.");
    for (i, line) in content.lines().enumerate() {
        if let Some(m) = output_re.captures(line) {
            let s = m[1].to_owned();
            expected.out.push(s);
        }
        if let Some(m) = error_line_re.captures(line) {
            let line = &m[1];
            let msg = &m[2];
            let s = format!("[line {}] {}", line, msg);
            expected.lexical_err.push(s);
        }
        if let Some(m) = error_re.captures(line) {
            let msg = &m[1];
            let s = format!("[line {}] {}", i + 1, msg);
            expected.lexical_err.push(s);
        }
    }
    expected
}

fn run_assertions(expected: Expected, output: Output, out: Vec<String>, err: Vec<String>) {
    match expected.lexical_err.is_empty() {
        true => assert!(
            output.status.success(),
            "Program exited with failure, expected success"
        ),
        false => assert_eq!(
            output
                .status
                .code()
                .expect("Process terminated by a signal."),
            65,
            "Lexical errors should have error code 65"
        ),
    }

    assert_eq!(expected.lexical_err, err, "Lexical errors should match");
    assert_eq!(expected.out, out, "Output should match");
}
