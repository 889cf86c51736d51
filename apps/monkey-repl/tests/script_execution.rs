use monkey_lang::environment::Environment;
use monkey_lang::evaluator::eval_source;
use std::io::Write;
use std::process::Command;

fn write_script(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp script");
    writeln!(file, "{}", contents).unwrap();
    file
}

fn run_binary(script: &std::path::Path) -> std::process::ExitStatus {
    Command::new(env!("CARGO_BIN_EXE_monkey"))
        .arg(script)
        .status()
        .expect("spawn monkey binary")
}

#[test]
fn a_script_file_on_disk_evaluates_to_its_final_expression() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp script");
    writeln!(
        file,
        "let fib = fn(n) {{ if (n < 2) {{ n }} else {{ fib(n - 1) + fib(n - 2) }} }}; fib(10);"
    )
    .unwrap();

    let source = std::fs::read_to_string(file.path()).unwrap();
    let env = Environment::new();
    let result = eval_source(&source, &env).expect("script should parse");
    assert_eq!(result.to_string(), "55");
}

#[test]
fn a_malformed_script_reports_a_parse_error_instead_of_panicking() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp script");
    writeln!(file, "let x 5;").unwrap();

    let source = std::fs::read_to_string(file.path()).unwrap();
    let env = Environment::new();
    assert!(eval_source(&source, &env).is_err());
}

#[test]
fn a_script_ending_in_a_runtime_error_exits_nonzero() {
    let file = write_script("5 + true;");
    let status = run_binary(file.path());
    assert_eq!(status.code(), Some(1));
}

#[test]
fn a_script_ending_in_a_parse_error_exits_nonzero() {
    let file = write_script("let x 5;");
    let status = run_binary(file.path());
    assert_eq!(status.code(), Some(1));
}

#[test]
fn a_successful_script_exits_zero() {
    let file = write_script("1 + 1;");
    let status = run_binary(file.path());
    assert_eq!(status.code(), Some(0));
}
