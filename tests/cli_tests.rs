use assert_cmd::cargo;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;

const FOLDABLE: &str = "\
BINARY_EXPR (*)
  BINARY_EXPR (+)
    INT (2)
    INT (3)
  INT (4)
";

const LOOP: &str = "\
FOR_STMT
  DECLARATION (i)
    INT (0)
  BINARY_EXPR (<)
    VAR (i)
    INT (2)
  UNARY_EXPR (++)
    VAR (i)
  FUNCTION_CALL (foo)
";

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("astopt-{}-{name}", std::process::id()))
}

#[test]
fn test_optimize_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = cargo::cargo_bin_cmd!("astopt");

    let assert = cmd.arg("optimize").write_stdin(FOLDABLE).assert();
    assert.success().code(0).stdout("INT (20)\n");

    Ok(())
}

#[rstest]
#[case::unroll(vec!["optimize"], LOOP, "SEQUENCE\n  FUNCTION_CALL (foo)\n  FUNCTION_CALL (foo)\n")]
#[case::no_unroll(vec!["optimize", "--no-unroll"], LOOP, LOOP)]
#[case::limit(vec!["optimize", "--max-unroll", "1"], LOOP, LOOP)]
#[case::no_fold(vec!["optimize", "--no-fold"], FOLDABLE, FOLDABLE)]
#[case::json(
    vec!["optimize", "--format", "json"],
    "IF_STMT\n  INT (1)\n  VAR (x)\n",
    "{\n  \"kind\": \"VAR\",\n  \"name\": \"x\"\n}\n"
)]
#[case::check(vec!["check"], FOLDABLE, "Tree is valid: 5 nodes, depth 3\n")]
#[case::codegen(
    vec!["codegen", "--optimize"],
    "RETURN_STMT\n  BINARY_EXPR (-)\n    INT (9)\n    INT (2)\n",
    "#include <stdio.h>\n\nreturn 7;\n"
)]
#[case::graph(
    vec!["graph"],
    "SEQUENCE\n  INT (1)\n",
    "digraph AST {\n  n0 [label=\"SEQUENCE\"];\n  n1 [label=\"INT (1)\"];\n  n0 -> n1;\n}\n"
)]
fn test_commands(#[case] args: Vec<&str>, #[case] input: &str, #[case] expected: &str) {
    let mut cmd = cargo::cargo_bin_cmd!("astopt");
    cmd.args(args).write_stdin(input).assert().success().stdout(expected.to_string());
}

#[test]
fn test_parse_error_stops_pipeline() {
    let mut cmd = cargo::cargo_bin_cmd!("astopt");

    let output = cmd
        .arg("optimize")
        .write_stdin("SEQUENCE\n  WHILE\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "stderr was: {stderr}");
    assert!(stderr.contains("WHILE"), "stderr was: {stderr}");
}

#[test]
fn test_file_input_and_output() -> Result<(), Box<dyn std::error::Error>> {
    let input = temp_path("in.txt");
    let output = temp_path("out.txt");
    fs::write(&input, LOOP)?;

    let mut cmd = cargo::cargo_bin_cmd!("astopt");
    cmd.arg("optimize")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&output)?,
        "SEQUENCE\n  FUNCTION_CALL (foo)\n  FUNCTION_CALL (foo)\n"
    );

    fs::remove_file(&input)?;
    fs::remove_file(&output)?;
    Ok(())
}

#[test]
fn test_failed_parse_writes_no_file() -> Result<(), Box<dyn std::error::Error>> {
    let output = temp_path("never.txt");

    let mut cmd = cargo::cargo_bin_cmd!("astopt");
    cmd.arg("optimize")
        .arg("-o")
        .arg(&output)
        .write_stdin("SEQUENCE\n    INT (1)\n")
        .assert()
        .failure()
        .code(1);

    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_stats_go_to_stderr() {
    let mut cmd = cargo::cargo_bin_cmd!("astopt");

    let output = cmd
        .args(["optimize", "--stats"])
        .write_stdin(FOLDABLE)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "INT (20)\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(r#"{"eliminated":0,"folded":2,"unrolled":0}"#), "stderr was: {stderr}");
}

#[test]
fn test_missing_input_file() {
    let mut cmd = cargo::cargo_bin_cmd!("astopt");
    cmd.args(["check", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_misindented_body_is_rejected() {
    let mut cmd = cargo::cargo_bin_cmd!("astopt");
    cmd.arg("optimize")
        .write_stdin("FUNCTION_DEF (main)\n SEQUENCE\n   RETURN_STMT\n")
        .assert()
        .failure()
        .code(1)
        .stdout("");
}
