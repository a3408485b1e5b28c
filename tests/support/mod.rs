//! Spawns the built `beeline` binary and asserts on its stdout/stderr,
//! modeled on the teacher's `test-utils` crate (`Expected`,
//! `check_compilation`). Beeline has a single binary and no compile step,
//! so this lives as a local `tests/support` module rather than its own
//! workspace crate.

use std::error::Error;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::str;

pub struct Expected<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
}

impl<'a> Expected<'a> {
    fn assert_matches(&self, output: &Output) -> Result<(), Box<dyn Error>> {
        assert_eq!(str::from_utf8(&output.stdout)?, self.stdout);
        assert_eq!(str::from_utf8(&output.stderr)?, self.stderr);
        Ok(())
    }
}

fn run_beeline(args: &[&str], stdin: &str) -> Result<Output, std::io::Error> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_beeline"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(stdin.as_bytes())?;

    child.wait_with_output()
}

pub fn check_run(source: &str, expected: Expected) -> Result<(), Box<dyn Error>> {
    let output = run_beeline(&[], source)?;
    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "beeline exited with status {:?}",
        output.status.code()
    );
    Ok(())
}

pub fn check_failing_run(source: &str) -> Result<Output, Box<dyn Error>> {
    let output = run_beeline(&[], source)?;
    assert!(
        !output.status.success(),
        "beeline should have exited non-zero"
    );
    Ok(output)
}

pub fn run_with_args(args: &[&str]) -> Result<Output, std::io::Error> {
    run_beeline(args, "")
}
