mod common;

use std::fs;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn help_lists_the_init_subcommand() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag_reports_the_package_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    let ctx = TestContext::new();

    ctx.cli().arg("provision").assert().failure();
}

#[test]
fn init_without_a_terminal_aborts_with_no_files() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("init")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    // Collection aborted before any generator ran.
    assert!(fs::read_dir(ctx.work_dir()).unwrap().next().is_none());
}
