//! `fatal` ends the process, so it runs in a child copy of this test binary.

use logfacade::FacadeConfig;
use std::env;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const CHILD_ENV: &str = "LOGFACADE_FATAL_CHILD_PATH";

#[test]
fn fatal_child() {
    let Ok(path) = env::var(CHILD_ENV) else {
        return;
    };
    logfacade::startup(FacadeConfig::new("app").with_path(path).verbose(false)).unwrap();
    logfacade::fatal!(42, "boom");
}

#[test]
fn fatal_logs_critical_and_exits_with_code() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("fatal.log");

    let status = Command::new(env::current_exe().unwrap())
        .args(["fatal_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, &log_path)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(42));
    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Critical "));
    assert!(lines[0].ends_with(": boom"));
}

#[test]
fn fatal_exits_even_when_uninitialized() {
    let status = Command::new(env::current_exe().unwrap())
        .args(["fatal_uninitialized_child", "--exact", "--nocapture"])
        .env("LOGFACADE_FATAL_UNINITIALIZED", "1")
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(7));
}

#[test]
fn fatal_uninitialized_child() {
    if env::var("LOGFACADE_FATAL_UNINITIALIZED").is_err() {
        return;
    }
    logfacade::fatal!(7, "no logger");
}
