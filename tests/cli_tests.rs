use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"))
        .join("cli_tests")
        .join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

/// Run the binary with `input` on stdin, returning (success, stdout, stderr)
fn run_cli(args: &[&str], input: &str) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_transit_cli"))
        .args(args)
        .env("RUST_LOG", "info")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start transit_cli");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write script");

    let output = child.wait_with_output().expect("Failed to wait for transit_cli");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

/// Test that a new user can register, buy a ticket and exit
#[test]
fn test_register_and_exit() {
    let dir = scratch_dir("register_and_exit");
    let users = dir.join("users.json");
    let log = dir.join("app.log");

    let (success, stdout, stderr) = run_cli(
        &[
            "--users-file",
            users.to_str().unwrap(),
            "--log-file",
            log.to_str().unwrap(),
        ],
        "bob\n1\nBob\nJones\n40\nbob\n1\n4\n5\n",
    );

    assert!(success, "transit_cli failed. stderr: {}", stderr);
    assert!(stdout.contains("Dastur tugatildi."));

    let stored = fs::read_to_string(&users).expect("users file should exist");
    assert!(stored.contains("\"username\": \"bob\""));

    let log_contents = fs::read_to_string(&log).expect("log file should exist");
    let registered = log_contents
        .lines()
        .find(|line| line.contains("User registered: bob"))
        .expect("registration should be logged");
    let parts: Vec<&str> = registered.splitn(3, " - ").collect();
    assert_eq!(parts.len(), 3, "unexpected log line: {}", registered);
    assert!(
        chrono::DateTime::parse_from_rfc3339(parts[0]).is_ok(),
        "timestamp is not RFC 3339: {}",
        parts[0]
    );
    assert_eq!(parts[1], "INFO");
    assert!(parts[2].starts_with("User registered: bob"));

    assert!(log_contents.contains("User logged in: bob"));
    assert!(log_contents.contains("Ticket purchased: bob"));
    assert!(log_contents.contains("User logged out: bob"));
}

/// Test that a corrupt store stops the program without touching the file
#[test]
fn test_corrupt_store_fails() {
    let dir = scratch_dir("corrupt_store");
    let users = dir.join("users.json");
    fs::write(&users, "[{").unwrap();

    let (success, _, _) = run_cli(
        &["--users-file", users.to_str().unwrap(), "--no-log-file"],
        "bob\n",
    );

    assert!(!success, "corrupt store should be fatal by default");
    assert_eq!(fs::read_to_string(&users).unwrap(), "[{");
}

/// Test that the lenient policy treats a corrupt store as empty
#[test]
fn test_corrupt_store_lenient() {
    let dir = scratch_dir("corrupt_lenient");
    let users = dir.join("users.json");
    fs::write(&users, "[{").unwrap();

    let (success, stdout, stderr) = run_cli(
        &[
            "--users-file",
            users.to_str().unwrap(),
            "--no-log-file",
            "--on-corrupt",
            "empty",
        ],
        "bob\n1\nBob\nJones\n40\nbob\n2\n5\n",
    );

    assert!(success, "transit_cli failed. stderr: {}", stderr);
    assert!(stdout.contains("Siz ro'yxatdan o'tmagansiz."));
    assert!(stderr.contains("corrupt"));
    assert!(fs::read_to_string(&users).unwrap().contains("\"bob\""));
}
