//! Startup behavior when no credential is available.

use std::process::Command;

#[test]
fn exits_with_status_2_without_credentials() {
    // Run the server binary from a scratch directory with no secret file
    // and no environment variable; it must refuse to start.
    let dir = std::env::temp_dir().join(format!("model-relay-startup-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_model-relay"))
        .current_dir(&dir)
        .env_remove("ANTHROPIC_API_KEY")
        .status()
        .expect("failed to run the server binary");

    assert_eq!(status.code(), Some(2));

    let _ = std::fs::remove_dir_all(&dir);
}
