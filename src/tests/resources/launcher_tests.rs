use crate::{AdGuardError, ListenAddr, ServiceLauncher};
use tempfile::TempDir;

async fn listen_addr() -> ListenAddr {
    ListenAddr::new("127.0.0.1".to_string()).await.unwrap()
}

#[cfg(unix)]
fn write_stub_service(dir: &std::path::Path, exit_code: i32) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake_adguardhome");
    std::fs::write(&script, format!("#!/bin/sh\nexit {}\n", exit_code)).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[tokio::test]
async fn test_run_fails_when_conf_dir_missing() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("work")).unwrap();

    let launcher = ServiceLauncher::new()
        .with_install_root(root.path())
        .with_binary("/nonexistent/AdGuardHome");

    let result = launcher.run(&listen_addr().await).await;
    match result {
        // A Launch error here would mean a spawn was attempted.
        Err(AdGuardError::MissingDirectory { path }) => {
            assert!(path.ends_with("conf"), "unexpected path: {}", path.display());
        }
        other => panic!("expected MissingDirectory, got {:?}", other),
    }
}

#[tokio::test]
async fn test_run_fails_when_work_dir_missing() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("conf")).unwrap();

    let launcher = ServiceLauncher::new()
        .with_install_root(root.path())
        .with_binary("/nonexistent/AdGuardHome");

    let result = launcher.run(&listen_addr().await).await;
    match result {
        Err(AdGuardError::MissingDirectory { path }) => {
            assert!(path.ends_with("work"), "unexpected path: {}", path.display());
        }
        other => panic!("expected MissingDirectory, got {:?}", other),
    }
}

#[tokio::test]
async fn test_run_fails_when_binary_missing() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("conf")).unwrap();
    std::fs::create_dir(root.path().join("work")).unwrap();

    let launcher = ServiceLauncher::new()
        .with_install_root(root.path())
        .with_binary("/nonexistent/AdGuardHome");

    let result = launcher.run(&listen_addr().await).await;
    assert!(matches!(result, Err(AdGuardError::Launch { .. })));
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_returns_handle_once_process_exists() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("conf")).unwrap();
    std::fs::create_dir(root.path().join("work")).unwrap();
    let binary = write_stub_service(root.path(), 0);

    let launcher = ServiceLauncher::new()
        .with_install_root(root.path())
        .with_binary(binary);

    let handle = launcher.run(&listen_addr().await).await.unwrap();
    assert!(handle.pid() > 0);

    let status = handle.wait().await.expect("exit status should be observed");
    assert!(status.success());
}

#[cfg(unix)]
#[tokio::test]
async fn test_child_failure_surfaces_through_handle_not_run() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("conf")).unwrap();
    std::fs::create_dir(root.path().join("work")).unwrap();
    let binary = write_stub_service(root.path(), 3);

    let launcher = ServiceLauncher::new()
        .with_install_root(root.path())
        .with_binary(binary);

    // run() succeeds even though the child will exit nonzero.
    let handle = launcher.run(&listen_addr().await).await.unwrap();

    let status = handle.wait().await.expect("exit status should be observed");
    assert!(!status.success());
    assert_eq!(status.code(), Some(3));
}
