//! Launches the AdGuard Home service as a local child process and
//! supervises it without blocking the caller.

use crate::core::domain::{
    error::{AdGuardError, AdGuardResult},
    value_object::ListenAddr,
};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::{error, info};

const DEFAULT_INSTALL_ROOT: &str = "/opt/adguardhome";
const DEFAULT_BINARY: &str = "/usr/local/bin/AdGuardHome";
const CONF_DIR_NAME: &str = "conf";
const WORK_DIR_NAME: &str = "work";
const CONFIG_FILE_NAME: &str = "AdGuardHome.yaml";

/// Starts the AdGuard Home executable against a local installation.
///
/// The installation root must contain a `conf` directory (holding
/// `AdGuardHome.yaml`) and a `work` directory. Both paths default to the
/// standard installation layout and can be overridden for tests or
/// non-standard deployments.
///
/// # Examples
///
/// ```no_run
/// use leeca_adguard::{ListenAddr, ServiceLauncher, AdGuardResult};
///
/// #[tokio::main]
/// async fn main() -> AdGuardResult<()> {
///     let addr = ListenAddr::new("0.0.0.0".to_string()).await?;
///     let handle = ServiceLauncher::new().run(&addr).await?;
///     println!("service running with pid {}", handle.pid());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ServiceLauncher {
    install_root: PathBuf,
    binary: PathBuf,
}

impl ServiceLauncher {
    /// Creates a launcher pointing at the standard installation paths.
    pub fn new() -> Self {
        Self {
            install_root: PathBuf::from(DEFAULT_INSTALL_ROOT),
            binary: PathBuf::from(DEFAULT_BINARY),
        }
    }

    /// Overrides the installation root containing `conf` and `work`.
    pub fn with_install_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.install_root = root.into();
        self
    }

    /// Overrides the path of the service executable.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Starts the service bound to `listen_addr` and returns its handle.
    ///
    /// The returned handle is available as soon as the operating system
    /// has created the process. Supervision continues on a detached task:
    /// if the service later exits, the exit is logged and delivered
    /// through [`ServiceHandle::wait`], never through this method's error
    /// channel.
    ///
    /// # Errors
    ///
    /// * `AdGuardError::MissingDirectory` if the `conf` or `work`
    ///   directory does not exist; the process is not spawned.
    /// * `AdGuardError::Launch` if spawning the executable itself fails.
    pub async fn run(&self, listen_addr: &ListenAddr) -> AdGuardResult<ServiceHandle> {
        let conf_dir = self.install_root.join(CONF_DIR_NAME);
        let work_dir = self.install_root.join(WORK_DIR_NAME);

        ensure_dir(&conf_dir).await?;
        ensure_dir(&work_dir).await?;

        let config_file = conf_dir.join(CONFIG_FILE_NAME);

        let mut child = Command::new(&self.binary)
            .arg("-c")
            .arg(&config_file)
            .arg("-w")
            .arg(&work_dir)
            .arg("-h")
            .arg(listen_addr.as_str())
            .spawn()
            .map_err(|e| AdGuardError::Launch { source: e })?;

        let pid = child.id().ok_or_else(|| AdGuardError::Launch {
            source: std::io::Error::other("process exited before a pid could be read"),
        })?;

        info!(pid, listen_addr = %listen_addr.as_str(), "service started");

        let (exit_tx, exit_rx) = oneshot::channel();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => {
                    if status.success() {
                        info!(pid, "service exited cleanly");
                    } else {
                        error!(pid, %status, "service exited with failure");
                    }
                    let _ = exit_tx.send(status);
                }
                Err(e) => {
                    error!(pid, error = %e, "failed to wait on service process");
                }
            }
        });

        Ok(ServiceHandle { pid, exit: exit_rx })
    }
}

impl Default for ServiceLauncher {
    fn default() -> Self {
        Self::new()
    }
}

async fn ensure_dir(path: &Path) -> AdGuardResult<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(AdGuardError::MissingDirectory {
            path: path.to_path_buf(),
        }),
    }
}

/// A handle to a launched service process.
///
/// Dropping the handle detaches from the process; it keeps running and
/// its eventual exit is still logged by the supervision task.
#[derive(Debug)]
pub struct ServiceHandle {
    pid: u32,
    exit: oneshot::Receiver<ExitStatus>,
}

impl ServiceHandle {
    /// Returns the operating-system process id of the service.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Waits for the service process to exit and returns its status.
    ///
    /// Returns `None` if the supervision task could not observe the exit.
    pub async fn wait(self) -> Option<ExitStatus> {
        self.exit.await.ok()
    }
}
