//! Lifecycle of the background alarm watcher.
//!
//! `watch` runs the scanner in the foreground until a signal arrives.
//! `watch --daemon` re-launches the binary detached with the hidden
//! `--daemon-run` flag and records the child's PID, which `watch --stop`
//! later uses to terminate it.

use crate::db::tasks::Owner;
use crate::libs::alarm::AlarmScanner;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_warning};
use anyhow::Result;
use std::time::Duration;

pub const PID_FILE: &str = "taskpilot-watch.pid";

/// Runs the scanner until it fails or the process is asked to stop.
pub async fn run_with_signal_handling(scanner: AlarmScanner) -> Result<()> {
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate()).map_err(|_| msg_error_anyhow!(Message::FailedToCreateSigtermHandler))?;
        let mut sigint = signal(SignalKind::interrupt()).map_err(|_| msg_error_anyhow!(Message::FailedToCreateSigintHandler))?;

        tokio::spawn(async move {
            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        msg_warning!(Message::WatcherSignalHandlingNotSupported);
        std::mem::forget(shutdown_tx);
    }

    let scanner_handle = tokio::spawn(scanner.run());

    tokio::select! {
        result = scanner_handle => {
            match result {
                Ok(Ok(())) => msg_info!(Message::ScannerExitedNormally),
                Ok(Err(e)) => msg_error!(Message::ScannerError(e.to_string())),
                Err(e) => msg_error!(Message::ScannerTaskPanicked(e.to_string())),
            }
        }
        _ = shutdown_rx => {
            msg_info!(Message::ScannerShuttingDown);
        }
    }

    remove_pid_file()
}

/// Starts a detached watcher for `owner`, replacing one that is already
/// running.
pub fn spawn(owner: &Owner) -> Result<()> {
    let pid_path = DataStorage::new().get_path(PID_FILE)?;

    if pid_path.exists() {
        if let Ok(pid_str) = std::fs::read_to_string(&pid_path) {
            msg_info!(Message::WatcherStoppingExisting(pid_str.trim().to_string()));
            if let Err(e) = stop_internal() {
                msg_warning!(Message::WatcherFailedToStopExisting(e.to_string()));
                let _ = std::fs::remove_file(&pid_path);
            }
            std::thread::sleep(Duration::from_millis(1000));
        }
    }

    let current_exe = std::env::current_exe().map_err(|_| msg_error_anyhow!(Message::FailedToGetCurrentExecutable))?;
    let mut command = std::process::Command::new(current_exe);
    command.arg("--daemon-run");
    if let Owner::Named(name) = owner {
        command.arg("--user").arg(name);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        unsafe {
            command.pre_exec(|| {
                nix::unistd::setsid()?;
                Ok(())
            });
        }
        let child = command.spawn()?;
        let pid = child.id();
        std::fs::write(pid_path, pid.to_string())?;
        msg_info!(Message::WatcherStarted(pid));
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x08000000;
        let child = command.creation_flags(CREATE_NO_WINDOW).spawn()?;
        let pid = child.id();
        std::fs::write(pid_path, pid.to_string())?;
        msg_info!(Message::WatcherStarted(pid));
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = command;
        msg_bail_anyhow!(Message::DaemonModeNotSupported);
    }

    Ok(())
}

/// Stops the running watcher. A watcher that is not running is not an error.
pub fn stop() -> Result<()> {
    let pid_path = DataStorage::new().get_path(PID_FILE)?;
    if !pid_path.exists() {
        msg_info!(Message::WatcherNotRunning);
        return Ok(());
    }
    stop_internal()
}

fn stop_internal() -> Result<()> {
    let pid_path = DataStorage::new().get_path(PID_FILE)?;
    if !pid_path.exists() {
        msg_bail_anyhow!(Message::WatcherNotRunningPidNotFound);
    }

    let pid_str = std::fs::read_to_string(&pid_path)?;
    let pid: u32 = pid_str.trim().parse().map_err(|_| msg_error_anyhow!(Message::InvalidPidFileContent))?;

    let killed = kill_process(pid)?;
    std::fs::remove_file(pid_path)?;

    if killed {
        msg_info!(Message::WatcherStopped(pid));
    } else {
        // Stale PID file left behind by a watcher that already exited.
        msg_info!(Message::WatcherNotRunning);
    }
    Ok(())
}

/// Removes the PID file, but only when it names this process. A foreground
/// watcher must not forget about a detached one.
fn remove_pid_file() -> Result<()> {
    let pid_path = DataStorage::new().get_path(PID_FILE)?;
    let recorded = std::fs::read_to_string(&pid_path).ok().and_then(|s| s.trim().parse::<u32>().ok());
    if recorded == Some(std::process::id()) {
        let _ = std::fs::remove_file(&pid_path);
    }
    Ok(())
}

#[cfg(windows)]
fn kill_process(pid: u32) -> Result<bool> {
    use winapi::um::errhandlingapi::GetLastError;
    use winapi::um::handleapi::CloseHandle;
    use winapi::um::processthreadsapi::{OpenProcess, TerminateProcess};
    use winapi::um::winnt::PROCESS_TERMINATE;

    unsafe {
        let handle = OpenProcess(PROCESS_TERMINATE, 0, pid);
        if handle.is_null() {
            let error = GetLastError();
            // ERROR_INVALID_PARAMETER: no such process
            if error == 87 {
                return Ok(false);
            }
            msg_bail_anyhow!(Message::FailedToOpenProcess(error));
        }

        let result = TerminateProcess(handle, 0);
        CloseHandle(handle);

        if result == 0 {
            let error = GetLastError();
            msg_bail_anyhow!(Message::FailedToTerminateProcess(error));
        }
        std::thread::sleep(Duration::from_millis(100));
        Ok(true)
    }
}

#[cfg(unix)]
fn kill_process(pid: u32) -> Result<bool> {
    use nix::errno::Errno;
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let pid = Pid::from_raw(pid as i32);
    match kill(pid, None) {
        Err(Errno::ESRCH) => return Ok(false),
        Err(e) => return Err(e.into()),
        Ok(()) => {}
    }

    kill(pid, Signal::SIGTERM)?;
    for _ in 0..10 {
        std::thread::sleep(Duration::from_millis(100));
        if kill(pid, None) == Err(Errno::ESRCH) {
            return Ok(true);
        }
    }

    // Still alive after a second.
    let _ = kill(pid, Signal::SIGKILL);
    std::thread::sleep(Duration::from_millis(100));
    Ok(true)
}

#[cfg(not(any(unix, windows)))]
fn kill_process(_pid: u32) -> Result<bool> {
    msg_bail_anyhow!(Message::ProcessTerminationNotSupported);
}
