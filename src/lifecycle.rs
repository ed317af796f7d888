// Process lifecycle: the Running -> Terminating state machine behind POST /shutdown,
// and the delayed browser launch at startup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

/// Time between a shutdown request and the server starting to stop, so the
/// response to the request gets flushed first.
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// How long open connections get to drain before the process exits anyway.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Delay before opening the browser, so the listener is up by then.
pub const BROWSER_LAUNCH_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Running,
    Terminating,
}

pub struct Lifecycle {
    terminating: AtomicBool,
    grace_period: Duration,
    exit_tx: watch::Sender<bool>,
}

impl Lifecycle {
    pub fn new(grace_period: Duration) -> Self {
        let (exit_tx, _) = watch::channel(false);
        Self {
            terminating: AtomicBool::new(false),
            grace_period,
            exit_tx,
        }
    }

    pub fn state(&self) -> LifecycleState {
        if self.terminating.load(Ordering::Acquire) {
            LifecycleState::Terminating
        } else {
            LifecycleState::Running
        }
    }

    /// Moves to `Terminating` and schedules the exit signal after the grace period.
    /// Returns `false` if termination was already requested; the transition is one-way.
    /// Must be called from within a Tokio runtime.
    pub fn request_shutdown(&self) -> bool {
        if self
            .terminating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }

        info!(
            "Shutdown requested, stopping in {} ms",
            self.grace_period.as_millis()
        );

        let exit_tx = self.exit_tx.clone();
        let grace_period = self.grace_period;
        tokio::spawn(async move {
            tokio::time::sleep(grace_period).await;
            exit_tx.send_replace(true);
        });

        true
    }

    /// Resolves once a requested shutdown's grace period has elapsed.
    pub async fn exit_requested(&self) {
        let mut exit_rx = self.exit_tx.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = exit_rx.wait_for(|exit| *exit).await;
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new(SHUTDOWN_GRACE_PERIOD)
    }
}

/// Starts a timer that hard-exits the process if draining takes longer than `timeout`.
pub fn spawn_drain_deadline(timeout: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!(
            "Connections still open after {} ms, exiting",
            timeout.as_millis()
        );
        std::process::exit(0);
    });
}

/// URL a local browser should use to reach the server.
pub fn browser_url(host: &str, port: u16) -> String {
    match host {
        "*" | "0.0.0.0" | "::" | "[::]" => format!("http://localhost:{}/", port),
        host if host.contains(':') && !host.starts_with('[') => {
            format!("http://[{}]:{}/", host, port)
        }
        host => format!("http://{}:{}/", host, port),
    }
}

/// Opens `url` in the default browser after `delay`, without blocking the caller.
pub fn spawn_browser_launch(url: String, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        info!("Opening browser at {}", url);

        let result = tokio::task::spawn_blocking(move || open_in_browser(&url)).await;
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Failed to open browser: {}", e),
            Err(e) => warn!("Browser launch task failed: {}", e),
        }
    });
}

fn open_in_browser(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = std::process::Command::new("open");

    #[cfg(target_os = "windows")]
    let mut command = std::process::Command::new("explorer");

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = std::process::Command::new("xdg-open");

    command.arg(url).spawn().map(|_| ())
}
