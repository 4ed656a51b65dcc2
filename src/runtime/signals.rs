use std::io;
use std::process::ExitStatus;
use tokio::process::Child;
use tracing::debug;

/// Terminal signals the wrapper sits out while the converter is in the foreground.
///
/// Ctrl-C and Ctrl-\ reach the whole process group; the converter decides what
/// they mean and the wrapper keeps waiting for its status. Handlers are not
/// inherited across exec, so the child still gets the default disposition.
#[cfg(unix)]
pub struct ForegroundSignals {
    interrupt: tokio::signal::unix::Signal,
    quit: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl ForegroundSignals {
    /// Must run before the child is spawned
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            quit: signal(SignalKind::quit())?,
        })
    }

    /// Wait for the child, swallowing SIGINT and SIGQUIT meanwhile
    pub async fn wait(&mut self, child: &mut Child) -> io::Result<ExitStatus> {
        loop {
            tokio::select! {
                status = child.wait() => return status,
                Some(()) = self.interrupt.recv() => debug!("SIGINT received, waiting for converter"),
                Some(()) = self.quit.recv() => debug!("SIGQUIT received, waiting for converter"),
            }
        }
    }
}

#[cfg(not(unix))]
pub struct ForegroundSignals;

#[cfg(not(unix))]
impl ForegroundSignals {
    pub fn install() -> io::Result<Self> {
        Ok(Self)
    }

    pub async fn wait(&mut self, child: &mut Child) -> io::Result<ExitStatus> {
        debug!("waiting for converter");
        child.wait().await
    }
}
