//! Opening tool URLs outside the dashboard
//!
//! Every open hands the URL to a separate process with no stdio shared
//! with the dashboard. The browser gets nothing back from the dashboard.

use log::{debug, warn};
use std::process::{Child, Command, Stdio};

use crate::config::BrowserConfig;
use crate::error::{DashboardError, Result};

/// Something that can open a URL in a new browsing context.
pub trait UrlOpener: Send {
    fn open(&self, url: &str) -> Result<()>;

    /// Short name for log lines.
    fn name(&self) -> &str;
}

/// Uses the platform's default handler (xdg-open, open, start).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that_detached(url).map_err(|e| DashboardError::Browser(format!("{}: {}", url, e)))
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Runs a configured program with the URL as its last argument.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl CommandOpener {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The command that would be spawned for `url`.
    pub fn command_line(&self, url: &str) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .chain(std::iter::once(url.to_string()))
            .collect()
    }
}

impl UrlOpener for CommandOpener {
    fn open(&self, url: &str) -> Result<()> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| DashboardError::Browser(format!("failed to run {}: {}", self.program, e)))?;

        // The child must be waited on or it lingers as a zombie until we exit
        let program = self.program.clone();
        std::thread::Builder::new()
            .name(format!("reap-{}", child.id()))
            .spawn(move || reap(&program, child))?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}

fn reap(program: &str, mut child: Child) {
    match child.wait() {
        Ok(status) => debug!("{} (pid {}) exited with {}", program, child.id(), status),
        Err(e) => warn!("Failed to wait for {} (pid {}): {}", program, child.id(), e),
    }
}

/// Pick the opener described by the config.
pub fn opener_from_config(config: &BrowserConfig) -> Box<dyn UrlOpener> {
    match config.command.as_deref().map(str::trim) {
        Some(program) if !program.is_empty() => Box::new(CommandOpener::new(program, config.args.clone())),
        _ => Box::new(SystemOpener),
    }
}
