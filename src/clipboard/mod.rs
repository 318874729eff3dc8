//! # Clipboard
//!
//! - [`Clipboard`] - async "write text" capability
//! - [`CommandClipboard`] - pipes text to a platform helper (`pbcopy`,
//!   `wl-copy`, `xclip`, `xsel`, `clip.exe`)
//! - [`MemoryClipboard`] - keeps writes in memory (dry runs, tests)
//! - [`CopyState`] - the "Copied!" acknowledgement with its reset timer

mod copy_state;

pub use copy_state::CopyState;

use async_trait::async_trait;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::config::ClipboardConfig;
use crate::error::ClipboardError;

/// Clipboard write capability
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard helper programs in order of preference
fn helper_candidates() -> Vec<(&'static str, Vec<&'static str>)> {
    if cfg!(target_os = "macos") {
        vec![("pbcopy", vec![])]
    } else if cfg!(target_os = "windows") {
        vec![("clip.exe", vec![])]
    } else {
        let mut candidates = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            candidates.push(("wl-copy", vec![]));
        }
        candidates.push(("xclip", vec!["-selection", "clipboard"]));
        candidates.push(("xsel", vec!["--clipboard", "--input"]));
        candidates
    }
}

/// Writes to the system clipboard through a helper program's stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Use the configured helper, or the first one found on `PATH`
    pub fn from_config(config: &ClipboardConfig) -> Result<Self, ClipboardError> {
        if let Some((program, args)) = config.command.split_first() {
            return Ok(Self::new(program.clone(), args.to_vec()));
        }
        Self::detect()
    }

    pub fn detect() -> Result<Self, ClipboardError> {
        let candidates = helper_candidates();

        for (program, args) in &candidates {
            if which::which(program).is_ok() {
                debug!(program, "Using clipboard helper");
                return Ok(Self::new(
                    *program,
                    args.iter().map(|a| a.to_string()).collect(),
                ));
            }
        }

        Err(ClipboardError::Unavailable {
            tried: candidates
                .iter()
                .map(|(p, _)| *p)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let write_error = |source| ClipboardError::Write {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                drop(stdin);
                // Reap the helper so it does not linger as a zombie.
                if let Err(kill_error) = child.kill().await {
                    debug!(program = %self.program, error = %kill_error, "Helper already gone");
                }
                return Err(write_error(e));
            }
        }

        let status = child.wait().await.map_err(write_error)?;
        if !status.success() {
            return Err(ClipboardError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }

        debug!(program = %self.program, bytes = text.len(), "Wrote clipboard");
        Ok(())
    }
}

/// In-memory clipboard recording every write
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent contents
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().ok()?.last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| w.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
        Ok(())
    }
}
