use crate::error::{AppError, Result};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// External program whose stdout becomes the info text.
#[derive(Debug, Clone)]
pub struct InfoCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for InfoCommand {
    fn default() -> Self {
        Self {
            program: "neofetch".to_string(),
            args: vec!["--off".to_string()],
        }
    }
}

/// Captured lines of system information, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoLines(Vec<String>);

impl InfoLines {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for InfoLines {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

/// Runs `cmd` and captures its stdout line by line.
///
/// A fetcher that exits non-zero or dies part way is not an error: whatever
/// it printed is kept. Only failing to start it is. `max_lines` of 0 keeps
/// everything; otherwise the overflow is dropped with a warning.
pub async fn collect(cmd: &InfoCommand, max_lines: usize) -> Result<InfoLines> {
    let mut child = Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| AppError::Spawn {
            program: cmd.program.clone(),
            source,
        })?;

    let mut lines = Vec::new();
    if let Some(stdout) = child.stdout.take() {
        let mut reader = BufReader::new(stdout);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => lines.push(strip_newline(&buf)),
                Err(e) => {
                    log::debug!("Stopped reading {} output: {}", cmd.program, e);
                    break;
                }
            }
        }
    }

    match child.wait().await {
        Ok(status) if !status.success() => {
            log::debug!("{} exited with {}, keeping partial output", cmd.program, status)
        }
        Ok(_) => {}
        Err(e) => log::debug!("Could not wait on {}: {}", cmd.program, e),
    }

    if max_lines > 0 && lines.len() > max_lines {
        log::warn!(
            "{} printed {} lines, dropping the last {} (max_info_lines={})",
            cmd.program,
            lines.len(),
            lines.len() - max_lines,
            max_lines
        );
        lines.truncate(max_lines);
    }

    Ok(InfoLines(lines))
}

fn strip_newline(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
