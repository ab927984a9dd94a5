use crate::collector::{self, InfoCommand, InfoLines};
use crate::command::{self, RenderCommand};
use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;

/// Results of the two concurrent jobs, ready for the renderer.
#[derive(Debug)]
pub struct Prepared {
    pub info: InfoLines,
    pub command: RenderCommand,
}

/// Fetches system info and builds the image command at the same time.
///
/// Each task owns its inputs and hands back its own result; nothing is
/// written to the terminal here. Fails if either task does.
pub async fn prepare(config: &Config, image: PathBuf, fetcher: InfoCommand) -> Result<Prepared> {
    let max_lines = config.max_info_lines;
    let info_task = tokio::spawn(async move { collector::collect(&fetcher, max_lines).await });

    let (width, crop) = (config.image_width, config.crop_mode);
    let command_task = tokio::task::spawn_blocking(move || {
        let rows = crossterm::terminal::size().ok().map(|(_, rows)| rows);
        command::build(width, crop, rows, &image)
    });

    let (info, command) = tokio::try_join!(info_task, command_task)?;
    let info = info?;
    log::debug!("Collected {} info lines, render command: {}", info.len(), command);

    Ok(Prepared { info, command })
}
