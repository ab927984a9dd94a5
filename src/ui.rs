use crate::collector::InfoLines;
use crate::command::RenderCommand;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::executor::Prepared;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Write};

/// Draws the image and the info text beside it. Only called once both
/// concurrent jobs have finished, so nothing else writes to the terminal.
pub async fn display_output(prepared: &Prepared, config: &Config) -> Result<()> {
    let mut stdout = io::stdout();
    clear_screen(&mut stdout)?;

    run_image_command(&prepared.command).await?;

    let column = config.text_column();
    let mut max_rows = MAX_ROW;
    if let Ok((cols, rows)) = terminal::size() {
        if column > cols {
            log::warn!(
                "Text column {} is past the terminal width {}, lower img_width or text_offset",
                column,
                cols
            );
        }
        if rows > 0 {
            max_rows = rows;
        }
    }

    write_info(&mut stdout, &prepared.info, column, max_rows)?;
    Ok(())
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

async fn run_image_command(command: &RenderCommand) -> Result<()> {
    log::debug!("Running {}", command);
    let status = command
        .to_command()
        .status()
        .await
        .map_err(|source| AppError::Spawn {
            program: command.program.clone(),
            source,
        })?;
    if !status.success() {
        log::warn!("{} exited with {}", command.program, status);
    }
    Ok(())
}

/// Highest row index a cursor move can address.
pub const MAX_ROW: u16 = u16::MAX - 1;

/// Prints line `i` at row `i + 1`, starting at the 1-based `column`, then
/// leaves the cursor at the start of the row below the text.
///
/// At most `max_rows` lines are placed (never more than `MAX_ROW`); the
/// rest are dropped with a warning.
pub fn write_info<W: Write>(
    out: &mut W,
    info: &InfoLines,
    column: u16,
    max_rows: u16,
) -> io::Result<()> {
    let limit = usize::from(max_rows.min(MAX_ROW));
    if info.len() > limit {
        log::warn!(
            "Only {} rows available, dropping the last {} info lines",
            limit,
            info.len() - limit
        );
    }

    let col = column.saturating_sub(1);
    let mut rows: u16 = 0;
    for line in info.iter().take(limit) {
        queue!(out, MoveTo(col, rows), Print(line))?;
        rows += 1;
    }
    queue!(out, MoveTo(0, rows))?;
    out.flush()
}
