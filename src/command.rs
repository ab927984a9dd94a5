use crate::config::CropMode;
use std::fmt;
use std::path::Path;

pub const RENDER_PROGRAM: &str = "kitten";

/// A fully built invocation of the terminal image renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl RenderCommand {
    pub fn to_command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for RenderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        let last = self.args.len().saturating_sub(1);
        for (i, arg) in self.args.iter().enumerate() {
            if i == last {
                write!(f, " {}", shell_quote(arg))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Builds the `kitten icat` call placing the image at the top left.
///
/// Fill asks for a `width`x`width` box. Auto gives the box the full
/// terminal height (`term_rows`, or `width` when unknown) so only the
/// width limits the aspect-preserving scale.
pub fn build(width: u16, crop: CropMode, term_rows: Option<u16>, image: &Path) -> RenderCommand {
    let height = match crop {
        CropMode::Fill => width,
        CropMode::Auto => term_rows.filter(|&r| r > 0).unwrap_or(width),
    };

    let mut args: Vec<String> = ["icat", "--align", "left", "--place"]
        .into_iter()
        .map(String::from)
        .collect();
    args.push(format!("{}x{}@0x0", width, height));
    args.push("--scale-up".to_string());
    if crop == CropMode::Auto {
        args.push("--background".to_string());
        args.push("none".to_string());
    }
    args.push(image.to_string_lossy().into_owned());

    RenderCommand {
        program: RENDER_PROGRAM.to_string(),
        args,
    }
}
