use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/anime/config.conf";

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))").unwrap()
});

static LEADING_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").unwrap());

/// How the image is fitted into its cell region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CropMode {
    /// Keep the aspect ratio, bounded by the configured width.
    #[default]
    Auto,
    /// Square placement.
    Fill,
}

impl FromStr for CropMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "fill" => CropMode::Fill,
            "auto" => CropMode::Auto,
            other => {
                log::warn!("Unknown crop_mode '{}', falling back to auto", other);
                CropMode::Auto
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub image_width: u16,
    pub text_offset: u16,
    pub image_path: Option<PathBuf>,
    pub crop_mode: CropMode,
    /// Upper bound on captured info lines, 0 means unlimited.
    pub max_info_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_width: 40,
            text_offset: 5,
            image_path: None,
            crop_mode: CropMode::Auto,
            max_info_lines: 0,
        }
    }
}

impl Config {
    /// Loads the config file at `path`, falling back to defaults when it can't be read.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                log::warn!(
                    "Could not open config file '{}', using defaults ({})",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "img_width" => config.image_width = parse_u16(value),
                "text_offset" => config.text_offset = parse_u16(value),
                "image_path" => {
                    config.image_path = (!value.is_empty()).then(|| expand_path(value));
                }
                "crop_mode" => {
                    if let Ok(mode) = value.parse() {
                        config.crop_mode = mode;
                    }
                }
                "max_info_lines" => config.max_info_lines = parse_int(value).max(0) as usize,
                other => log::debug!("Ignoring unknown config key '{}'", other),
            }
        }
        config
    }

    /// 1-based terminal column where the info text starts.
    pub fn text_column(&self) -> u16 {
        self.image_width.saturating_add(self.text_offset).max(1)
    }
}

// atoi: leading sign and digits, anything unparseable is 0, overflow saturates
fn parse_int(value: &str) -> i64 {
    let Some(m) = LEADING_INT.find(value) else {
        return 0;
    };
    let digits = m.as_str();
    digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

fn parse_u16(value: &str) -> u16 {
    parse_int(value).clamp(0, u16::MAX as i64) as u16
}

pub fn default_config_path() -> PathBuf {
    expand_path(DEFAULT_CONFIG_PATH)
}

/// Expands a leading `~`, then `$VAR`/`${VAR}` references.
pub fn expand_path(path: &str) -> PathBuf {
    expand_path_with(path, dirs::home_dir().as_deref(), |name| {
        std::env::var(name).ok()
    })
}

pub fn expand_path_with<F>(path: &str, home: Option<&Path>, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    // only a literal leading tilde is expanded, never one produced by a variable
    let (base, rest) = match (path.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            (Some(home), rest.trim_start_matches('/'))
        }
        _ => (None, path),
    };

    let substituted = ENV_VAR.replace_all(rest, |caps: &Captures| {
        let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        lookup(name).unwrap_or_default()
    });

    match base {
        Some(home) if substituted.is_empty() => home.to_path_buf(),
        Some(home) => home.join(substituted.trim_start_matches('/')),
        None => PathBuf::from(&*substituted),
    }
}
