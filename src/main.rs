use anifetch::collector::InfoCommand;
use anifetch::config::{self, Config};
use anifetch::{executor, ui, AppError};
use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "anifetch",
    version,
    about = "Show an image beside neofetch output",
    disable_version_flag = true
)]
struct Cli {
    #[clap(short = 'v', long = "version", action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[clap(
        long,
        short,
        help = "Config file to read instead of ~/.config/anime/config.conf"
    )]
    config: Option<String>,

    #[clap(long, default_value = "warn")]
    log_level: String,

    /// Image to show, overrides image_path from the config file
    image: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // usage errors exit 1, help and version still exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // stdout is reserved for the composited output
    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();

    let config_path = cli
        .config
        .as_deref()
        .map_or_else(config::default_config_path, config::expand_path);
    let config = Config::load(&config_path);
    log::debug!("Loaded {:?} from {}", config, config_path.display());

    let image = cli
        .image
        .or_else(|| config.image_path.clone())
        .ok_or(AppError::MissingImage)?;
    if !image.exists() {
        return Err(AppError::ImageNotFound { path: image }.into());
    }

    let prepared = executor::prepare(&config, image, InfoCommand::default()).await?;
    ui::display_output(&prepared, &config).await?;

    Ok(())
}
