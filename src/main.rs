use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::sync::mpsc;

use imago::app::{App, AppEvent};
use imago::config::Config;
use imago::feed::FeedStore;
use imago::theme::ThemeVariant;
use imago::ui;

/// Get the config directory path (~/.config/imago/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("imago");
    Ok(config_dir)
}

/// Open the append-only log file inside `dir`, creating the directory if needed.
///
/// The TUI owns the terminal, so logs never go to stdout or stderr.
fn open_log_file(dir: &Path) -> Result<File> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create '{}'", dir.display()))?;
    let path = dir.join("imago.log");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))
}

#[derive(Parser, Debug)]
#[command(name = "imago", about = "Terminal photo feed with likes, tabs and a post composer")]
struct Args {
    /// Config file to load instead of ~/.config/imago/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color theme (dark or light), overrides the config file
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_dir = get_config_dir()?;

    // Set RUST_LOG to enable; output goes to ~/.config/imago/imago.log
    let log_file = open_log_file(&config_dir)?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let config_path = match args.config {
        Some(path) => path,
        None => config_dir.join("config.toml"),
    };

    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from '{}'", config_path.display()))?;

    if let Some(theme) = args.theme {
        if ThemeVariant::from_str_name(&theme).is_none() {
            anyhow::bail!("Unknown theme '{}': expected 'dark' or 'light'", theme);
        }
        config.theme = theme;
    }

    let mut app = App::new(FeedStore::seeded());
    for warning in app.apply_config(&config) {
        tracing::warn!(path = %config_path.display(), "{}", warning);
        eprintln!("Warning: {}", warning);
    }

    tracing::info!(
        posts = app.store.posts().len(),
        theme = app.theme_variant.name(),
        "Starting imago"
    );

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn log_file_is_created_and_appended() {
        let dir = std::env::temp_dir().join("imago_main_test_log");
        let _ = std::fs::remove_dir_all(&dir);

        let mut first = open_log_file(&dir).unwrap();
        writeln!(first, "one").unwrap();
        drop(first);
        let mut second = open_log_file(&dir).unwrap();
        writeln!(second, "two").unwrap();
        drop(second);

        let content = std::fs::read_to_string(dir.join("imago.log")).unwrap();
        assert_eq!(content, "one\ntwo\n");

        std::fs::remove_dir_all(&dir).ok();
    }
}
