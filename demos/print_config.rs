use anyhow::{Context, Result};
use numpin::{informer::Config, ComponentConfig};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut cfg = Config::default();

    if let Some(path) = std::env::args().nth(1) {
        let raw = std::fs::read(&path).with_context(|| format!("reading {}", path))?;
        cfg.load_serialized(&raw)
            .with_context(|| format!("loading {}", path))?;
        info!("Loaded {} section from {}", cfg.identifier(), path);
    }

    cfg.apply_process_env_vars()
        .context("applying environment overrides")?;

    println!("{}", cfg.display_string()?);
    Ok(())
}
