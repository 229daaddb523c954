//! Fetch-and-save entry point.
//!
//! Loads `.env`, reads the Figma credentials from the environment, fetches
//! the file's local variables, and writes them to `figma-variables.json` in
//! the current working directory. Exits 0 on success, 1 on any error after
//! printing `Erreur:` plus the message.

use figma_variables::{Config, FigmaClient, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // .env is optional; a missing file falls through to the real environment.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        eprintln!("Erreur: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let client = FigmaClient::new(config)?;

    let path = client.fetch_and_save(None).await?;
    println!("✅ Fichier créé: {}", path.display());

    Ok(())
}
