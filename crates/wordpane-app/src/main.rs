use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wordpane_config::Config;
use wordpane_dictionary::MerriamWebsterClient;

pub mod service;


use self::service::Definitions;

/// Look a word up and print the formatted definition view as JSON
#[derive(Parser)]
#[command(name = "wordpane")]
struct Args {
    /// The word or phrase to define
    word: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = Config::new();

    let client = MerriamWebsterClient::new(
        config.dictionary.api_url.clone(),
        config.dictionary.dictionary.clone(),
        config.dictionary.api_key.clone(),
        config.network.lookup_timeout(),
    )
    .context("failed to build dictionary client")?;

    let definitions = Definitions::new(client, config.dictionary.hide_offensive);

    let view = definitions
        .get_definition(&args.word)
        .await
        .context("dictionary lookup failed")?;

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
