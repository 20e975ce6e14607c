// promptwire: one-shot CLI for sending a prompt to a hosted LLM provider.

use anyhow::Result;
use clap::Parser;
use promptwire::{ClientConfig, Dispatcher};

#[derive(Parser)]
#[command(
    name = "promptwire",
    version,
    about = "Send a prompt to a hosted LLM provider and print the completion"
)]
struct Args {
    /// Prompt to send (ignored when --fetch is given)
    prompt: Option<String>,

    /// Provider to use: openai, gemini, or deepseek
    #[arg(long, env = "PROMPTWIRE_PROVIDER", default_value = "openai")]
    provider: String,

    /// API key for the provider
    #[arg(long, env = "PROMPTWIRE_API_KEY")]
    api_key: Option<String>,

    /// Override the provider's default endpoint
    #[arg(long, env = "PROMPTWIRE_BASE_URL")]
    base_url: Option<String>,

    /// Override the provider's default model
    #[arg(long)]
    model: Option<String>,

    /// Fetch plain text from a URL instead of asking a provider
    #[arg(long, value_name = "URL")]
    fetch: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::new(&args.provider);
    if let Some(api_key) = args.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(model) = args.model {
        config = config.with_model(model);
    }

    let dispatcher = Dispatcher::new(config)?;

    let output = match (args.fetch, args.prompt) {
        (Some(url), _) => dispatcher.fetch_url(&url).await?,
        (None, Some(prompt)) => dispatcher.ask(&prompt).await?,
        (None, None) => anyhow::bail!("a prompt is required unless --fetch is given"),
    };

    println!("{}", output);
    Ok(())
}
