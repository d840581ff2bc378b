use anyhow::Result;
use asset_worth::{BitoPro, Credentials};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, env = "BITOPRO_EMAIL")]
    email: String,
    #[arg(long, env = "BITOPRO_API_KEY")]
    api_key: String,
    #[arg(long, env = "BITOPRO_API_SECRET")]
    api_secret: String,

    /// Print the result as JSON instead of the one-line summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_worth=info,reqwest=info".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let credentials = Credentials::new(&args.email, &args.api_key, &args.api_secret);
    let bitopro = BitoPro::new();

    info!("Fetching account worth for {}", credentials.email);

    let worth = bitopro.asset_worth(&credentials).await?;

    if args.json {
        println!("{}", serde_json::ser::to_string_pretty(&worth)?);
    } else {
        println!("{}", worth);
    }

    Ok(())
}
