use clap::Parser;
use serde_json::json;
use centrifuge_api_rs::error::Result;
use centrifuge_api_rs::{Client, Config};
use tracing_subscriber::EnvFilter;

/// Simple program to test the Centrifuge API: publish a message and mint a token.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server host (e.g., localhost)
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Server port
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// API key sent in the Authorization header
    #[arg(short, long)]
    api_key: String,

    /// Secret used to sign connection tokens
    #[arg(short, long)]
    secret: String,

    /// Channel to publish into
    #[arg(short, long, default_value = "public:chat")]
    channel: String,

    /// Message text to publish
    #[arg(short, long, default_value = "hello")]
    message: String,

    /// User id to generate a connection token for
    #[arg(short, long, default_value = "42")]
    user: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let client = Client::new(Config {
        host: args.host,
        port: args.port,
        api_key: args.api_key,
        secret: args.secret,
        ..Default::default()
    });

    // Tokens are signed over a caller-supplied timestamp.
    let timestamp = chrono::Utc::now().timestamp();
    let token = client.token_for(&args.user, timestamp, "");
    println!("Token for user {} at {}: {}", args.user, timestamp, token);

    let resp = client
        .publish(&args.channel, &json!({ "text": args.message }))
        .await?;
    println!("Publish returned status {}", resp.status());
    println!("Body: {}", resp.text().await?);

    let resp = client.presence(&args.channel).await?;
    println!("Presence returned status {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
