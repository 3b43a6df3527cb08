use smsbroadcast::{ClientConfig, SmsBroadcastClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = SmsBroadcastClient::new(ClientConfig::from_env())?;
    let credits = client.check_balance().await?;
    println!("credits left: {credits}");

    Ok(())
}
