use std::io;

use smsbroadcast::{ClientConfig, SmsBroadcastClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone = std::env::var("SMSBROADCAST_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSBROADCAST_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SMSBROADCAST_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsbroadcast demo.".to_owned());

    let mut client = SmsBroadcastClient::new(ClientConfig::from_env())?;
    client.add_recipients(phone.split(','));
    client.set_message(message);
    println!("sending as {} part(s)", client.split_count());

    for result in client.send().await? {
        println!(
            "status: {}, number: {}, response: {}",
            result.status.as_str(),
            result.receiving_number,
            result.response
        );
    }

    Ok(())
}
