//! Typed Rust client for the SMS Broadcast (Australia) HTTP API.
//!
//! The crate has three layers: a domain layer of strong types and gateway
//! limits, a transport layer for the form encoding and plaintext response
//! format, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use smsbroadcast::{ClientConfig, SmsBroadcastClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsbroadcast::SmsBroadcastError> {
//!     let mut client = SmsBroadcastClient::new(
//!         ClientConfig::new("username", "password").with_sender_name("MyShop"),
//!     )?;
//!     client.add_recipient("0411111111");
//!     client.set_message("hello");
//!     for result in client.send().await? {
//!         println!("{:?} {} {}", result.status, result.receiving_number, result.response);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ClientConfig, SmsBroadcastClient, SmsBroadcastClientBuilder, SmsBroadcastError,
};
pub use domain::{
    DeliveryError, MessageText, PhoneNumber, Recipient, Reference, SenderId, SmsResult, Status,
    ValidationError,
};
