//! Transport layer: wire-format details (form encoding, plaintext response parsing).

mod balance;
mod form;
mod lines;
mod send_sms;

pub use balance::{decode_balance_response, encode_balance_form};
pub use form::encode_form_body;
pub use lines::top_level_error;
pub use send_sms::{decode_send_sms_response, encode_send_sms_form};
