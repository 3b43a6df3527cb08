//! Domain layer: strong types, gateway limits and local validation (no I/O).

pub mod limits;
mod request;
mod response;
mod validation;
mod value;

pub use request::{
    ACTION_FIELD, BALANCE_ACTION, MAX_SPLIT_FIELD, SendSms, compute_split_count,
};
pub use response::{SmsResult, Status};
pub use validation::{
    DeliveryError, ValidationError, validate_recipients, validate_sender, validate_split_count,
};
pub use value::{MessageText, Password, PhoneNumber, Recipient, Reference, SenderId, Username};
