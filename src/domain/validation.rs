use std::fmt;

use crate::domain::limits::{MAX_CHARS_SENDER, MAX_SMS_PER_MULTIPART};
use crate::domain::value::{Recipient, SenderId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    InvalidPhoneNumber {
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Local check that failed before a send request was issued.
///
/// Each variant carries a stable numeric code (see [`DeliveryError::code`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The recipient list is empty.
    NoRecipients,
    /// The sender id exceeds [`MAX_CHARS_SENDER`] characters.
    SenderTooLong { actual: usize },
    /// The message needs more than [`MAX_SMS_PER_MULTIPART`] parts.
    TooManyParts { actual: u32 },
}

impl DeliveryError {
    /// Numeric code: `1` no recipients, `2` sender too long, `3` too many parts.
    pub fn code(&self) -> u8 {
        match self {
            Self::NoRecipients => 1,
            Self::SenderTooLong { .. } => 2,
            Self::TooManyParts { .. } => 3,
        }
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRecipients => write!(f, "no valid recipients were specified"),
            Self::SenderTooLong { actual } => write!(
                f,
                "sender length must be at most {MAX_CHARS_SENDER} characters, got {actual}"
            ),
            Self::TooManyParts { actual } => write!(
                f,
                "cannot send a multipart message longer than {MAX_SMS_PER_MULTIPART} parts, got {actual}"
            ),
        }
    }
}

impl std::error::Error for DeliveryError {}

pub fn validate_recipients(recipients: &[Recipient]) -> Result<(), DeliveryError> {
    if recipients.is_empty() {
        return Err(DeliveryError::NoRecipients);
    }
    Ok(())
}

pub fn validate_sender(sender: &SenderId) -> Result<(), DeliveryError> {
    let actual = sender.char_len();
    if actual > MAX_CHARS_SENDER {
        return Err(DeliveryError::SenderTooLong { actual });
    }
    Ok(())
}

pub fn validate_split_count(count: u32) -> Result<(), DeliveryError> {
    if count > MAX_SMS_PER_MULTIPART {
        return Err(DeliveryError::TooManyParts { actual: count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "username" };
        assert_eq!(err.to_string(), "username must not be empty");

        let err = ValidationError::TooLong {
            field: "ref",
            max: 20,
            actual: 21,
        };
        assert_eq!(err.to_string(), "ref is too long: 21 characters (max 20)");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }

    #[test]
    fn delivery_error_codes_are_stable() {
        assert_eq!(DeliveryError::NoRecipients.code(), 1);
        assert_eq!(DeliveryError::SenderTooLong { actual: 12 }.code(), 2);
        assert_eq!(DeliveryError::TooManyParts { actual: 8 }.code(), 3);
    }

    #[test]
    fn recipients_must_not_be_empty() {
        assert_eq!(validate_recipients(&[]), Err(DeliveryError::NoRecipients));
        assert!(validate_recipients(&[Recipient::new("61411111111")]).is_ok());
    }

    #[test]
    fn sender_is_limited_to_11_chars() {
        assert!(validate_sender(&SenderId::new("A".repeat(11))).is_ok());
        let err = validate_sender(&SenderId::new("A".repeat(12))).unwrap_err();
        assert_eq!(err, DeliveryError::SenderTooLong { actual: 12 });
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn split_count_is_limited_to_7_parts() {
        assert!(validate_split_count(7).is_ok());
        let err = validate_split_count(8).unwrap_err();
        assert_eq!(err.code(), 3);
        assert_eq!(
            err.to_string(),
            "cannot send a multipart message longer than 7 parts, got 8"
        );
    }
}
