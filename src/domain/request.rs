use crate::domain::limits::split_count_for_length;
use crate::domain::validation::{
    DeliveryError, validate_recipients, validate_sender, validate_split_count,
};
use crate::domain::value::{MessageText, Recipient, Reference, SenderId};

/// Form field carrying the number of parts a message may be split into.
pub const MAX_SPLIT_FIELD: &str = "maxsplit";

/// Form field selecting a non-send action.
pub const ACTION_FIELD: &str = "action";

/// `action` value for the balance query.
pub const BALANCE_ACTION: &str = "balance";

/// Effective number of parts for a message.
///
/// A non-zero `max_split` override wins regardless of the message length.
pub fn compute_split_count(max_split: Option<u32>, message_len: usize) -> u32 {
    match max_split {
        Some(parts) if parts > 0 => parts,
        _ => split_count_for_length(message_len),
    }
}

/// Snapshot of everything sent with one `send` call.
#[derive(Debug, Clone)]
pub struct SendSms {
    recipients: Vec<Recipient>,
    from: SenderId,
    message: MessageText,
    reference: Option<Reference>,
    max_split: u32,
}

impl SendSms {
    /// Assemble a send request, computing `maxsplit` from the message length
    /// unless `max_split` overrides it.
    pub fn new(
        recipients: Vec<Recipient>,
        from: SenderId,
        message: MessageText,
        reference: Option<Reference>,
        max_split: Option<u32>,
    ) -> Self {
        let max_split = compute_split_count(max_split, message.char_len());
        Self {
            recipients,
            from,
            message,
            reference,
            max_split,
        }
    }

    /// Run the local checks on `to`, `from` and `maxsplit`.
    ///
    /// `message` and `ref` are left for the gateway to judge.
    pub fn validate(&self) -> Result<(), DeliveryError> {
        validate_recipients(&self.recipients)?;
        validate_sender(&self.from)?;
        validate_split_count(self.max_split)?;
        Ok(())
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn from(&self) -> &SenderId {
        &self.from
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    pub fn max_split(&self) -> u32 {
        self.max_split
    }
}
