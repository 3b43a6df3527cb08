#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The message was accepted.
    Ok,
    /// The message was invalid (for example an invalid phone number).
    Bad,
    /// The request failed.
    Error,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Bad => "BAD",
            Self::Error => "ERROR",
        }
    }
}

/// Outcome for one recipient of a send request, in gateway line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsResult {
    pub status: Status,
    /// Receiving number, in international format for valid numbers or as
    /// submitted for invalid ones.
    pub receiving_number: String,
    /// Gateway reference number on success, failure reason otherwise.
    pub response: String,
}

impl SmsResult {
    pub fn is_accepted(&self) -> bool {
        self.status == Status::Ok
    }
}
