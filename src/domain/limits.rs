//! Limits imposed by the SMS Broadcast gateway.

/// Maximum number of characters that fit in a single SMS.
pub const MAX_CHARS_PER_MESSAGE_SINGLE: usize = 160;

/// Maximum number of characters carried by each part of a multipart SMS.
///
/// Each part reserves 7 characters for the concatenation header, so long
/// messages are chunked at 153 rather than 160.
pub const MAX_CHARS_PER_MESSAGE_MULTI: usize = 153;

/// Maximum number of parts a multipart SMS may be split into.
pub const MAX_SMS_PER_MULTIPART: u32 = 7;

/// Maximum number of characters in the sender id (`from`).
pub const MAX_CHARS_SENDER: usize = 11;

/// Maximum number of characters in the caller reference (`ref`).
pub const MAX_CHARS_REFERENCE: usize = 20;

/// Number of SMS parts the gateway bills for a message of `message_len` characters.
pub fn split_count_for_length(message_len: usize) -> u32 {
    if message_len <= MAX_CHARS_PER_MESSAGE_SINGLE {
        return 1;
    }
    let parts = message_len.div_ceil(MAX_CHARS_PER_MESSAGE_MULTI);
    u32::try_from(parts).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_part_up_to_160_chars() {
        assert_eq!(split_count_for_length(0), 1);
        assert_eq!(split_count_for_length(1), 1);
        assert_eq!(split_count_for_length(160), 1);
    }

    #[test]
    fn multipart_chunks_at_153_chars() {
        assert_eq!(split_count_for_length(161), 2);
        assert_eq!(split_count_for_length(306), 2);
        assert_eq!(split_count_for_length(307), 3);
        assert_eq!(split_count_for_length(153 * 7), 7);
        assert_eq!(split_count_for_length(153 * 7 + 1), 8);
    }
}
