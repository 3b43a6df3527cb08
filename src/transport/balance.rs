use crate::domain::{ACTION_FIELD, BALANCE_ACTION};

use super::lines::parse_response_lines;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("balance response is missing the credit count")]
    MissingBalance,

    #[error("balance is not an integer: {value:?}")]
    InvalidBalance {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub fn encode_balance_form() -> Vec<(String, String)> {
    vec![(ACTION_FIELD.to_owned(), BALANCE_ACTION.to_owned())]
}

/// Decode `OK:<credits>` into the remaining credit count.
pub fn decode_balance_response(raw: &str) -> Result<u64, TransportError> {
    let lines = parse_response_lines(raw);
    let value = lines
        .first()
        .and_then(|fields| fields.get(1))
        .map(|value| value.trim())
        .ok_or(TransportError::MissingBalance)?;

    value
        .parse::<u64>()
        .map_err(|source| TransportError::InvalidBalance {
            value: value.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sets_balance_action() {
        assert_eq!(
            encode_balance_form(),
            vec![("action".to_owned(), "balance".to_owned())]
        );
    }

    #[test]
    fn decode_reads_credit_count() {
        assert_eq!(decode_balance_response("OK:42").unwrap(), 42);
        assert_eq!(decode_balance_response("OK: 1500 \n").unwrap(), 1500);
    }

    #[test]
    fn decode_rejects_missing_or_non_numeric_balance() {
        assert!(matches!(
            decode_balance_response("OK"),
            Err(TransportError::MissingBalance)
        ));
        assert!(matches!(
            decode_balance_response(""),
            Err(TransportError::MissingBalance)
        ));
        assert!(matches!(
            decode_balance_response("OK:lots"),
            Err(TransportError::InvalidBalance { .. })
        ));
    }
}
