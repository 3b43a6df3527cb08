use std::collections::HashSet;

use crate::domain::{
    MAX_SPLIT_FIELD, MessageText, Recipient, Reference, SendSms, SenderId, SmsResult, Status,
};

use super::lines::parse_response_lines;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("response line has fewer than 3 fields: {line:?}")]
    MalformedLine { line: String },

    #[error("response line has unknown status: {status:?}")]
    UnknownStatus { status: String },
}

fn parse_status(value: &str) -> Result<Status, TransportError> {
    match value {
        "OK" => Ok(Status::Ok),
        "BAD" => Ok(Status::Bad),
        "ERROR" => Ok(Status::Error),
        other => Err(TransportError::UnknownStatus {
            status: other.to_owned(),
        }),
    }
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let mut seen = HashSet::<&str>::new();
    let to = request
        .recipients()
        .iter()
        .map(Recipient::raw)
        .filter(|raw| seen.insert(*raw))
        .collect::<Vec<_>>()
        .join(",");

    vec![
        (Recipient::FIELD.to_owned(), to),
        (SenderId::FIELD.to_owned(), request.from().as_str().to_owned()),
        (
            MessageText::FIELD.to_owned(),
            request.message().as_str().to_owned(),
        ),
        (
            Reference::FIELD.to_owned(),
            request
                .reference()
                .map(Reference::as_str)
                .unwrap_or_default()
                .to_owned(),
        ),
        (MAX_SPLIT_FIELD.to_owned(), request.max_split().to_string()),
    ]
}

/// Decode one `STATUS:number:detail` line per recipient.
///
/// Fields past the third are joined back with `:` so failure reasons that
/// contain a colon survive intact.
pub fn decode_send_sms_response(raw: &str) -> Result<Vec<SmsResult>, TransportError> {
    parse_response_lines(raw)
        .into_iter()
        .map(|fields| {
            if fields.len() < 3 {
                return Err(TransportError::MalformedLine {
                    line: fields.join(":"),
                });
            }
            Ok(SmsResult {
                status: parse_status(fields[0].trim())?,
                receiving_number: fields[1].trim().to_owned(),
                response: fields[2..].join(":").trim().to_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::domain::{MessageText, Recipient, Reference, SendSms, SenderId};

    use super::*;

    fn request(recipients: &[&str]) -> SendSms {
        SendSms::new(
            recipients.iter().map(|r| Recipient::new(*r)).collect(),
            SenderId::new("MyShop"),
            MessageText::new("hello"),
            Some(Reference::new("order-42").unwrap()),
            None,
        )
    }

    #[test]
    fn encode_form_params_in_wire_order() {
        let params = encode_send_sms_form(&request(&["61411111111", "61422222222"]));

        assert_eq!(
            params,
            vec![
                ("to".to_owned(), "61411111111,61422222222".to_owned()),
                ("from".to_owned(), "MyShop".to_owned()),
                ("message".to_owned(), "hello".to_owned()),
                ("ref".to_owned(), "order-42".to_owned()),
                ("maxsplit".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_deduplicates_recipients_keeping_first_seen_order() {
        let params = encode_send_sms_form(&request(&["614111", "614222", "614111"]));
        assert_eq!(params[0], ("to".to_owned(), "614111,614222".to_owned()));
    }

    #[test]
    fn encode_sends_empty_sender_and_reference() {
        let req = SendSms::new(
            vec![Recipient::new("0411111111")],
            SenderId::default(),
            MessageText::new("x".repeat(200)),
            None,
            None,
        );
        let params = encode_send_sms_form(&req);
        assert!(params.contains(&("from".to_owned(), String::new())));
        assert!(params.contains(&("ref".to_owned(), String::new())));
        assert!(params.contains(&("maxsplit".to_owned(), "2".to_owned())));
    }

    #[test]
    fn decode_maps_lines_in_order() {
        let raw = "OK:61411111111:REF123\nBAD:61422222222:Invalid number\n";
        let results = decode_send_sms_response(raw).unwrap();
        assert_eq!(
            results,
            vec![
                SmsResult {
                    status: Status::Ok,
                    receiving_number: "61411111111".to_owned(),
                    response: "REF123".to_owned(),
                },
                SmsResult {
                    status: Status::Bad,
                    receiving_number: "61422222222".to_owned(),
                    response: "Invalid number".to_owned(),
                },
            ]
        );
        assert!(results[0].is_accepted());
        assert!(!results[1].is_accepted());
    }

    #[test]
    fn decode_rejoins_detail_containing_colons() {
        let results = decode_send_sms_response("BAD:0400:Blocked: opted out").unwrap();
        assert_eq!(results[0].response, "Blocked: opted out");
    }

    #[test]
    fn decode_rejects_short_lines_and_unknown_status() {
        assert!(matches!(
            decode_send_sms_response("OK:61411111111"),
            Err(TransportError::MalformedLine { .. })
        ));
        assert!(matches!(
            decode_send_sms_response("MAYBE:61411111111:x"),
            Err(TransportError::UnknownStatus { .. })
        ));
    }
}
