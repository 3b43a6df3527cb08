/// Top-level status the gateway uses to reject a whole request.
const ERROR_STATUS: &str = "ERROR";

/// Split a plaintext gateway response into `:`-separated fields per line.
///
/// Blank lines are dropped and each line is trimmed before splitting. Lines
/// are not limited to three fields; callers decide how to fold extra ones.
pub fn parse_response_lines(raw: &str) -> Vec<Vec<String>> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split(':').map(str::to_owned).collect())
        .collect()
}

/// Reason text if the response starts with an `ERROR:<reason>` line.
pub fn top_level_error(raw: &str) -> Option<String> {
    let first = raw.trim_start().lines().next()?;
    let (status, reason) = first.split_once(':').unwrap_or((first, ""));
    if status.trim() == ERROR_STATUS {
        return Some(reason.trim().to_owned());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_drops_blank_lines() {
        let raw = "OK:61411111111:REF123\r\n\n  BAD:61422222222:Invalid number  \n";
        assert_eq!(
            parse_response_lines(raw),
            vec![
                vec!["OK", "61411111111", "REF123"],
                vec!["BAD", "61422222222", "Invalid number"],
            ]
        );
    }

    #[test]
    fn keeps_every_colon_separated_field() {
        let raw = "BAD:0400:Reason: with colon";
        assert_eq!(
            parse_response_lines(raw),
            vec![vec!["BAD", "0400", "Reason", " with colon"]]
        );
        assert!(parse_response_lines("\n \n").is_empty());
    }

    #[test]
    fn detects_top_level_error() {
        assert_eq!(
            top_level_error("ERROR:Invalid username\n").as_deref(),
            Some("Invalid username")
        );
        assert_eq!(
            top_level_error("ERROR: Missing: to").as_deref(),
            Some("Missing: to")
        );
        assert_eq!(top_level_error("ERROR").as_deref(), Some(""));
        assert_eq!(top_level_error("OK:42"), None);
        assert_eq!(top_level_error("BAD:0400:ERROR"), None);
        assert_eq!(top_level_error(""), None);
    }
}
