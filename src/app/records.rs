//! CSV record parsing for HAPI data bodies
//!
//! HAPI data responses are newline-delimited CSV with `#`-prefixed comment
//! and header lines interleaved with the data rows. There is no header row
//! of column names (names come from the info response) and no quoting or
//! escaping convention, so a plain comma split is the correct treatment.

/// Parse a HAPI CSV data body into records
///
/// Blank lines and lines beginning with `#` are discarded. Each retained
/// line is split on `,` with no further escaping. Cells remain strings;
/// type coercion by parameter type is out of scope for this layer.
///
/// When `max_records` is given, parsing stops as soon as that many records
/// have been retained. This bounds memory and time on large responses
/// rather than slicing after the fact.
pub fn parse_records(text: &str, max_records: Option<usize>) -> Vec<Vec<String>> {
    let mut records = Vec::new();

    for line in text.lines() {
        if let Some(cap) = max_records {
            if records.len() >= cap {
                break;
            }
        }

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        records.push(line.split(',').map(str::to_string).collect());
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blanks_skipped() {
        let body = "# HAPI 3.0\n# format: csv\n\n2020-01-01T00:00:00Z,1.5\n\n2020-01-01T00:01:00Z,1.7\n";
        let records = parse_records(body, None);
        assert_eq!(
            records,
            vec![
                vec!["2020-01-01T00:00:00Z".to_string(), "1.5".to_string()],
                vec!["2020-01-01T00:01:00Z".to_string(), "1.7".to_string()],
            ]
        );
    }

    #[test]
    fn test_record_cap_enforced() {
        let body = "# header\n1,2,3\n\n4,5,6\n";
        let records = parse_records(body, Some(1));
        assert_eq!(records, vec![vec!["1".to_string(), "2".to_string(), "3".to_string()]]);
    }

    #[test]
    fn test_zero_cap_yields_nothing() {
        let records = parse_records("1,2\n3,4\n", Some(0));
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_body() {
        assert!(parse_records("", None).is_empty());
        assert!(parse_records("# only comments\n#\n", None).is_empty());
    }

    #[test]
    fn test_field_count_mismatch_tolerated() {
        // Ragged rows are accepted as-is; strict validation is not this
        // layer's job.
        let records = parse_records("1,2,3\n4,5\n", None);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].len(), 3);
        assert_eq!(records[1].len(), 2);
    }

    #[test]
    fn test_no_cell_level_trimming_or_quoting() {
        // HAPI CSV has no quoting convention; a comma split is exact.
        let records = parse_records("2020-01-01T00:00:00Z, 1.5,\"x\"\n", None);
        assert_eq!(
            records,
            vec![vec![
                "2020-01-01T00:00:00Z".to_string(),
                " 1.5".to_string(),
                "\"x\"".to_string(),
            ]]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse_records("# h\r\n1,2\r\n3,4\r\n", None);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], vec!["1".to_string(), "2".to_string()]);
    }
}
