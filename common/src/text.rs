//! Codecs between the delimited text fields used by the admin forms and
//! the ordered string lists persisted in the datastore.
//!
//! Skills are edited as comma-separated text, feature lists as one line
//! per feature. Both directions trim whitespace and drop empty entries,
//! so the round-trip is exact as long as no element contains the
//! delimiter itself.

/// Splits comma-delimited form text into a skills list.
pub fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins a skills list back into the comma-delimited form encoding.
pub fn join_comma_list(items: &[String]) -> String {
    items.join(", ")
}

/// Splits newline-delimited form text into a feature list.
pub fn split_line_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins a feature list back into the newline-delimited form encoding.
pub fn join_line_list(items: &[String]) -> String {
    items.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn comma_list_round_trips_without_delimiter_in_elements() {
        let skills = owned(&["Rust", "WebAssembly", "PostgreSQL"]);
        let encoded = join_comma_list(&skills);
        assert_eq!(split_comma_list(&encoded), skills);
    }

    #[test]
    fn line_list_round_trips_and_preserves_order() {
        let features = owned(&["Realtime dashboard", "CSV export", "SSO login"]);
        let encoded = join_line_list(&features);
        assert_eq!(split_line_list(&encoded), features);
    }

    #[test]
    fn split_drops_blank_entries_and_trims() {
        assert_eq!(
            split_comma_list(" a, , b ,c,"),
            owned(&["a", "b", "c"])
        );
        assert_eq!(
            split_line_list("one\n\n  two  \n"),
            owned(&["one", "two"])
        );
    }

    #[test]
    fn element_containing_delimiter_is_lossy_by_design() {
        // "1,000 users" comes back as two elements; the form contract
        // documents this rather than escaping.
        let features = owned(&["1,000 users"]);
        let encoded = join_comma_list(&features);
        assert_eq!(split_comma_list(&encoded), owned(&["1", "000 users"]));
    }

    #[test]
    fn empty_text_decodes_to_empty_list() {
        assert!(split_comma_list("").is_empty());
        assert!(split_line_list("").is_empty());
    }
}
