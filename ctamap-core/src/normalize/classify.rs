/// The eight CTA color lines, in the order they are tested
pub const RAIL_LINES: [&str; 8] = [
    "Brown", "Orange", "Purple", "Pink", "Yellow", "Green", "Red", "Blue",
];

/// Returns every known line whose name occurs anywhere in `lines`,
/// ignoring case.
///
/// Matching is by substring, so a label that merely contains a line name
/// (for example `"Redline Yard"`) is attributed to that line.
pub fn classify_lines(lines: &str) -> Vec<&'static str> {
    let haystack = lines.to_lowercase();
    RAIL_LINES
        .into_iter()
        .filter(|name| haystack.contains(&name.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_label() {
        assert_eq!(classify_lines("Brown"), vec!["Brown"]);
    }

    #[test]
    fn shared_track_matches_in_vocabulary_order() {
        assert_eq!(classify_lines("Red, Purple"), vec!["Purple", "Red"]);
        assert_eq!(
            classify_lines("Green, Orange, Pink, Purple, Brown"),
            vec!["Brown", "Orange", "Purple", "Pink", "Green"]
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify_lines("BLUE line (O'Hare branch)"), vec!["Blue"]);
        assert_eq!(classify_lines("yellow"), vec!["Yellow"]);
    }

    #[test]
    fn unknown_labels_match_nothing() {
        assert!(classify_lines("Shuttle").is_empty());
        assert!(classify_lines("").is_empty());
    }

    #[test]
    fn substrings_are_attributed() {
        assert_eq!(classify_lines("Bluestem spur"), vec!["Blue"]);
        assert_eq!(classify_lines("Credit union yard"), vec!["Red"]);
    }
}
