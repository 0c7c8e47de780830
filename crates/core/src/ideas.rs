//! Post-processing for generated idea batches.

/// Field separator the model is asked to use between idea columns.
pub const IDEA_DELIMITER: char = '|';

/// Extract idea lines from raw model output.
///
/// Keeps every line that is non-blank and contains [`IDEA_DELIMITER`].
/// Kept lines are returned verbatim: no trimming and no check on the number
/// of columns.
pub fn parse_idea_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty() && line.contains(IDEA_DELIMITER))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_trailing_lines() {
        assert_eq!(parse_idea_lines("A|B|C|D|E\n\n"), vec!["A|B|C|D|E"]);
    }

    #[test]
    fn drops_lines_without_delimiter() {
        let raw = "Here are your ideas:\nOne | two | three | 10 min | Easy\nThanks!";
        assert_eq!(parse_idea_lines(raw), vec!["One | two | three | 10 min | Easy"]);
    }

    #[test]
    fn passes_extra_delimiters_through_unsplit() {
        let raw = "a|b|c|d|e|f|g";
        assert_eq!(parse_idea_lines(raw), vec!["a|b|c|d|e|f|g"]);
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        assert_eq!(parse_idea_lines("  x | y  "), vec!["  x | y  "]);
    }

    #[test]
    fn never_exceeds_raw_line_count() {
        let raw = "a|b\n|\n\n  \nc|d\nplain";
        let ideas = parse_idea_lines(raw);
        assert_eq!(ideas, vec!["a|b", "|", "c|d"]);
        assert!(ideas.len() <= raw.split('\n').count());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_idea_lines("").is_empty());
    }
}
