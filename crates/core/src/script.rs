//! Script request shaping and reading-time estimation.

/// Average speaking rate used for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 150;

/// Fold optional extra requirements into the tone descriptor sent to the model.
pub fn compose_tone(tone: &str, additional_requirements: Option<&str>) -> String {
    match additional_requirements {
        Some(extra) => format!("{tone} Additional requirements: {extra}"),
        None => tone.to_string(),
    }
}

/// Count words by splitting on single spaces.
///
/// Consecutive spaces produce empty segments that are counted, and an empty
/// script counts as one word. The dashboard relies on this exact measure.
pub fn word_count(script: &str) -> usize {
    script.split(' ').count()
}

/// Estimated reading time in whole minutes, rounded up.
pub fn estimated_read_time(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_without_requirements_is_unchanged() {
        assert_eq!(compose_tone("energetic-enthusiastic", None), "energetic-enthusiastic");
    }

    #[test]
    fn tone_with_requirements_appends_suffix() {
        assert_eq!(
            compose_tone("casual", Some("mention the sponsor")),
            "casual Additional requirements: mention the sponsor"
        );
    }

    #[test]
    fn word_count_splits_on_single_space() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("one  two"), 3);
        assert_eq!(word_count("line\nbreak"), 1);
        assert_eq!(word_count(""), 1);
    }

    #[test]
    fn read_time_rounds_up() {
        assert_eq!(estimated_read_time(0), 0);
        assert_eq!(estimated_read_time(1), 1);
        assert_eq!(estimated_read_time(150), 1);
        assert_eq!(estimated_read_time(151), 2);
        assert_eq!(estimated_read_time(1200), 8);
    }
}
