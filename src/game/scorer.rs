pub struct Scorer;

impl Scorer {
    /// Points earned for a newly found word of `length` letters.
    ///
    /// Boggle scoring:
    /// - 3 or 4 letters: 1
    /// - 5 letters: 2
    /// - 6 letters: 3
    /// - 7 letters: 5
    /// - 8 or more letters: 11
    /// - shorter words score nothing
    pub fn score_delta(length: usize) -> u32 {
        match length {
            0..=2 => 0,
            3 | 4 => 1,
            5 => 2,
            6 => 3,
            7 => 5,
            _ => 11,
        }
    }

    /// Score a word by its character length
    pub fn score_word(word: &str) -> u32 {
        Self::score_delta(word.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(Scorer::score_delta(3), 1);
        assert_eq!(Scorer::score_delta(4), 1);
        assert_eq!(Scorer::score_delta(5), 2);
        assert_eq!(Scorer::score_delta(6), 3);
        assert_eq!(Scorer::score_delta(7), 5);
        assert_eq!(Scorer::score_delta(8), 11);
        assert_eq!(Scorer::score_delta(10), 11);
    }

    #[test]
    fn test_short_words_score_nothing() {
        assert_eq!(Scorer::score_delta(0), 0);
        assert_eq!(Scorer::score_delta(1), 0);
        assert_eq!(Scorer::score_delta(2), 0);
    }

    #[test]
    fn test_qu_tile_counts_two_letters() {
        // Q-U-I-T spelled with the QU tile is still four letters
        assert_eq!(Scorer::score_word("QUIT"), 1);
        assert_eq!(Scorer::score_word("QUIETS"), 3);
    }
}
