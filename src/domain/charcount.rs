use std::fmt;

/// Tally of `e`/`E` characters against all characters of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCount {
    pub num_e: usize,
    pub total: usize,
}

impl CharCount {
    pub fn tally(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut count, c| {
            count.total += 1;
            if c == 'e' || c == 'E' {
                count.num_e += 1;
            }
            count
        })
    }
}

impl fmt::Display for CharCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number of e/E's: {} out of {}", self.num_e, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_case_text_when_tally_then_counts_both_cases() {
        let count = CharCount::tally("Eerie\nEnd");
        assert_eq!(count, CharCount { num_e: 4, total: 9 });
        assert_eq!(count.to_string(), "Number of e/E's: 4 out of 9");
    }

    #[test]
    fn given_multibyte_text_when_tally_then_counts_characters_not_bytes() {
        let count = CharCount::tally("été");
        assert_eq!(count, CharCount { num_e: 0, total: 3 });
    }
}
