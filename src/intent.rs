//! Line-oriented intents read from stdin.

/// One operator intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Start a draw.
    Draw,
    /// Regenerate the pool at the current count.
    Reset,
    /// Change the seat count from raw input.
    Count(String),
    /// Print the current board.
    Show,
    /// Stop the board and exit.
    Quit,
}

impl Intent {
    /// Parse one input line. Blank lines and unknown words give `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let intent = match words.next()?.to_ascii_lowercase().as_str() {
            "draw" | "d" => Self::Draw,
            "reset" | "r" => Self::Reset,
            "count" | "c" => Self::Count(words.next().unwrap_or_default().to_string()),
            "show" | "s" => Self::Show,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return None,
        };
        Some(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_words() {
        assert_eq!(Intent::parse("draw"), Some(Intent::Draw));
        assert_eq!(Intent::parse("  RESET "), Some(Intent::Reset));
        assert_eq!(Intent::parse("show"), Some(Intent::Show));
        assert_eq!(Intent::parse("q"), Some(Intent::Quit));
    }

    #[test]
    fn test_parse_count_keeps_raw_argument() {
        assert_eq!(Intent::parse("count 12"), Some(Intent::Count("12".into())));
        assert_eq!(Intent::parse("count abc"), Some(Intent::Count("abc".into())));
        assert_eq!(Intent::parse("count"), Some(Intent::Count(String::new())));
    }

    #[test]
    fn test_parse_rejects_noise() {
        assert_eq!(Intent::parse(""), None);
        assert_eq!(Intent::parse("   "), None);
        assert_eq!(Intent::parse("shuffle"), None);
    }
}
