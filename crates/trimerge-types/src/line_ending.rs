use serde::{Deserialize, Serialize};

/// Line terminator convention of a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Unix style `\n`.
    #[default]
    Lf,
    /// Windows style `\r\n`.
    CrLf,
}

impl LineEnding {
    /// The terminator bytes as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// The terminator of a single line, or `None` if the line is unterminated.
    pub fn of_line(line: &str) -> Option<Self> {
        if line.ends_with("\r\n") {
            Some(Self::CrLf)
        } else if line.ends_with('\n') {
            Some(Self::Lf)
        } else {
            None
        }
    }

    /// The dominant terminator across a set of lines.
    ///
    /// CRLF wins only when strictly more lines use it than bare LF; ties and
    /// unterminated input fall back to LF.
    pub fn dominant<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (mut lf, mut crlf) = (0usize, 0usize);
        for line in lines {
            match Self::of_line(line) {
                Some(Self::Lf) => lf += 1,
                Some(Self::CrLf) => crlf += 1,
                None => {}
            }
        }
        if crlf > lf {
            Self::CrLf
        } else {
            Self::Lf
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_line_detects_terminators() {
        assert_eq!(LineEnding::of_line("a\n"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::of_line("a\r\n"), Some(LineEnding::CrLf));
        assert_eq!(LineEnding::of_line("a"), None);
        assert_eq!(LineEnding::of_line("a\r"), None);
    }

    #[test]
    fn dominant_prefers_majority() {
        assert_eq!(LineEnding::dominant(["a\r\n", "b\r\n", "c\n"]), LineEnding::CrLf);
        assert_eq!(LineEnding::dominant(["a\r\n", "b\n"]), LineEnding::Lf);
        assert_eq!(LineEnding::dominant(["a\n", "b\n", "c\r\n"]), LineEnding::Lf);
    }

    #[test]
    fn dominant_of_nothing_is_lf() {
        assert_eq!(LineEnding::dominant(std::iter::empty()), LineEnding::Lf);
        assert_eq!(LineEnding::dominant(["no terminator"]), LineEnding::Lf);
    }
}
