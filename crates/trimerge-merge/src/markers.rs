//! Scanning text for conflict markers.
//!
//! Used to find unresolved conflicts in rendered or hand-edited text, and to
//! detect inputs that already contain marker-like lines.

use serde::{Deserialize, Serialize};

use trimerge_types::split_lines;

/// A complete conflict block found in text. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictBlock {
    /// Line of the `<<<<<<<` marker.
    pub start: usize,
    /// Line of the `|||||||` marker, if the block is in diff3 style.
    pub base: Option<usize>,
    /// Line of the `=======` marker.
    pub separator: usize,
    /// Line of the `>>>>>>>` marker.
    pub end: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Start,
    Base,
    Separator,
    End,
}

#[derive(Clone, Copy)]
enum State {
    Outside,
    Ours { start: usize },
    Base { start: usize, base: usize },
    Theirs { start: usize, base: Option<usize>, separator: usize },
}

/// Find every complete conflict block.
///
/// Blocks that are never closed, or whose markers appear out of order, are
/// skipped. A start marker inside an open block restarts the block.
pub fn find_conflicts(text: &str, marker_size: usize) -> Vec<ConflictBlock> {
    let mut blocks = Vec::new();
    let mut state = State::Outside;

    for (index, line) in split_lines(text).into_iter().enumerate() {
        let number = index + 1;
        let Some(marker) = classify(line, marker_size) else {
            continue;
        };
        state = match (state, marker) {
            (_, Marker::Start) => State::Ours { start: number },
            (State::Ours { start }, Marker::Base) => State::Base {
                start,
                base: number,
            },
            (State::Ours { start }, Marker::Separator) => State::Theirs {
                start,
                base: None,
                separator: number,
            },
            (State::Base { start, base }, Marker::Separator) => State::Theirs {
                start,
                base: Some(base),
                separator: number,
            },
            (
                State::Theirs {
                    start,
                    base,
                    separator,
                },
                Marker::End,
            ) => {
                blocks.push(ConflictBlock {
                    start,
                    base,
                    separator,
                    end: number,
                });
                State::Outside
            }
            (state, _) => state,
        };
    }
    blocks
}

/// Returns `true` if the text contains at least one complete conflict block.
pub fn has_conflict_markers(text: &str, marker_size: usize) -> bool {
    !find_conflicts(text, marker_size).is_empty()
}

/// Returns `true` if any line would be read as a conflict marker.
pub fn contains_marker_lines(text: &str, marker_size: usize) -> bool {
    split_lines(text)
        .into_iter()
        .any(|line| classify(line, marker_size).is_some())
}

/// Classify a line as a marker of exactly `marker_size` characters.
///
/// Start, base and end markers may carry a label after a space; the separator
/// must stand alone.
fn classify(line: &str, marker_size: usize) -> Option<Marker> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let first = line.chars().next()?;
    let marker = match first {
        '<' => Marker::Start,
        '|' => Marker::Base,
        '=' => Marker::Separator,
        '>' => Marker::End,
        _ => return None,
    };

    let run = line.chars().take_while(|&c| c == first).count();
    if run != marker_size {
        return None;
    }
    let rest = &line[run..];
    match marker {
        Marker::Separator if rest.is_empty() => Some(marker),
        Marker::Separator => None,
        _ if rest.is_empty() || rest.starts_with(' ') => Some(marker),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_exact_size_only() {
        assert_eq!(classify("<<<<<<<\n", 7), Some(Marker::Start));
        assert_eq!(classify("<<<<<<< HEAD\n", 7), Some(Marker::Start));
        assert_eq!(classify("<<<<<<<<\n", 7), None);
        assert_eq!(classify("<<<<<<\n", 7), None);
        assert_eq!(classify("<<<<<<<x\n", 7), None);
        assert_eq!(classify("=======\r\n", 7), Some(Marker::Separator));
        assert_eq!(classify("======= x\n", 7), None);
        assert_eq!(classify(">>>>>>> theirs", 7), Some(Marker::End));
        assert_eq!(classify("||| base\n", 3), Some(Marker::Base));
        assert_eq!(classify("plain\n", 7), None);
        assert_eq!(classify("", 7), None);
    }

    #[test]
    fn finds_merge_style_block() {
        let text = "a\n<<<<<<< ours\nX\n=======\nY\n>>>>>>> theirs\nc\n";
        assert_eq!(
            find_conflicts(text, 7),
            vec![ConflictBlock {
                start: 2,
                base: None,
                separator: 4,
                end: 6
            }]
        );
        assert!(has_conflict_markers(text, 7));
    }

    #[test]
    fn finds_diff3_style_block() {
        let text = "<<<<<<<\nX\n|||||||\nb\n=======\nY\n>>>>>>>\n";
        let blocks = find_conflicts(text, 7);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].base, Some(3));
        assert_eq!(blocks[0].separator, 5);
    }

    #[test]
    fn unterminated_block_ignored() {
        let text = "<<<<<<<\nX\n=======\nY\n";
        assert!(find_conflicts(text, 7).is_empty());
        assert!(!has_conflict_markers(text, 7));
        assert!(contains_marker_lines(text, 7));
    }

    #[test]
    fn restarted_block_uses_latest_start() {
        let text = "<<<<<<<\n<<<<<<<\nX\n=======\nY\n>>>>>>>\n";
        let blocks = find_conflicts(text, 7);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start, 2);
    }

    #[test]
    fn stray_markers_ignored() {
        let text = "=======\n>>>>>>>\nplain\n";
        assert!(find_conflicts(text, 7).is_empty());
    }

    #[test]
    fn marker_size_must_match() {
        let text = "<<<<<<<\nX\n=======\nY\n>>>>>>>\n";
        assert!(find_conflicts(text, 9).is_empty());
        assert!(!contains_marker_lines(text, 9));
    }
}
