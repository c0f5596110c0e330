//! Line classification
//!
//! Every physical line of a LAS file is a section header, a comment, a blank
//! line or content belonging to whichever section is current.

use crate::constants::{COMMENT_MARKER, SECTION_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `~<letter><name>`; the letter is upper-cased, `None` for a bare `~`
    SectionStart { letter: Option<char>, name: &'a str },
    Comment,
    Blank,
    Content,
}

/// Classify a raw line
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim_start();

    let Some(first) = trimmed.chars().next() else {
        return LineKind::Blank;
    };

    if first == SECTION_MARKER {
        let rest = &trimmed[first.len_utf8()..];
        let mut chars = rest.chars();
        return match chars.next() {
            Some(letter) if !letter.is_whitespace() => LineKind::SectionStart {
                letter: letter.to_uppercase().next(),
                name: chars.as_str().trim(),
            },
            _ => LineKind::SectionStart {
                letter: None,
                name: rest.trim(),
            },
        };
    }

    if first == COMMENT_MARKER {
        return LineKind::Comment;
    }

    LineKind::Content
}

/// True for lines that can carry data or header fields
pub fn is_content(line: &str) -> bool {
    matches!(classify(line), LineKind::Content)
}
