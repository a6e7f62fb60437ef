//! Paragraph-boundary text chunker.
//!
//! Splits document body text into pieces that respect a configurable
//! character limit. Splitting occurs on paragraph boundaries (`\n\n`) to
//! preserve semantic coherence within each piece; a single paragraph that
//! exceeds the limit is hard-split at word boundaries.

/// Split text into chunks on paragraph boundaries, respecting `max_chars`.
///
/// Whitespace-only paragraphs are dropped. Returns pieces in document
/// order; an input with no non-empty paragraphs returns an empty vec.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for para in text.split("\n\n") {
        let trimmed = para.trim();
        if trimmed.is_empty() {
            continue;
        }

        // If adding this paragraph would exceed max, flush current buffer
        let would_be = if current.is_empty() {
            trimmed.len()
        } else {
            current.len() + 2 + trimmed.len()
        };
        if would_be > max_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }

        if trimmed.len() > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            hard_split(trimmed, max_chars, &mut chunks);
        } else {
            if !current.is_empty() {
                current.push_str("\n\n");
            }
            current.push_str(trimmed);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Split an oversized paragraph at word boundaries, falling back to a raw
/// character split when no boundary exists within the window.
fn hard_split(paragraph: &str, max_chars: usize, out: &mut Vec<String>) {
    let mut remaining = paragraph;
    while !remaining.is_empty() {
        if remaining.len() <= max_chars {
            out.push(remaining.trim().to_string());
            break;
        }
        let window = floor_char_boundary(remaining, max_chars);
        let split_at = remaining[..window]
            .rfind(char::is_whitespace)
            .map(|pos| pos + 1)
            .unwrap_or(window);
        let piece = remaining[..split_at].trim();
        if !piece.is_empty() {
            out.push(piece.to_string());
        }
        remaining = &remaining[split_at..];
    }
}

/// Largest index `<= at` that lands on a UTF-8 character boundary.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    let mut i = at.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_chunk() {
        let chunks = chunk_text("a single short paragraph", 100);
        assert_eq!(chunks, vec!["a single short paragraph"]);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk_text("", 100).is_empty());
        assert!(chunk_text("  \n\n \n\n", 100).is_empty());
    }

    #[test]
    fn paragraphs_merge_until_limit() {
        let text = "first para\n\nsecond para\n\nthird para";
        let chunks = chunk_text(text, 25);
        assert_eq!(chunks, vec!["first para\n\nsecond para", "third para"]);
    }

    #[test]
    fn oversized_paragraph_splits_at_word_boundary() {
        let text = "alpha beta gamma delta epsilon";
        let chunks = chunk_text(text, 12);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.len() <= 12, "chunk too long: {chunk:?}");
            assert!(!chunk.starts_with(' ') && !chunk.ends_with(' '));
        }
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn unbroken_run_falls_back_to_raw_split() {
        let text = "x".repeat(25);
        let chunks = chunk_text(&text, 10);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let text = "é".repeat(30);
        let chunks = chunk_text(&text, 11);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn chunking_is_deterministic() {
        let text = "one\n\ntwo\n\nthree";
        assert_eq!(chunk_text(text, 8), chunk_text(text, 8));
    }
}
