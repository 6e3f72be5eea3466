use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Cut `s` to at most `max_cells` cells, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = grapheme_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme after the one at `byte_offset`, or None at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let len = s[byte_offset..].graphemes(true).next().map_or(0, str::len);
    Some(byte_offset + len)
}

/// Byte offset of the grapheme before `byte_offset`, or None at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Terminal column of `byte_offset` within `s`.
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

/// Start of the whitespace-delimited word left of `byte_offset`.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    let is_space = |g: &str| g.chars().all(char::is_whitespace);
    let mut idx = graphemes.len();
    while idx > 0 && is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(byte_offset, |(i, _)| *i)
}

fn grapheme_width(g: &str) -> usize {
    if g == "\t" {
        4
    } else {
        UnicodeWidthStr::width(g)
    }
}
