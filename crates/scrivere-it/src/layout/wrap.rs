// Greedy word wrap on character counts.

use scrivere_core::character::char_len;

/// Wrap one input line to lines shorter than `width` characters.
///
/// Lines of at most `width` characters are returned unchanged. Longer lines
/// are split on single spaces and packed greedily: a word joins the current
/// line only while the line, including the space that follows it, stays
/// below `width`. Flushed lines have trailing spaces trimmed, so a run of
/// spaces that falls on a break collapses; runs inside a line are kept. A
/// word that is `width` characters or longer on its own is cut into
/// `width`-sized chunks, so no non-space character is ever dropped.
///
/// The result always holds at least one line; an empty input line yields a
/// single empty line.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if char_len(line) <= width {
        return vec![line.to_string()];
    }

    let mut wrapped = LineBuffer::default();
    for word in line.split(' ') {
        let word_len = char_len(word);
        if wrapped.len + word_len < width {
            wrapped.push_word(word, word_len);
            continue;
        }

        wrapped.flush();
        let mut rest = word;
        let mut rest_len = word_len;
        while rest_len >= width {
            let (chunk, tail) = split_at_char(rest, width);
            wrapped.lines.push(chunk.to_string());
            rest = tail;
            rest_len -= width;
        }
        if !rest.is_empty() {
            wrapped.push_word(rest, rest_len);
        }
    }
    wrapped.flush();
    wrapped.lines
}

/// Accumulates the current line. `len` counts characters, including the
/// trailing space appended after each word.
#[derive(Default)]
struct LineBuffer {
    current: String,
    len: usize,
    lines: Vec<String>,
}

impl LineBuffer {
    fn push_word(&mut self, word: &str, word_len: usize) {
        self.current.push_str(word);
        self.current.push(' ');
        self.len += word_len + 1;
    }

    fn flush(&mut self) {
        let trimmed = self.current.trim_end_matches(' ');
        if !trimmed.is_empty() {
            self.lines.push(trimmed.to_string());
        }
        self.current.clear();
        self.len = 0;
    }
}

/// Split `s` after its first `n` characters.
fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}
