/// Greedy word wrap; words longer than `width` (long paths, mostly) are
/// split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_long(word, width.max(1)) {
            let piece_len = piece.chars().count();
            let current_len = current.chars().count();
            if current.is_empty() {
                current = piece;
            } else if current_len + 1 + piece_len <= width {
                current.push(' ');
                current.push_str(&piece);
            } else {
                lines.push(std::mem::replace(&mut current, piece));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

fn split_long(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        None => s.to_string(),
        Some(_) if max_len == 0 => String::new(),
        Some(_) => {
            let mut out: String = s.chars().take(max_len - 1).collect();
            out.push('…');
            out
        }
    }
}
