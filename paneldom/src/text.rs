use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Word-wrap text to the given width. Words wider than the limit are
/// broken at character boundaries.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let mut parts = break_word(word, max_width);
                if let Some(last) = parts.pop() {
                    lines.extend(parts);
                    current_width = display_width(&last);
                    current = last;
                }
                continue;
            }

            let space = usize::from(!current.is_empty());
            if current_width + space + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                current_width = word_width;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

fn break_word(word: &str, max_width: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in word.chars() {
        let w = char_width(ch);
        if w == 0 {
            current.push(ch);
            continue;
        }
        if current_width + w > max_width {
            parts.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }

    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Rows the text occupies when word-wrapped to `width`.
///
/// This is the natural height of a text content region, measured
/// before an expand animation starts.
pub fn measure_height(s: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    wrap_words(s, width as usize).len() as u16
}
