//! # Source Text
//!
//! The immutable line array a session segments. Created once from uploaded
//! or pasted text and never changed while boundaries are being edited.

/// Ordered, immutable sequence of source lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    lines: Vec<String>,
}

impl Source {
    /// Split raw text into lines.
    ///
    /// Splits on `'\n'` and strips a trailing `'\r'` from each line. The
    /// result always has at least one line, even for empty text.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();

        Self { lines }
    }

    /// Wrap an existing line array (an empty array becomes one empty line).
    ///
    /// Entries holding line breaks are split, so every stored line is a
    /// single line and segment texts rejoin to the same source.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.iter().any(|line| line.contains('\n')) {
            return Self::from_text(&lines.join("\n"));
        }

        let mut lines: Vec<String> = lines
            .into_iter()
            .map(|line| match line.strip_suffix('\r') {
                Some(stripped) => stripped.to_string(),
                None => line,
            })
            .collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines, always at least 1
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines in `[start, end)` joined with newlines
    pub fn slice_text(&self, start: usize, end: usize) -> String {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        self.lines[start..end].join("\n")
    }

    /// The whole source, re-joined
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Count alphabetic characters, ignoring everything else
pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Count whitespace-delimited tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
