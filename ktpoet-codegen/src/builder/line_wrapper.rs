//! Column-aware output buffer that breaks lines at wrapping spaces.
//!
//! Text after a wrapping space is held back until the wrapper knows whether
//! it fits on the current line. If it does, the space is written as `' '`;
//! otherwise the space becomes a newline plus continuation indentation.

/// A pending soft-wrap point.
#[derive(Debug, Clone, Copy)]
struct Wrap {
    /// Indent levels for the continuation line.
    level: usize,
    /// Zero-width wraps write nothing when they do not break.
    space: bool,
}

#[derive(Debug)]
pub(crate) struct LineWrapper {
    out: String,
    indent: String,
    column_limit: usize,
    column: usize,
    buffer: String,
    pending: Option<Wrap>,
}

impl LineWrapper {
    pub(crate) fn new(indent: impl Into<String>, column_limit: usize) -> Self {
        Self {
            out: String::new(),
            indent: indent.into(),
            column_limit,
            column: 0,
            buffer: String::new(),
            pending: None,
        }
    }

    /// Append text that may contain newlines.
    pub(crate) fn append(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if let Some(wrap) = self.pending {
            match s.find('\n') {
                None => {
                    let width = s.chars().count();
                    if self.column + width <= self.column_limit {
                        self.buffer.push_str(s);
                        self.column += width;
                        return;
                    }
                    self.flush(wrap, true);
                }
                // A wrapping space right before a line break is dropped.
                Some(0) if self.buffer.is_empty() => {
                    self.pending = None;
                    if wrap.space {
                        self.column -= 1;
                    }
                }
                Some(i) => {
                    let width = s[..i].chars().count();
                    let overflow = self.column + width > self.column_limit;
                    self.flush(wrap, overflow);
                }
            }
        }

        self.out.push_str(s);
        self.column = match s.rfind('\n') {
            Some(i) => s[i + 1..].chars().count(),
            None => self.column + s.chars().count(),
        };
    }

    /// A space the line may break at. Continuation lines are indented
    /// `level` units.
    pub(crate) fn wrapping_space(&mut self, level: usize) {
        self.push_wrap(Wrap { level, space: true });
    }

    /// A break point that writes nothing unless the line breaks there.
    pub(crate) fn zero_width_space(&mut self, level: usize) {
        self.push_wrap(Wrap {
            level,
            space: false,
        });
    }

    fn push_wrap(&mut self, wrap: Wrap) {
        if let Some(previous) = self.pending {
            self.flush(previous, false);
        }
        if wrap.space {
            self.column += 1;
        }
        self.pending = Some(wrap);
    }

    /// Write the pending wrap point and the buffered text behind it.
    fn flush(&mut self, wrap: Wrap, break_line: bool) {
        if break_line {
            log::trace!("wrapping at column {}", self.column);
            self.out.push('\n');
            for _ in 0..wrap.level {
                self.out.push_str(&self.indent);
            }
            self.column = self.indent.chars().count() * wrap.level + self.buffer.chars().count();
        } else if wrap.space {
            self.out.push(' ');
        }
        self.out.push_str(&self.buffer);
        self.buffer.clear();
        self.pending = None;
    }

    /// Finish output. A trailing wrap point with nothing behind it is dropped.
    pub(crate) fn finish(mut self) -> String {
        if let Some(wrap) = self.pending {
            if self.buffer.is_empty() {
                self.pending = None;
            } else {
                self.flush(wrap, false);
            }
        }
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper(limit: usize) -> LineWrapper {
        LineWrapper::new("  ", limit)
    }

    #[test]
    fn test_no_wrap_when_fits() {
        let mut w = wrapper(10);
        w.append("abc");
        w.wrapping_space(1);
        w.append("def");
        assert_eq!(w.finish(), "abc def");
    }

    #[test]
    fn test_exact_limit_does_not_wrap() {
        let mut w = wrapper(10);
        w.append("abcd");
        w.wrapping_space(1);
        w.append("efghi");
        assert_eq!(w.finish(), "abcd efghi");
    }

    #[test]
    fn test_one_past_limit_wraps() {
        let mut w = wrapper(10);
        w.append("abcd");
        w.wrapping_space(1);
        w.append("efghij");
        assert_eq!(w.finish(), "abcd\n  efghij");
    }

    #[test]
    fn test_wraps_at_most_recent_space() {
        let mut w = wrapper(10);
        w.append("aa");
        w.wrapping_space(2);
        w.append("bb");
        w.wrapping_space(2);
        w.append("cccccc");
        assert_eq!(w.finish(), "aa bb\n    cccccc");
    }

    #[test]
    fn test_long_token_is_not_broken() {
        let mut w = wrapper(5);
        w.append("a");
        w.wrapping_space(1);
        w.append("abcdefghij");
        assert_eq!(w.finish(), "a\n  abcdefghij");
    }

    #[test]
    fn test_space_before_newline_is_dropped() {
        let mut w = wrapper(10);
        w.append("abc");
        w.wrapping_space(1);
        w.append("\nnext");
        assert_eq!(w.finish(), "abc\nnext");
    }

    #[test]
    fn test_newline_after_buffer_checks_width() {
        let mut w = wrapper(10);
        w.append("abcd");
        w.wrapping_space(1);
        w.append("efghijk\n");
        w.append("x");
        assert_eq!(w.finish(), "abcd\n  efghijk\nx");
    }

    #[test]
    fn test_zero_width_space() {
        let mut w = wrapper(10);
        w.append("List<");
        w.zero_width_space(1);
        w.append("Int>");
        assert_eq!(w.finish(), "List<Int>");

        let mut w = wrapper(8);
        w.append("List<");
        w.zero_width_space(1);
        w.append("String>");
        assert_eq!(w.finish(), "List<\n  String>");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut w = wrapper(6);
        w.append("éé");
        w.wrapping_space(1);
        w.append("ééé");
        assert_eq!(w.finish(), "éé ééé");
    }
}
