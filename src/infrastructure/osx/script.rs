//! AppleScript text assembly

/// Marker that joins a logical AppleScript statement split across lines
pub const CONTINUATION: char = '¬';

/// Append-only builder for one AppleScript program.
///
/// Quoted values are written verbatim; callers must not pass text with
/// unescaped double quotes. `build` consumes the builder.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    text: String,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to the current line
    pub fn add(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    /// Append `"text"` to the current line
    pub fn quote(mut self, text: &str) -> Self {
        self.text.push('"');
        self.text.push_str(text);
        self.text.push('"');
        self
    }

    /// Append a list literal `{"a", "b"}` to the current line
    pub fn array(mut self, values: &[&str]) -> Self {
        self.text.push('{');
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.text.push_str(", ");
            }
            self.text.push('"');
            self.text.push_str(value);
            self.text.push('"');
        }
        self.text.push('}');
        self
    }

    /// Append the continuation marker to the current line
    pub fn cont(mut self) -> Self {
        self.text.push(CONTINUATION);
        self
    }

    /// Start a new line
    pub fn new_line(mut self) -> Self {
        self.text.push('\n');
        self
    }

    /// Start a new line beginning with `text`
    pub fn new_line_with(mut self, text: &str) -> Self {
        self.text.push('\n');
        self.text.push_str(text);
        self
    }

    /// Return the program text
    pub fn build(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_wraps_text() {
        assert_eq!(ScriptBuilder::new().quote("Hello").build(), "\"Hello\"");
    }

    #[test]
    fn quote_does_not_escape() {
        assert_eq!(ScriptBuilder::new().quote("a\\b").build(), "\"a\\b\"");
    }

    #[test]
    fn array_is_comma_space_separated() {
        assert_eq!(
            ScriptBuilder::new().array(&["a", "b"]).build(),
            "{\"a\", \"b\"}"
        );
    }

    #[test]
    fn array_single_and_empty() {
        assert_eq!(ScriptBuilder::new().array(&["Hello"]).build(), "{\"Hello\"}");
        assert_eq!(ScriptBuilder::new().array(&[]).build(), "{}");
    }

    #[test]
    fn cont_then_new_line() {
        assert_eq!(
            ScriptBuilder::new().cont().new_line_with("x").build(),
            "¬\nx"
        );
    }

    #[test]
    fn new_line_without_text() {
        assert_eq!(
            ScriptBuilder::new().add("a").new_line().add("b").build(),
            "a\nb"
        );
    }

    #[test]
    fn continuation_is_not_ascii() {
        assert!(!CONTINUATION.is_ascii());
        assert_eq!(ScriptBuilder::new().cont().build(), "\u{ac}");
    }
}
