/// Optional clean-up applied to text before it is encoded. Both steps lose information, so both are off
/// unless asked for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Normalize {
    /// Fold all text to lower case
    pub lowercase: bool,
    /// Replace each line break with a single space
    pub join_lines: bool,
}

impl Normalize {
    pub fn is_noop(&self) -> bool {
        !self.lowercase && !self.join_lines
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = if self.join_lines {
            // "\r\n" counts as one line break
            text.replace("\r\n", " ").replace('\n', " ")
        } else {
            text.to_string()
        };
        if self.lowercase {
            out = out.to_lowercase();
        }
        out
    }
}
