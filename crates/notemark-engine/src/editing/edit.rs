/// Result of a cursor-aware edit: the new paragraph text and where the caret
/// goes next.
///
/// The caret must be applied after the input re-renders with `text`, so
/// callers typically defer it by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    /// UTF-16 unit offset into `text`.
    pub cursor: usize,
}

impl Edit {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }
}
