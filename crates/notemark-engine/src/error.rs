use thiserror::Error;

/// Failures of the cursor-aware edit helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The caller asked to fill a mention but the caret is not inside one.
    #[error("no mention contains cursor {cursor}")]
    NoMentionAtCursor { cursor: usize },

    /// The replacement broke the mention it was inserted into.
    #[error("mention at cursor {cursor} could not be found after replacement")]
    MentionLost { cursor: usize },
}

/// A token kind name that is not one of `raw`, `bold`, `italic`, `mention`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown token kind `{0}`")]
pub struct UnknownKindError(pub String);
