//! Dropdown error types.
//!
//! Every variant is a contract violation by the caller (inconsistent props)
//! or a broken internal invariant. They are returned to the host, never
//! recovered from inside the widget.

use thiserror::Error;

/// Errors raised while building, rendering or driving a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropdownError {
    /// A text icon override was not exactly one character.
    #[error("dropdown icon must be a single character, got {icon:?} ({length} characters)")]
    IconLength {
        /// The rejected icon text.
        icon: String,
        /// Its length in characters.
        length: usize,
    },

    /// The current value is not among the selectable options.
    #[error("dropdown value {value:?} does not match any option")]
    InvalidValue {
        /// Label of the rejected value.
        value: String,
    },

    /// The highlighted item id has no rendered row.
    #[error("highlighted dropdown item {id} does not resolve to a rendered row")]
    UnresolvedHighlight {
        /// The item id that failed to resolve.
        id: String,
    },

    /// The overlay offset needed to align the highlighted row does not fit
    /// an element offset.
    #[error("dropdown overlay offset {offset} is out of range")]
    OverlayOffset {
        /// The computed offset, in rows.
        offset: i32,
    },

    /// A row carried an item attribute that is not a list index.
    #[error("dropdown item id {id:?} is not a list index")]
    MalformedItemId {
        /// The attribute value that failed to parse.
        id: String,
    },
}

pub type Result<T> = std::result::Result<T, DropdownError>;
