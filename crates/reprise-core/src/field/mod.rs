//! Explicit accessors for validated and dynamically resolved fields.
//!
//! Two idioms rendered as plain methods instead of runtime interception:
//!
//! - [`ValidatedField`] guards writes with a validator. `set` is the command
//!   (validate, then store), `get` is the query (read, nothing else); a
//!   rejected write leaves the previous value in place and fails with
//!   [`FieldError::Invalid`].
//! - [`AttrMap`] resolves string attributes through stored values first and
//!   an optional fallback resolver second. A lookup that resolves nowhere
//!   fails with [`FieldError::Unknown`] rather than producing a silent
//!   default.

mod attrs;
mod validated;

pub use attrs::AttrMap;
pub use validated::{ValidatedField, validators};

use thiserror::Error;

/// Errors from field access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A write was rejected by the field's validator.
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Name of the field that rejected the write.
        field: String,
        /// What the validator objected to.
        reason: String,
    },
    /// A lookup resolved neither to a stored value nor through the fallback.
    #[error("no attribute named {name:?}")]
    Unknown {
        /// The attribute name as requested.
        name: String,
    },
}
