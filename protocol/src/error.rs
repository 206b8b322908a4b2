use thiserror::Error;

/// Raised when the caller asks [`crate::format_response`] to build a response
/// that is structurally incomplete. This is a programmer error at the call
/// site, not a wire-level failure — malformed/unknown *incoming* commands are
/// never fatal and are represented by a `None` return from `parse_command`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("id response requires a name or an author")]
    MissingIdentity,

    #[error("option response requires a name and a type")]
    MissingOptionFields,
}
