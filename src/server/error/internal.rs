use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A status column holds a value none of the status enums know about
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} status '{value}' stored in database")]
    UnknownStatus {
        /// Which record type the status belongs to
        kind: &'static str,
        /// The stored value that failed to parse
        value: String,
    },
}
