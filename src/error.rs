//! Error types shared across the crate.

use thiserror::Error;

/// Errors reported while configuring or growing a hash table.
///
/// Looking up or removing a missing key is not an error; those operations
/// return `Option`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The maximum load factor must be finite and strictly positive.
    #[error("invalid load factor {0}: must be finite and > 0")]
    InvalidLoadFactor(f64),

    /// A table needs at least one bucket.
    #[error("invalid capacity {0}: a table needs at least one bucket")]
    InvalidCapacity(usize),

    /// Growing the bucket array would overflow `usize`.
    #[error("bucket count overflow while growing the table")]
    CapacityOverflow,
}

/// Result alias used by fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::InvalidLoadFactor(0.0).to_string(),
            "invalid load factor 0: must be finite and > 0"
        );
        assert_eq!(
            Error::InvalidCapacity(0).to_string(),
            "invalid capacity 0: a table needs at least one bucket"
        );
        assert_eq!(
            Error::CapacityOverflow.to_string(),
            "bucket count overflow while growing the table"
        );
    }
}
