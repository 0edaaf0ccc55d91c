//! Document source trait.

use crate::error::Result;
use serde_json::Value;

/// Something a document can be loaded from.
///
/// Implement this trait to validate documents kept somewhere other than a
/// local file or a string (a database row, a remote store, ...).
pub trait DocumentSource: Send + Sync {
    /// Load and parse the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self) -> Result<Value>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;
}
