//! Writing template documents.

use crate::core::Schema;
use crate::error::Result;
use crate::sources::Format;
use std::fs;
use std::io::Write;
use std::path::Path;

impl Schema {
    /// Render [`template`](Self::template) in `format` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is not enabled, rendering fails, or the
    /// writer fails.
    pub fn write_template<W: Write>(&self, format: Format, writer: &mut W) -> Result<()> {
        let text = format.render(&self.template())?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write [`template`](Self::template) to `path`, choosing the format from
    /// the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported or writing fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use confguard::constraints::Check;
    /// use confguard::core::{FieldDescriptor, Schema};
    ///
    /// # fn main() -> confguard::error::Result<()> {
    /// let schema = Schema::builder()
    ///     .required(FieldDescriptor::new("Fruit", "Name of the fruit.", Check::string()))
    ///     .build()?;
    /// schema.write_template_file("fruit.template.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_template_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let text = format.render(&self.template())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), "writing template");

        fs::write(path, text)?;
        Ok(())
    }
}
