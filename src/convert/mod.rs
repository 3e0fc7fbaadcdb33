pub mod docx;

use crate::error::Result;

pub use docx::DocxConverter;

/// Converts a binary word-processing document into a semantic HTML fragment.
pub trait DocumentConverter {
    /// Format identifier.
    fn format(&self) -> &'static str;

    /// Convert raw document bytes into an HTML fragment.
    fn convert(&self, bytes: &[u8]) -> Result<String>;
}

/// Route a file extension to a converter.
#[must_use]
pub fn converter_for(ext: &str) -> Option<Box<dyn DocumentConverter>> {
    match ext.to_lowercase().as_str() {
        // Legacy binary .doc is routed too and fails at the container
        // layer, surfacing as a conversion failure.
        "docx" | "doc" => Some(Box::new(DocxConverter::new())),
        _ => None,
    }
}
