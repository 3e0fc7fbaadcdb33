pub mod html;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SyncError};
use crate::models::ResumeRecord;

pub use html::patch_resume_html;

/// Patch a resume HTML file in place with the record's fields.
///
/// The file is read once and written once; markup outside the patched
/// regions is preserved byte for byte.
pub fn patch_file(record: &ResumeRecord, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SyncError::HtmlNotFound {
            path: path.display().to_string(),
        });
    }
    let html = fs::read_to_string(path)?;
    let patched = patch_resume_html(record, &html)?;
    fs::write(path, patched)?;
    debug!(path = %path.display(), "patched resume HTML");
    Ok(())
}
