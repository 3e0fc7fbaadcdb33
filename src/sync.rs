use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::convert::converter_for;
use crate::error::{Result, SyncError};
use crate::models::ResumeRecord;
use crate::parse::parse_resume;
use crate::patch::patch_file;

/// Find the Word document to sync from in the project root.
///
/// Candidates are sorted by filename so the pick is deterministic when
/// several documents are present.
pub fn find_document(config: &Config) -> Result<Option<PathBuf>> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(&config.project_root)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| config.is_document_extension(e))
        })
        .collect();
    candidates.sort();
    Ok(candidates.into_iter().next())
}

/// Convert a document file into its intermediate HTML fragment.
pub fn extract_html(path: &Path) -> Result<String> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let converter = converter_for(ext).ok_or_else(|| SyncError::UnsupportedFormat {
        ext: ext.to_string(),
    })?;

    let bytes = fs::read(path)?;
    let html = converter.convert(&bytes)?;
    debug!(
        format = converter.format(),
        bytes = bytes.len(),
        "converted document"
    );
    Ok(html)
}

/// Convert a document file and parse it into a resume record.
pub fn extract_record(path: &Path) -> Result<ResumeRecord> {
    let html = extract_html(path)?;
    parse_resume(&html)
}

/// Run the full sync: locate the document, extract a record, patch the
/// HTML resume and report what changed.
///
/// Missing inputs and patch failures are reported on stdout and end the
/// run normally; only setup-level failures (unreadable project root)
/// surface as errors.
pub fn run(config: &Config) -> Result<()> {
    let Some(document) = find_document(config)? else {
        println!(
            "❌ No Word document found in {}",
            config.project_root.display()
        );
        return Ok(());
    };
    if !config.html_path.exists() {
        println!(
            "❌ {} not found in {}",
            config.settings.html_file,
            config.project_root.display()
        );
        return Ok(());
    }

    let document_name = document
        .file_name()
        .map_or_else(|| document.display().to_string(), |n| n.to_string_lossy().into_owned());
    println!("🔄 Syncing {document_name} to {}...", config.settings.html_file);

    let record = match extract_record(&document) {
        Ok(record) => record,
        Err(err) => {
            println!("❌ Failed to extract content from Word document: {err}");
            return Ok(());
        }
    };

    match patch_file(&record, &config.html_path) {
        Ok(()) => {
            println!("✅ HTML resume updated successfully!");
            println!("🎉 Resume sync completed successfully!");
            report_updates(&record);
        }
        Err(err) => {
            println!("❌ Error updating HTML resume: {err}");
            println!("❌ Resume sync failed!");
        }
    }

    Ok(())
}

fn report_updates(record: &ResumeRecord) {
    println!("\n📋 Updated sections:");
    if !record.name.is_empty() {
        println!("   • Name: {}", record.name);
    }
    if !record.contact.is_empty() {
        let mut parts = Vec::new();
        if let Some(phone) = &record.contact.phone {
            parts.push(format!("phone: {phone}"));
        }
        if let Some(email) = &record.contact.email {
            parts.push(format!("email: {email}"));
        }
        println!("   • Contact: {}", parts.join(", "));
    }
    if !record.summary.is_empty() {
        let preview: String = record.summary.chars().take(50).collect();
        println!("   • Summary: {preview}...");
    }
}
