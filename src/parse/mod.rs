pub mod experience;
pub mod flatten;
pub mod segmenter;
pub mod skills;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, SyncError};
use crate::models::{Contact, ResumeRecord};

/// Phone-number shape (first match wins).
const PHONE_PATTERN: &str = r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}";
/// Email shape (first match wins).
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Parse a converted HTML fragment into a resume record.
pub fn parse_resume(html: &str) -> Result<ResumeRecord> {
    parse_text(&flatten::flatten_html(html))
}

/// Parse a flat text stream (tags already stripped) into a resume record.
pub fn parse_text(text: &str) -> Result<ResumeRecord> {
    let name = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("")
        .to_string();

    let contact = Contact {
        phone: compile(PHONE_PATTERN)?
            .find(text)
            .map(|m| m.as_str().to_string()),
        email: compile(EMAIL_PATTERN)?
            .find(text)
            .map(|m| m.as_str().to_string()),
    };

    let mut record = ResumeRecord {
        name,
        contact,
        ..ResumeRecord::default()
    };

    let segmenter = segmenter::Segmenter::new()?;
    let chunks = segmenter.segment(text);
    debug!(chunks = chunks.len(), "segmented text stream");

    for (i, chunk) in chunks.iter().enumerate() {
        // The leading chunk holds the name/contact lines and is never a
        // section, unless the text itself starts at a header line.
        if i == 0 && !segmenter.begins_with_header(chunk) {
            continue;
        }
        // Fixed priority, first keyword wins. Overlapping keywords can
        // misroute a chunk; this matches the documented contract.
        let lower = chunk.to_lowercase();
        if lower.contains("summary") {
            record.summary = section_body(chunk);
        } else if lower.contains("experience") || lower.contains("professional") {
            record.experience = experience::parse_section(chunk)?;
        } else if lower.contains("skill") {
            record.skills = skills::parse_section(chunk);
        } else if lower.contains("education") {
            record.education = section_body(chunk);
        }
    }

    Ok(record)
}

/// Everything after the header line, or the whole chunk if it is one line.
fn section_body(chunk: &str) -> String {
    match chunk.split_once('\n') {
        Some((_, body)) => body.trim().to_string(),
        None => chunk.trim().to_string(),
    }
}

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| SyncError::Other(format!("invalid regex: {e}")))
}
