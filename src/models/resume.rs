use serde::Serialize;

/// Structured resume data extracted from one document.
///
/// Constructed fresh per run and consumed immediately by the patcher;
/// serializable for the `parse` command and for tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeRecord {
    /// First non-blank line of the text stream ("" for blank input).
    pub name: String,
    pub contact: Contact,
    /// Free text following a "summary" header.
    pub summary: String,
    /// Job entries in document order.
    pub experience: Vec<ExperienceEntry>,
    /// Grouped categories and bare items, in document order.
    pub skills: Vec<SkillsEntry>,
    /// Free text following an "education" header.
    pub education: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none()
    }
}

/// One job entry within the experience section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceEntry {
    /// First non-blank line of the entry block. Never empty.
    pub title: String,
    /// Second non-blank line of the entry block.
    pub company: String,
    /// First line containing a month-year token, verbatim ("" if none).
    pub duration: String,
    /// One item per bullet line, marker stripped.
    pub responsibilities: Vec<String>,
}

/// A skills-section entry: a grouped category or a bare item.
///
/// Serialized untagged so a grouped entry becomes an object and a bare
/// entry a plain string, matching the record's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SkillsEntry {
    Grouped { category: String, skills: Vec<String> },
    Bare(String),
}
