use regex::Regex;

use crate::error::Result;
use crate::parse::compile;

/// Section header keywords, matched case-insensitively at line starts.
const HEADER_PATTERN: &str =
    r"(?i)^(?:SUMMARY|EXPERIENCE|SKILLS|EDUCATION|Professional Experience)";

/// Splits a flat text stream into section chunks at recognized headers.
pub struct Segmenter {
    header: Regex,
}

impl Segmenter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            header: compile(HEADER_PATTERN)?,
        })
    }

    /// Split the text into ordered chunks.
    ///
    /// A new chunk begins at every line start followed by a header keyword;
    /// the header line is the first line of its chunk and only the single
    /// separating newline is consumed. The portion before the first boundary
    /// (typically name/contact lines) is the leading chunk. Without any
    /// header the whole text is one chunk.
    #[must_use]
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_at_line_starts(text, &self.header)
    }

    /// Whether a chunk starts at a recognized header line.
    #[must_use]
    pub fn begins_with_header(&self, chunk: &str) -> bool {
        self.header.is_match(chunk)
    }
}

/// Split `text` before every line start where `boundary` matches, consuming
/// the separating newline. The boundary pattern must be anchored with `^`.
pub(crate) fn split_at_line_starts<'a>(text: &'a str, boundary: &Regex) -> Vec<&'a str> {
    let mut starts = Vec::new();
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            let pos = i + 1;
            if pos < text.len() && boundary.is_match(&text[pos..]) {
                starts.push(pos);
            }
        }
    }

    if starts.is_empty() {
        return vec![text];
    }

    let mut parts = Vec::with_capacity(starts.len() + 1);
    parts.push(&text[..starts[0] - 1]);
    for (k, &start) in starts.iter().enumerate() {
        let end = if k + 1 < starts.len() {
            starts[k + 1] - 1
        } else {
            text.len()
        };
        parts.push(&text[start..end]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> Segmenter {
        Segmenter::new().unwrap()
    }

    #[test]
    fn no_header_returns_single_chunk() {
        let text = "Jane Doe\nsome free text\nwith no section names";
        let chunks = segmenter().segment(text);
        assert_eq!(chunks, vec![text]);
    }

    #[test]
    fn four_headers_return_five_chunks() {
        let text = "Jane Doe\n555-123-4567\nSUMMARY\nA summary.\nEXPERIENCE\nAcme Corp, CA\nSKILLS\nGo: yes\nEDUCATION\nBS";
        let chunks = segmenter().segment(text);
        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[0], "Jane Doe\n555-123-4567");
        assert!(chunks[1].starts_with("SUMMARY"));
        assert!(chunks[2].starts_with("EXPERIENCE"));
        assert!(chunks[3].starts_with("SKILLS"));
        assert!(chunks[4].starts_with("EDUCATION"));
    }

    #[test]
    fn headers_match_case_insensitively() {
        let chunks = segmenter().segment("Pat\nSummary\ntext\nskills\nmore");
        assert_eq!(chunks.len(), 3);
        assert!(chunks[1].starts_with("Summary"));
        assert!(chunks[2].starts_with("skills"));
    }

    #[test]
    fn professional_experience_is_a_header() {
        let chunks = segmenter().segment("Pat\nProfessional Experience\nAcme");
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1], "Professional Experience\nAcme");
    }

    #[test]
    fn header_mid_line_is_not_a_boundary() {
        let chunks = segmenter().segment("Pat\nMy SKILLS are many\nmore text");
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn chunk_content_is_preserved_verbatim() {
        let text = "Pat\nSUMMARY\n  indented line  \n\ntrailing";
        let chunks = segmenter().segment(text);
        assert_eq!(chunks[1], "SUMMARY\n  indented line  \n\ntrailing");
    }

    #[test]
    fn text_beginning_with_header_has_empty_leading_portion() {
        // No newline precedes the first header, so the first chunk simply
        // starts at it; begins_with_header identifies it as a section.
        let s = segmenter();
        let chunks = s.segment("SUMMARY\ntext\nEDUCATION\nBS");
        assert_eq!(chunks.len(), 2);
        assert!(s.begins_with_header(chunks[0]));
    }

    #[test]
    fn begins_with_header_rejects_leading_chunk() {
        let s = segmenter();
        assert!(!s.begins_with_header("Jane Doe\n555-123-4567"));
        assert!(s.begins_with_header("skills\n- Go"));
    }
}
