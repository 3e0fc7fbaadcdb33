use crate::error::Result;
use crate::models::ExperienceEntry;
use crate::parse::{compile, segmenter::split_at_line_starts};

/// Title/company boundary: an uppercase start, then a comma (optionally
/// followed by spaces) or whitespace, then a two-letter uppercase token
/// (state abbreviation heuristic). Intentionally narrow; lines not matching
/// this shape fold into the preceding entry.
const ENTRY_BOUNDARY_PATTERN: &str = r"^[A-Z][^,\n]*(?:,\s*|\s+)[A-Z]{2}(?:\s|$)";

/// Month-year token, e.g. "Jan 2020" or "January 2020".
const DURATION_PATTERN: &str =
    r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}";

/// Split an experience chunk into individual job entries.
///
/// The first sub-chunk (the section label and anything before the first
/// recognized title/company line) is discarded. Entries with fewer than two
/// non-blank lines are skipped.
pub fn parse_section(section: &str) -> Result<Vec<ExperienceEntry>> {
    let boundary = compile(ENTRY_BOUNDARY_PATTERN)?;
    let duration_re = compile(DURATION_PATTERN)?;

    let mut entries = Vec::new();
    for block in split_at_line_starts(section, &boundary).iter().skip(1) {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() < 2 {
            continue;
        }

        let duration = lines
            .iter()
            .find(|l| duration_re.is_match(l))
            .map_or_else(String::new, |l| (*l).to_string());

        let responsibilities = lines[2..]
            .iter()
            .filter_map(|l| bullet_text(l))
            .collect();

        entries.push(ExperienceEntry {
            title: lines[0].to_string(),
            company: lines[1].to_string(),
            duration,
            responsibilities,
        });
    }

    Ok(entries)
}

/// Remainder of a bullet line (`-`, `•` or `*`), marker stripped and trimmed.
fn bullet_text(line: &str) -> Option<String> {
    let mut chars = line.chars();
    match chars.next() {
        Some('-' | '•' | '*') => Some(chars.as_str().trim().to_string()),
        _ => None,
    }
}
