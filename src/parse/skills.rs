use crate::models::SkillsEntry;

/// Parse a skills chunk into grouped categories and bare items.
///
/// The first non-blank line is the section header and is skipped. A line
/// with a colon becomes a grouped entry (comma-split skill list); a line
/// starting with `-` or `•` becomes a bare entry; anything else is dropped.
#[must_use]
pub fn parse_section(section: &str) -> Vec<SkillsEntry> {
    let lines = section.lines().map(str::trim).filter(|l| !l.is_empty());

    let mut entries = Vec::new();
    for line in lines.skip(1) {
        if let Some((category, list)) = line.split_once(':') {
            entries.push(SkillsEntry::Grouped {
                category: category.trim().to_string(),
                skills: list.split(',').map(|s| s.trim().to_string()).collect(),
            });
        } else if let Some(rest) = bullet_text(line) {
            entries.push(SkillsEntry::Bare(rest));
        }
    }
    entries
}

/// Remainder of a bullet line. Unlike responsibilities, `*` is not a
/// recognized marker here.
fn bullet_text(line: &str) -> Option<String> {
    let mut chars = line.chars();
    match chars.next() {
        Some('-' | '•') => Some(chars.as_str().trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_and_bare_entries() {
        let entries = parse_section("SKILLS\nLanguages: Go, Python\n- Leadership");
        assert_eq!(
            entries,
            vec![
                SkillsEntry::Grouped {
                    category: "Languages".into(),
                    skills: vec!["Go".into(), "Python".into()],
                },
                SkillsEntry::Bare("Leadership".into()),
            ]
        );
    }

    #[test]
    fn splits_on_first_colon_only() {
        let entries = parse_section("SKILLS\nTools: kubectl: v1, helm");
        assert_eq!(
            entries,
            vec![SkillsEntry::Grouped {
                category: "Tools".into(),
                skills: vec!["kubectl: v1".into(), "helm".into()],
            }]
        );
    }

    #[test]
    fn empty_comma_tokens_are_preserved() {
        let entries = parse_section("SKILLS\nLanguages: Go,, Python");
        assert_eq!(
            entries,
            vec![SkillsEntry::Grouped {
                category: "Languages".into(),
                skills: vec!["Go".into(), String::new(), "Python".into()],
            }]
        );
    }

    #[test]
    fn star_is_not_a_skills_bullet() {
        let entries = parse_section("SKILLS\n* Not a bullet here\n- But this is");
        assert_eq!(entries, vec![SkillsEntry::Bare("But this is".into())]);
    }

    #[test]
    fn unrecognized_lines_are_dropped() {
        let entries = parse_section("SKILLS\njust prose\n- kept");
        assert_eq!(entries, vec![SkillsEntry::Bare("kept".into())]);
    }

    #[test]
    fn header_only_section_is_empty() {
        assert!(parse_section("SKILLS").is_empty());
        assert!(parse_section("SKILLS\n\n  \n").is_empty());
    }
}
