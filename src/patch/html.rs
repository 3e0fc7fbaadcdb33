use regex::Regex;

use crate::error::Result;
use crate::models::ResumeRecord;
use crate::parse::compile;

/// Heading whose class list contains "name"; the first one holds the
/// candidate's display name.
const NAME_H1_PATTERN: &str = r#"(?s)(<h1\b[^>]*\bclass\s*=\s*"[^"]*\bname\b[^"]*"[^>]*>).*?(</h1>)"#;

/// Card whose class list contains "summary-card"; its first paragraph
/// holds the professional summary.
const SUMMARY_CARD_PATTERN: &str = r#"(?s)<div\b[^>]*\bclass\s*=\s*"[^"]*\bsummary-card\b[^"]*"[^>]*>"#;

const PARAGRAPH_PATTERN: &str = r"(?s)<p\b[^>]*>(.*?)</p>";

/// Optional bold lead-in at the start of the summary paragraph.
const STRONG_LEAD_PATTERN: &str = r"(?s)^\s*<strong\b[^>]*>(.*?)</strong>";

// Contact patterns mirror the extraction side so that a previously
// patched value still matches on the next run.
const PHONE_PATTERN: &str = r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}";
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Apply a record's fields to a resume HTML document.
///
/// Empty or absent record fields leave their region untouched, so a
/// sparse record never blanks out existing content. Patching is
/// idempotent: applying the same record twice yields the same document.
pub fn patch_resume_html(record: &ResumeRecord, html: &str) -> Result<String> {
    let mut out = html.to_string();

    if !record.name.is_empty() {
        out = replace_name(&out, &record.name)?;
    }
    if let Some(phone) = &record.contact.phone {
        out = replace_text_spans(&out, &compile(PHONE_PATTERN)?, phone);
    }
    if let Some(email) = &record.contact.email {
        out = replace_text_spans(&out, &compile(EMAIL_PATTERN)?, email);
    }
    if !record.summary.is_empty() {
        out = replace_summary(&out, &record.summary)?;
    }

    Ok(out)
}

/// Replace the contents of the first name heading.
fn replace_name(html: &str, name: &str) -> Result<String> {
    let re = compile(NAME_H1_PATTERN)?;
    let escaped = escape_text(name);
    // Closure replacement so `$` in the name is never treated as a
    // capture-group reference.
    let replaced = re.replace(html, |caps: &regex::Captures| {
        format!(
            "{}{escaped}{}",
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        )
    });
    Ok(replaced.into_owned())
}

/// Replace every text node matching `pattern` with `replacement`.
///
/// Text nodes are the spans between `>` and `<`. A matching span is
/// replaced whole, whitespace included, which keeps repeated runs stable
/// when the replacement itself matches the pattern.
fn replace_text_spans(html: &str, pattern: &Regex, replacement: &str) -> String {
    let escaped = escape_text(replacement);
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    loop {
        let Some(lt) = rest.find('<') else {
            out.push_str(patch_span(rest, pattern, &escaped));
            return out;
        };
        out.push_str(patch_span(&rest[..lt], pattern, &escaped));

        let Some(gt) = rest[lt..].find('>') else {
            // Unterminated tag; emit the tail untouched.
            out.push_str(&rest[lt..]);
            return out;
        };
        out.push_str(&rest[lt..=lt + gt]);
        rest = &rest[lt + gt + 1..];
    }
}

fn patch_span<'a>(span: &'a str, pattern: &Regex, replacement: &'a str) -> &'a str {
    if pattern.is_match(span) {
        replacement
    } else {
        span
    }
}

/// Replace the first paragraph inside the summary card.
///
/// A bold lead-in (e.g. years-of-experience tagline) at the start of the
/// paragraph is preserved and the new summary is appended after it. If the
/// document has no summary card or no paragraph in it, the document is
/// returned unchanged.
fn replace_summary(html: &str, summary: &str) -> Result<String> {
    let Some(card) = compile(SUMMARY_CARD_PATTERN)?.find(html) else {
        return Ok(html.to_string());
    };
    let after_card = &html[card.end()..];

    let Some(caps) = compile(PARAGRAPH_PATTERN)?.captures(after_card) else {
        return Ok(html.to_string());
    };
    let Some(inner) = caps.get(1) else {
        return Ok(html.to_string());
    };

    let escaped = escape_text(summary);
    let new_inner = match compile(STRONG_LEAD_PATTERN)?.captures(inner.as_str()) {
        Some(lead) => format!(
            "<strong>{}</strong> {escaped}",
            lead.get(1).map_or("", |m| m.as_str())
        ),
        None => escaped,
    };

    let start = card.end() + inner.start();
    let end = card.end() + inner.end();
    Ok(format!("{}{new_inner}{}", &html[..start], &html[end..]))
}

/// Minimal escaping for text inserted into element content.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
