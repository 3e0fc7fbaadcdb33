use std::io::{Cursor, Read};

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::convert::DocumentConverter;
use crate::error::{Result, SyncError};

/// DOCX to HTML converter.
///
/// A DOCX file is a ZIP archive; the main content lives in
/// `word/document.xml` as WordprocessingML. Paragraphs become `<p>`,
/// `HeadingN`-styled paragraphs become `<h1>`..`<h6>`, numbered/bulleted
/// paragraphs become `<li>`.
pub struct DocxConverter;

impl Default for DocxConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxConverter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut file = archive
            .by_name("word/document.xml")
            .map_err(|e| SyncError::Convert {
                detail: format!("cannot find word/document.xml: {e}"),
            })?;
        let mut xml = String::new();
        file.read_to_string(&mut xml)?;
        Ok(xml)
    }

    fn document_xml_to_html(xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);

        let mut html = String::new();
        let mut paragraph = String::new();
        let mut block_tag = "p";
        let mut in_paragraph = false;
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:p" => {
                        in_paragraph = true;
                        paragraph.clear();
                        block_tag = "p";
                    }
                    b"w:t" => in_text = true,
                    b"w:numPr" if in_paragraph => block_tag = "li",
                    b"w:br" if in_paragraph => paragraph.push_str("<br />"),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:br" if in_paragraph => paragraph.push_str("<br />"),
                    b"w:numPr" if in_paragraph => block_tag = "li",
                    b"w:pStyle" if in_paragraph => {
                        if let Some(tag) = heading_tag(&e)? {
                            block_tag = tag;
                        }
                    }
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:p" => {
                        in_paragraph = false;
                        if !paragraph.trim().is_empty() {
                            html.push('<');
                            html.push_str(block_tag);
                            html.push('>');
                            html.push_str(&paragraph);
                            html.push_str("</");
                            html.push_str(block_tag);
                            html.push('>');
                        }
                    }
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    if in_paragraph && in_text {
                        let text = e.unescape().map_err(|err| SyncError::Convert {
                            detail: format!("malformed text run: {err}"),
                        })?;
                        paragraph.push_str(&escape(&text));
                    }
                }
                Ok(Event::Eof) => break,
                Err(err) => {
                    return Err(SyncError::Convert {
                        detail: format!(
                            "XML error at position {}: {err}",
                            reader.buffer_position()
                        ),
                    })
                }
                _ => {}
            }
        }

        Ok(html)
    }
}

impl DocumentConverter for DocxConverter {
    fn format(&self) -> &'static str {
        "docx"
    }

    fn convert(&self, bytes: &[u8]) -> Result<String> {
        let xml = Self::read_document_xml(bytes)?;
        Self::document_xml_to_html(&xml)
    }
}

/// Map a `w:pStyle` value to a heading tag.
fn heading_tag(e: &BytesStart) -> Result<Option<&'static str>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| SyncError::Convert {
            detail: format!("malformed attribute: {err}"),
        })?;
        if attr.key.as_ref() == b"w:val" {
            let val = attr.unescape_value().map_err(|err| SyncError::Convert {
                detail: format!("malformed attribute value: {err}"),
            })?;
            return Ok(match val.as_ref() {
                "Title" | "Heading1" => Some("h1"),
                "Heading2" => Some("h2"),
                "Heading3" => Some("h3"),
                "Heading4" => Some("h4"),
                "Heading5" => Some("h5"),
                "Heading6" => Some("h6"),
                _ => None,
            });
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const WRAP: (&str, &str) = (
        r#"<?xml version="1.0"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
        "</w:body></w:document>",
    );

    fn to_html(body: &str) -> String {
        let xml = format!("{}{body}{}", WRAP.0, WRAP.1);
        DocxConverter::document_xml_to_html(&xml).unwrap()
    }

    /// Build a minimal in-memory .docx containing the given body XML.
    fn docx_bytes(body: &str) -> Vec<u8> {
        let xml = format!("{}{body}{}", WRAP.0, WRAP.1);
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn paragraphs_convert_to_html() {
        let html = to_html(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t>555-123-4567</w:t></w:r></w:p>",
        );
        assert_eq!(html, "<p>Jane Doe</p><p>555-123-4567</p>");
    }

    #[test]
    fn heading_style_maps_to_heading_tag() {
        let html = to_html(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>SUMMARY</w:t></w:r></w:p>"#,
        );
        assert_eq!(html, "<h1>SUMMARY</h1>");
    }

    #[test]
    fn numbered_paragraph_maps_to_list_item() {
        let html = to_html(
            "<w:p><w:pPr><w:numPr><w:ilvl w:val=\"0\"/></w:numPr></w:pPr>\
             <w:r><w:t>Go</w:t></w:r></w:p>",
        );
        assert_eq!(html, "<li>Go</li>");
    }

    #[test]
    fn empty_paragraphs_are_dropped() {
        let html = to_html("<w:p></w:p><w:p><w:r><w:t>kept</w:t></w:r></w:p>");
        assert_eq!(html, "<p>kept</p>");
    }

    #[test]
    fn split_runs_concatenate() {
        let html = to_html("<w:p><w:r><w:t>Jane </w:t></w:r><w:r><w:t>Doe</w:t></w:r></w:p>");
        assert_eq!(html, "<p>Jane Doe</p>");
    }

    #[test]
    fn breaks_become_br() {
        let html = to_html("<w:p><w:r><w:t>one</w:t><w:br/><w:t>two</w:t></w:r></w:p>");
        assert_eq!(html, "<p>one<br />two</p>");
    }

    #[test]
    fn text_is_html_escaped() {
        let html = to_html("<w:p><w:r><w:t>R&amp;D &lt;lab&gt;</w:t></w:r></w:p>");
        assert_eq!(html, "<p>R&amp;D &lt;lab&gt;</p>");
    }

    #[test]
    fn converts_in_memory_docx() {
        let bytes = docx_bytes("<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>");
        let html = DocxConverter::new().convert(&bytes).unwrap();
        assert_eq!(html, "<p>Jane Doe</p>");
    }

    #[test]
    fn garbage_bytes_fail_conversion() {
        let err = DocxConverter::new().convert(b"not a zip archive");
        assert!(err.is_err());
    }

    #[test]
    fn zip_without_document_xml_fails() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = DocxConverter::new().convert(&bytes);
        assert!(err.is_err());
    }
}
