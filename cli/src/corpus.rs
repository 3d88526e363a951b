//! Document-collection parser.
//!
//! A collection is a single XML file of `<DOC id="...">` elements. The text
//! of a document is the character content of its `HEADLINE`, `P` and `TEXT`
//! elements, space-joined in document order; everything else is markup and
//! is skipped.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use anyhow::{bail, Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

fn is_text_element(name: &[u8]) -> bool {
    matches!(name, b"HEADLINE" | b"P" | b"TEXT")
}

/// Parse a collection file into a document id → raw text map.
pub fn parse_collection<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>> {
    let path = path.as_ref();
    let mut reader = Reader::from_file(path)
        .with_context(|| format!("opening collection {}", path.display()))?;
    parse_events(&mut reader)
        .with_context(|| format!("parsing collection {}", path.display()))
}

fn parse_events<R: BufRead>(reader: &mut Reader<R>) -> Result<BTreeMap<String, String>> {
    reader.trim_text(true);

    let mut docs = BTreeMap::new();
    let mut current_id: Option<String> = None;
    let mut text = String::new();
    // P can nest inside TEXT, so track open text elements as a depth.
    let mut capture_depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => match start.name().as_ref() {
                b"DOC" => {
                    let Some(id) = start.try_get_attribute("id")? else {
                        bail!("DOC element without id attribute");
                    };
                    current_id = Some(id.unescape_value()?.into_owned());
                    text.clear();
                    capture_depth = 0;
                }
                name if is_text_element(name) => capture_depth += 1,
                _ => {}
            },
            Event::End(end) => match end.name().as_ref() {
                b"DOC" => {
                    if let Some(id) = current_id.take() {
                        docs.insert(id, text.trim_end().to_owned());
                    }
                }
                name if is_text_element(name) => {
                    capture_depth = capture_depth.saturating_sub(1);
                }
                _ => {}
            },
            Event::Text(content) if current_id.is_some() && capture_depth > 0 => {
                text.push_str(&content.unescape()?);
                text.push(' ');
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(docs)
}
