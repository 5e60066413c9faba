//! Event-stream model of an SVG document.

use std::borrow::Cow;

use quick_xml::escape::{partial_escape, unescape};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::Result;
use crate::error::Error;
use crate::fonts::{FontPolicy, FontRecord};

/// Tag of the placeholder element replaced by [`crate::splice`].
pub const MARKER_TAG: &str = "embeddedFont";

/// Font data to inline into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedFont {
    pub family: String,
    /// File extension of the font, e.g. `ttf`
    pub extension: String,
    pub base64: String,
}

/// A parsed SVG, kept as an owned event stream.
///
/// Keeping events rather than a tree preserves declarations, comments and
/// text exactly as exported.
#[derive(Debug, Clone)]
pub struct VectorDocument {
    events: Vec<Event<'static>>,
}

/// Where the top-level `<defs>` of the root element sits in the stream.
enum DefsLocation {
    /// Index of the `</defs>` closing the first top-level `<defs>`
    BeforeEnd(usize),
    /// Index of a self-closing `<defs/>`
    SelfClosing(usize),
    /// No top-level defs; index right after the root start tag
    Missing(usize),
}

impl VectorDocument {
    /// Parse `text`, rewriting every `font-family` attribute through `record`.
    pub fn parse(text: &str, policy: &FontPolicy, record: &mut FontRecord) -> Result<Self> {
        let mut reader = Reader::from_str(text);
        let mut events = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Eof => break,
                Event::Start(e) => {
                    events.push(Event::Start(rewrite_element(&e, policy, record)?));
                }
                Event::Empty(e) => {
                    events.push(Event::Empty(rewrite_element(&e, policy, record)?));
                }
                other => events.push(other.into_owned()),
            }
        }

        Ok(Self { events })
    }

    /// Insert a `<style>` holding a marker element for `font`.
    ///
    /// The style goes at the end of the root's first `<defs>`, which is
    /// created as the root's first child when missing.
    pub fn embed_font(&mut self, font: &EmbeddedFont) -> Result<()> {
        let root = self.root_index()?;
        let style = style_events(font);

        match self.find_defs(root) {
            DefsLocation::BeforeEnd(end) => {
                self.events.splice(end..end, style);
            }
            DefsLocation::SelfClosing(idx) => {
                let mut replacement = vec![Event::Start(BytesStart::new("defs"))];
                replacement.extend(style);
                replacement.push(Event::End(BytesEnd::new("defs")));
                self.events.splice(idx..=idx, replacement);
            }
            DefsLocation::Missing(at) => {
                let mut inserted = vec![Event::Start(BytesStart::new("defs"))];
                inserted.extend(style);
                inserted.push(Event::End(BytesEnd::new("defs")));
                self.events.splice(at..at, inserted);
            }
        }

        Ok(())
    }

    /// Serialize the event stream back to markup.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        for event in &self.events {
            writer.write_event(event.clone())?;
        }
        Ok(String::from_utf8(writer.into_inner())?)
    }

    /// Index of the root element's start tag.
    ///
    /// A self-closing root is expanded so children can be inserted.
    fn root_index(&mut self) -> Result<usize> {
        let idx = self
            .events
            .iter()
            .position(|e| matches!(e, Event::Start(_) | Event::Empty(_)))
            .ok_or(Error::NoRootElement)?;

        if let Event::Empty(start) = &self.events[idx] {
            let start = start.clone();
            let end = BytesEnd::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
            self.events
                .splice(idx..=idx, [Event::Start(start), Event::End(end)]);
        }

        Ok(idx)
    }

    fn find_defs(&self, root: usize) -> DefsLocation {
        let mut depth = 0usize;
        for (idx, event) in self.events.iter().enumerate().skip(root + 1) {
            match event {
                Event::Start(e) => {
                    if depth == 0 && is_defs(e) {
                        return DefsLocation::BeforeEnd(self.matching_end(idx));
                    }
                    depth += 1;
                }
                Event::Empty(e) if depth == 0 && is_defs(e) => {
                    return DefsLocation::SelfClosing(idx);
                }
                Event::End(_) => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
        DefsLocation::Missing(root + 1)
    }

    /// Index of the end tag closing the start tag at `start`.
    fn matching_end(&self, start: usize) -> usize {
        let mut depth = 0usize;
        for (idx, event) in self.events.iter().enumerate().skip(start + 1) {
            match event {
                Event::Start(_) => depth += 1,
                Event::End(_) if depth == 0 => return idx,
                Event::End(_) => depth -= 1,
                _ => {}
            }
        }
        self.events.len()
    }
}

fn is_defs(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == b"defs"
}

fn style_events(font: &EmbeddedFont) -> Vec<Event<'static>> {
    let style = BytesStart::new("style").with_attributes([("type", "text/css")]);
    let marker = BytesStart::new(MARKER_TAG).with_attributes([
        ("font-family", font.family.as_str()),
        ("font-type", font.extension.as_str()),
        ("font-base64", font.base64.as_str()),
    ]);
    vec![
        Event::Start(style),
        Event::Empty(marker),
        Event::End(BytesEnd::new("style")),
    ]
}

/// Copy an element, passing `font-family` values through `record`.
///
/// Elements without a `font-family` attribute are kept byte for byte.
/// Rebuilt elements always use `"` delimiters, so every value is made safe
/// for them.
fn rewrite_element(
    e: &BytesStart<'_>,
    policy: &FontPolicy,
    record: &mut FontRecord,
) -> Result<BytesStart<'static>> {
    let has_font_family = e
        .attributes()
        .flatten()
        .any(|attr| attr.key.as_ref() == b"font-family");
    if !has_font_family {
        return Ok(e.clone().into_owned());
    }

    let mut rebuilt = BytesStart::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"font-family" {
            let raw = std::str::from_utf8(&attr.value)?;
            let value = record.rewrite_font_family(&unescape(raw)?, policy);
            let partial = partial_escape(&value);
            let escaped = escape_double_quotes(&partial);
            rebuilt.push_attribute((b"font-family".as_slice(), escaped.as_bytes()));
        } else {
            let raw = std::str::from_utf8(&attr.value)?;
            let escaped = escape_double_quotes(raw);
            rebuilt.push_attribute((attr.key.as_ref(), escaped.as_bytes()));
        }
    }
    Ok(rebuilt)
}

/// Replace `"` with `&quot;` in an already escaped attribute value.
fn escape_double_quotes(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "&quot;"))
    } else {
        Cow::Borrowed(value)
    }
}
