//! Forward-only element cursor
//!
//! Readers never see raw XML events. They walk a document through
//! [`ElementCursor`], which positions on one start element at a time:
//!
//! ```text
//! <Dynamic>                 read_next_start_element() -> true,  name() == "Dynamic"
//!   <subtype>mf</subtype>   read_next_start_element() -> true,  read_text() == "mf"
//!   <foo><bar/></foo>       read_next_start_element() -> true,  unknown() skips the subtree
//! </Dynamic>                read_next_start_element() -> false
//! ```
//!
//! After `read_next_start_element()` returns `true` the caller must consume
//! the element exactly once: `read_text()`, `skip_current()`, `unknown()`,
//! or a nested `read_next_start_element()` loop that runs until it returns
//! `false`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::errors::{ReadError, Result};

/// An element no reader recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownElement {
    pub name: String,
    /// 1-based line of the element's start tag
    pub line: usize,
}

/// The capabilities a property reader needs from a document
pub trait ElementCursor {
    /// Advance to the next child start element of the current parent.
    /// Returns `false` once the parent's end tag is consumed.
    fn read_next_start_element(&mut self) -> Result<bool>;

    /// Name of the element the cursor is positioned on
    fn name(&self) -> &str;

    /// Attribute of the current element
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Line of the current element, 0 when unknown
    fn line(&self) -> usize;

    /// Read the text content of the current element and consume its end tag
    fn read_text(&mut self) -> Result<String>;

    /// Consume the current element and its subtree without looking at it
    fn skip_current(&mut self) -> Result<()>;

    /// Record the current element as unrecognized and skip it
    fn unknown(&mut self) -> Result<()>;

    /// Everything recorded through `unknown()` so far
    fn unknown_elements(&self) -> &[UnknownElement];
}

#[derive(Debug, Default)]
struct CurrentElement {
    name: String,
    attributes: Vec<(String, String)>,
    line: usize,
}

/// `ElementCursor` over an in-memory XML document
pub struct XmlReader<'a> {
    source: &'a str,
    reader: Reader<&'a [u8]>,
    current: CurrentElement,
    open: Vec<String>,
    unknown: Vec<UnknownElement>,
    /// Byte offset where the last event started
    event_start: usize,
    /// Newlines counted up to `counted`, for incremental line numbers
    line: usize,
    counted: usize,
}

impl<'a> XmlReader<'a> {
    pub fn new(source: &'a str) -> Self {
        // Text is kept verbatim; typed values trim when they parse
        let mut reader = Reader::from_str(source);
        reader.expand_empty_elements(true);

        Self {
            source,
            reader,
            current: CurrentElement::default(),
            open: Vec::new(),
            unknown: Vec::new(),
            event_start: 0,
            line: 1,
            counted: 0,
        }
    }

    fn next_event(&mut self) -> Result<Event<'a>> {
        let start = self.reader.buffer_position();
        match self.reader.read_event() {
            Ok(event) => {
                self.event_start = start;
                Ok(event)
            }
            Err(e) => {
                let line = self.line_at(self.reader.buffer_position());
                Err(ReadError::Xml(format!("line {}: {}", line, e)))
            }
        }
    }

    /// 1-based line of byte offset `pos`. Offsets only grow while reading,
    /// so only the bytes since the previous call are scanned.
    fn line_at(&mut self, pos: usize) -> usize {
        let end = pos.min(self.source.len());
        if end > self.counted {
            let bytes = &self.source.as_bytes()[self.counted..end];
            self.line += bytes.iter().filter(|b| **b == b'\n').count();
            self.counted = end;
        }
        self.line
    }

    fn eof_error(&self) -> ReadError {
        ReadError::UnexpectedEof(self.open.last().cloned().unwrap_or_default())
    }

    fn open_element(&mut self, start: &BytesStart<'_>) -> Result<()> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| ReadError::Xml(format!("<{}>: {}", name, e)))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| ReadError::Xml(format!("<{}>: {}", name, e)))?
                .into_owned();
            attributes.push((key, value));
        }

        let line = self.line_at(self.event_start);
        self.open.push(name.clone());
        self.current = CurrentElement {
            name,
            attributes,
            line,
        };
        Ok(())
    }
}

impl ElementCursor for XmlReader<'_> {
    fn read_next_start_element(&mut self) -> Result<bool> {
        loop {
            match self.next_event()? {
                Event::Start(ref e) => {
                    self.open_element(e)?;
                    return Ok(true);
                }
                Event::End(_) => {
                    self.open.pop();
                    return Ok(false);
                }
                Event::Eof => {
                    if self.open.is_empty() {
                        return Ok(false);
                    }
                    return Err(self.eof_error());
                }
                _ => {}
            }
        }
    }

    fn name(&self) -> &str {
        &self.current.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.current
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn line(&self) -> usize {
        self.current.line
    }

    fn read_text(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let unescaped = t.unescape().map_err(|e| ReadError::Xml(e.to_string()))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::End(_) => {
                    self.open.pop();
                    return Ok(text);
                }
                Event::Start(ref e) => {
                    return Err(ReadError::InvalidValue {
                        element: self.current.name.clone(),
                        value: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                        reason: "expected text, found a child element".to_string(),
                    });
                }
                Event::Eof => return Err(self.eof_error()),
                _ => {}
            }
        }
    }

    fn skip_current(&mut self) -> Result<()> {
        let Some(parent_depth) = self.open.len().checked_sub(1) else {
            return Ok(());
        };
        loop {
            match self.next_event()? {
                Event::Start(ref e) => {
                    self.open
                        .push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
                Event::End(_) => {
                    self.open.pop();
                    if self.open.len() == parent_depth {
                        return Ok(());
                    }
                }
                Event::Eof => return Err(self.eof_error()),
                _ => {}
            }
        }
    }

    fn unknown(&mut self) -> Result<()> {
        self.unknown.push(UnknownElement {
            name: self.current.name.clone(),
            line: self.current.line,
        });
        self.skip_current()
    }

    fn unknown_elements(&self) -> &[UnknownElement] {
        &self.unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_children() {
        let xml = "<Dynamic><subtype>mf</subtype><velocity>80</velocity></Dynamic>";
        let mut cursor = XmlReader::new(xml);
        assert!(cursor.read_next_start_element().unwrap());
        assert_eq!(cursor.name(), "Dynamic");

        assert!(cursor.read_next_start_element().unwrap());
        assert_eq!(cursor.name(), "subtype");
        assert_eq!(cursor.read_text().unwrap(), "mf");

        assert!(cursor.read_next_start_element().unwrap());
        assert_eq!(cursor.name(), "velocity");
        assert_eq!(cursor.read_text().unwrap(), "80");

        assert!(!cursor.read_next_start_element().unwrap());
        assert!(!cursor.read_next_start_element().unwrap());
    }

    #[test]
    fn test_attributes_and_empty_elements() {
        let mut cursor = XmlReader::new(r#"<Item><offset x="1.5" y="-2"/></Item>"#);
        cursor.read_next_start_element().unwrap();
        assert!(cursor.read_next_start_element().unwrap());
        assert_eq!(cursor.attribute("x"), Some("1.5"));
        assert_eq!(cursor.attribute("y"), Some("-2"));
        assert_eq!(cursor.attribute("z"), None);
        cursor.skip_current().unwrap();
        assert!(!cursor.read_next_start_element().unwrap());
    }

    #[test]
    fn test_unknown_skips_subtree_and_records_line() {
        let xml = concat!(
            "<BarLine>\n",
            "  <mystery>\n",
            "    <deep>1</deep>\n",
            "  </mystery>\n",
            "  <span>1</span>\n",
            "</BarLine>"
        );
        let mut cursor = XmlReader::new(xml);
        cursor.read_next_start_element().unwrap();

        assert!(cursor.read_next_start_element().unwrap());
        cursor.unknown().unwrap();

        assert!(cursor.read_next_start_element().unwrap());
        assert_eq!(cursor.name(), "span");
        assert_eq!(cursor.read_text().unwrap(), "1");
        assert!(!cursor.read_next_start_element().unwrap());

        assert_eq!(
            cursor.unknown_elements(),
            &[UnknownElement { name: "mystery".to_string(), line: 2 }]
        );
    }

    #[test]
    fn test_text_is_unescaped() {
        let mut cursor = XmlReader::new("<t>a &amp; b &lt;c&gt;</t>");
        cursor.read_next_start_element().unwrap();
        assert_eq!(cursor.read_text().unwrap(), "a & b <c>");
    }

    #[test]
    fn test_truncated_document() {
        let mut cursor = XmlReader::new("<Dynamic><subtype>mf</subtype>");
        cursor.read_next_start_element().unwrap();
        cursor.read_next_start_element().unwrap();
        cursor.read_text().unwrap();
        assert!(cursor.read_next_start_element().is_err());
    }

    #[test]
    fn test_text_with_child_is_rejected() {
        let mut cursor = XmlReader::new("<text>a<b/></text>");
        cursor.read_next_start_element().unwrap();
        assert!(matches!(cursor.read_text(), Err(ReadError::InvalidValue { .. })));
    }

    #[test]
    fn test_text_whitespace_is_preserved() {
        let xml = "<Fingering>\n  <text> 3 </text>\n  <font>  </font>\n</Fingering>";
        let mut cursor = XmlReader::new(xml);
        cursor.read_next_start_element().unwrap();
        assert!(cursor.read_next_start_element().unwrap());
        assert_eq!(cursor.read_text().unwrap(), " 3 ");
        assert!(cursor.read_next_start_element().unwrap());
        assert_eq!(cursor.read_text().unwrap(), "  ");
        assert!(!cursor.read_next_start_element().unwrap());
    }

    #[test]
    fn test_line_is_where_start_tag_begins() {
        let xml = concat!(
            "<BarLine>\n",
            "  <mystery\n",
            "    kind=\"a\"\n",
            "    other=\"b\">x</mystery>\n",
            "  <later/>\n",
            "</BarLine>"
        );
        let mut cursor = XmlReader::new(xml);
        cursor.read_next_start_element().unwrap();
        assert_eq!(cursor.line(), 1);

        assert!(cursor.read_next_start_element().unwrap());
        assert_eq!(cursor.line(), 2);
        cursor.unknown().unwrap();

        assert!(cursor.read_next_start_element().unwrap());
        assert_eq!(cursor.name(), "later");
        assert_eq!(cursor.line(), 5);
        cursor.skip_current().unwrap();
        assert!(!cursor.read_next_start_element().unwrap());
    }
}
