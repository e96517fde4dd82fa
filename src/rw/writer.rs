//! XML writer for element properties

use super::errors::WriteError;
use super::value_codec::encode_value;
use crate::property::{Pid, PropertyTarget, PropertyValue};

/// Value of `pid` on `target` as it would be written: `None` when the
/// target does not carry the property or holds its default
pub fn non_default_value(target: &dyn PropertyTarget, pid: Pid) -> Option<PropertyValue> {
    let value = target.property(pid);
    let default = pid.default_value();
    if !value.is_valid() || (value.property_type() == default.property_type() && value == default) {
        None
    } else {
        Some(value)
    }
}

/// Indented XML writer over a `String` buffer
#[derive(Debug, Default)]
pub struct XmlWriter {
    buffer: String,
    open: Vec<String>,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&mut self) {
        for _ in 0..self.open.len() {
            self.buffer.push_str("  ");
        }
    }

    fn open_tag(&mut self, name: &str, attributes: &[(&str, String)]) {
        self.buffer.push('<');
        self.buffer.push_str(name);
        for (key, value) in attributes {
            self.buffer.push_str(&format!(" {}=\"{}\"", key, xml_escape(value)));
        }
    }

    pub fn start_element(&mut self, name: &str, attributes: &[(&str, String)]) {
        self.indent();
        self.open_tag(name, attributes);
        self.buffer.push_str(">\n");
        self.open.push(name.to_string());
    }

    pub fn end_element(&mut self) -> Result<(), WriteError> {
        let name = self
            .open
            .pop()
            .ok_or_else(|| WriteError::Unbalanced(String::new()))?;
        self.indent();
        self.buffer.push_str(&format!("</{}>\n", name));
        Ok(())
    }

    /// `<name attrs>text</name>` on one line
    pub fn text_element(&mut self, name: &str, attributes: &[(&str, String)], text: &str) {
        self.indent();
        self.open_tag(name, attributes);
        self.buffer.push_str(&format!(">{}</{}>\n", xml_escape(text), name));
    }

    pub fn empty_element(&mut self, name: &str, attributes: &[(&str, String)]) {
        self.indent();
        self.open_tag(name, attributes);
        self.buffer.push_str("/>\n");
    }

    /// Write `value` as element `name` in its document form
    pub fn write_value(&mut self, name: &str, value: &PropertyValue) -> Result<(), WriteError> {
        let encoded = encode_value(value)?;
        match encoded.text {
            Some(text) => self.text_element(name, &encoded.attributes, &text),
            None => self.empty_element(name, &encoded.attributes),
        }
        Ok(())
    }

    /// Write `pid` unless `target` holds its default
    pub fn write_property(
        &mut self,
        target: &dyn PropertyTarget,
        pid: Pid,
    ) -> Result<(), WriteError> {
        match non_default_value(target, pid) {
            Some(value) => self.write_value(pid.xml_name(), &value),
            None => Ok(()),
        }
    }

    pub fn is_default(&self, target: &dyn PropertyTarget, pid: Pid) -> bool {
        non_default_value(target, pid).is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// The finished document; fails while elements are still open
    pub fn finish(self) -> Result<String, WriteError> {
        match self.open.last() {
            Some(name) => Err(WriteError::Unbalanced(name.clone())),
            None => Ok(self.buffer),
        }
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
