//! Readers for the supported element types and their delegation chains

use log::debug;

use super::context::ReadContext;
use super::cursor::{ElementCursor, UnknownElement, XmlReader};
use super::dispatch::{read_element, read_listed_property, store, PropertyReader};
use super::errors::{ReadError, Result, WriteError};
use super::writer::XmlWriter;
use crate::models::{BarlineType, ElementType, Item, OrdinalEnum};
use crate::property::{Pid, PropertyTarget};
use crate::settings::ReadSettings;

/// Properties every engraving item carries
pub struct EngravingItemRw;

impl PropertyReader for EngravingItemRw {
    fn name(&self) -> &'static str {
        "EngravingItem"
    }

    fn pids(&self) -> &'static [Pid] {
        &[
            Pid::Color,
            Pid::Visible,
            Pid::Offset,
            Pid::Placement,
            Pid::Autoplace,
            Pid::MinDistance,
        ]
    }
}

/// Text content and font of text-like items
pub struct TextBaseRw;

impl PropertyReader for TextBaseRw {
    fn name(&self) -> &'static str {
        "TextBase"
    }

    fn pids(&self) -> &'static [Pid] {
        &[Pid::Text, Pid::FontFace, Pid::FontSize, Pid::FontBold, Pid::Align]
    }
}

pub struct DynamicRw;

impl PropertyReader for DynamicRw {
    fn name(&self) -> &'static str {
        "Dynamic"
    }

    fn pids(&self) -> &'static [Pid] {
        &[Pid::DynamicType, Pid::Velocity, Pid::VeloChangeType]
    }
}

/// Barline subtype and span.
///
/// The span is one element carrying the offsets as attributes:
/// `<span from="2" to="-2">1</span>`. The subtype also accepts the ASCII
/// spellings `|`, `||`, `|:`, `:|`, `|||` and `:|:`.
pub struct BarLineRw;

impl BarLineRw {
    fn read_subtype(
        &self,
        cursor: &mut dyn ElementCursor,
        ctx: &mut ReadContext,
        target: &mut dyn PropertyTarget,
    ) -> Result<()> {
        let text = cursor.read_text()?;
        let trimmed = text.trim();
        let subtype = BarlineType::from_xml(trimmed)
            .or_else(|| BarlineType::parse(trimmed))
            .or_else(|| {
                if ctx.settings().accept_numeric_enums {
                    trimmed.parse().ok().and_then(BarlineType::from_ordinal)
                } else {
                    None
                }
            })
            .ok_or_else(|| ReadError::InvalidValue {
                element: cursor.name().to_string(),
                value: text.clone(),
                reason: "not a barline type".to_string(),
            })?;
        store(Pid::BarlineType, subtype.into(), cursor, target)
    }

    fn read_span(
        &self,
        cursor: &mut dyn ElementCursor,
        target: &mut dyn PropertyTarget,
    ) -> Result<()> {
        for (attribute, pid) in [("from", Pid::BarlineSpanFrom), ("to", Pid::BarlineSpanTo)] {
            if let Some(raw) = cursor.attribute(attribute) {
                let offset = raw.trim().parse::<i32>().map_err(|e| ReadError::InvalidValue {
                    element: cursor.name().to_string(),
                    value: raw.to_string(),
                    reason: format!("attribute '{}': {}", attribute, e),
                })?;
                store(pid, offset.into(), cursor, target)?;
            }
        }

        let text = cursor.read_text()?;
        let span = match text.trim() {
            "1" | "true" => true,
            "0" | "false" => false,
            _ => {
                return Err(ReadError::InvalidValue {
                    element: cursor.name().to_string(),
                    value: text,
                    reason: "expected 0 or 1".to_string(),
                })
            }
        };
        store(Pid::BarlineSpan, span.into(), cursor, target)
    }
}

impl PropertyReader for BarLineRw {
    fn name(&self) -> &'static str {
        "BarLine"
    }

    fn pids(&self) -> &'static [Pid] {
        &[
            Pid::BarlineType,
            Pid::BarlineSpan,
            Pid::BarlineSpanFrom,
            Pid::BarlineSpanTo,
        ]
    }

    fn read_property(
        &self,
        cursor: &mut dyn ElementCursor,
        ctx: &mut ReadContext,
        target: &mut dyn PropertyTarget,
    ) -> Result<bool> {
        match cursor.name() {
            "subtype" if target.recognizes(Pid::BarlineType) => {
                self.read_subtype(cursor, ctx, target)?;
                Ok(true)
            }
            "span" if target.recognizes(Pid::BarlineSpan) => {
                self.read_span(cursor, target)?;
                Ok(true)
            }
            // standalone <spanFromOffset>/<spanToOffset>
            _ => read_listed_property(self.pids(), cursor, ctx, target),
        }
    }

    fn write_properties(
        &self,
        target: &dyn PropertyTarget,
        writer: &mut XmlWriter,
    ) -> std::result::Result<(), WriteError> {
        writer.write_property(target, Pid::BarlineType)?;

        let is_default = |pid: Pid| writer.is_default(target, pid);
        if is_default(Pid::BarlineSpan)
            && is_default(Pid::BarlineSpanFrom)
            && is_default(Pid::BarlineSpanTo)
        {
            return Ok(());
        }

        let mut attributes = Vec::new();
        for (attribute, pid) in [("from", Pid::BarlineSpanFrom), ("to", Pid::BarlineSpanTo)] {
            if !writer.is_default(target, pid) {
                if let Some(offset) = target.property(pid).as_int() {
                    attributes.push((attribute, offset.to_string()));
                }
            }
        }
        let span = target.property(Pid::BarlineSpan).as_bool().copied().unwrap_or(false);
        writer.text_element("span", &attributes, if span { "1" } else { "0" });
        Ok(())
    }
}

/// Fingering reads as plain text with the item properties underneath
pub static FINGERING_CHAIN: &[&dyn PropertyReader] = &[&TextBaseRw, &EngravingItemRw];

pub static DYNAMIC_CHAIN: &[&dyn PropertyReader] = &[&DynamicRw, &TextBaseRw, &EngravingItemRw];

pub static BARLINE_CHAIN: &[&dyn PropertyReader] = &[&BarLineRw, &EngravingItemRw];

/// Readers for an element type, most specific first
pub fn reader_chain(element_type: ElementType) -> &'static [&'static dyn PropertyReader] {
    match element_type {
        ElementType::Fingering => FINGERING_CHAIN,
        ElementType::Dynamic => DYNAMIC_CHAIN,
        ElementType::BarLine => BARLINE_CHAIN,
    }
}

/// Result of reading one element from a document
#[derive(Debug, Clone)]
pub struct ReadReport {
    pub item: Item,
    /// Number of properties applied
    pub recognized: usize,
    /// Child elements no reader recognized, in document order
    pub unknown: Vec<UnknownElement>,
}

/// Read the element the cursor is positioned on into a new `Item`
pub fn read_item(cursor: &mut dyn ElementCursor, ctx: &mut ReadContext) -> Result<Item> {
    let element_type = ElementType::from_xml(cursor.name())
        .ok_or_else(|| ReadError::UnsupportedElement(cursor.name().to_string()))?;
    debug!("reading <{}> at line {}", element_type.xml_name(), cursor.line());

    let mut item = Item::new(element_type);
    read_element(reader_chain(element_type), cursor, ctx, &mut item)?;
    Ok(item)
}

/// Parse a document whose root is a single supported element
pub fn read_item_from_str(xml: &str, settings: &ReadSettings) -> Result<ReadReport> {
    let mut cursor = XmlReader::new(xml);
    if !cursor.read_next_start_element()? {
        return Err(ReadError::MissingElement("document root".to_string()));
    }

    let mut ctx = ReadContext::new(settings.clone());
    let item = read_item(&mut cursor, &mut ctx)?;

    Ok(ReadReport {
        item,
        recognized: ctx.recognized_count(),
        unknown: cursor.unknown_elements().to_vec(),
    })
}

/// Write an element with its non-default properties in chain order
pub fn write_item(
    item: &dyn PropertyTarget,
    element_type: ElementType,
) -> std::result::Result<String, WriteError> {
    let mut writer = XmlWriter::new();
    writer.start_element(element_type.xml_name(), &[]);
    for reader in reader_chain(element_type) {
        reader.write_properties(item, &mut writer)?;
    }
    writer.end_element()?;
    writer.finish()
}

impl Item {
    /// Shorthand for [`write_item`] with the item's own type
    pub fn to_xml(&self) -> std::result::Result<String, WriteError> {
        write_item(self, self.element_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DynamicType;
    use crate::property::PropertyValue;
    use crate::rw::writer::non_default_value;
    use crate::settings::UnknownElementPolicy;

    #[test]
    fn test_read_dynamic() {
        let xml = r#"
            <Dynamic>
              <subtype>ff</subtype>
              <velocity>112</velocity>
              <placement>below</placement>
              <text>ff</text>
            </Dynamic>"#;
        let report = read_item_from_str(xml, &ReadSettings::default()).unwrap();
        assert_eq!(report.recognized, 4);
        assert!(report.unknown.is_empty());

        let item = &report.item;
        assert_eq!(item.element_type(), ElementType::Dynamic);
        assert_eq!(item.property(Pid::DynamicType).as_dynamic_type(), Some(&DynamicType::Ff));
        assert_eq!(item.property(Pid::Velocity), PropertyValue::Int(112));
    }

    #[test]
    fn test_barline_span_and_ascii_subtype() {
        let xml = r#"<BarLine><subtype>:|</subtype><span from="2" to="-2">1</span></BarLine>"#;
        let item = read_item_from_str(xml, &ReadSettings::default()).unwrap().item;
        assert_eq!(
            item.property(Pid::BarlineType).as_barline_type(),
            Some(&BarlineType::EndRepeat)
        );
        assert_eq!(item.property(Pid::BarlineSpan), PropertyValue::Bool(true));
        assert_eq!(item.property(Pid::BarlineSpanFrom), PropertyValue::Int(2));
        assert_eq!(item.property(Pid::BarlineSpanTo), PropertyValue::Int(-2));
    }

    #[test]
    fn test_unsupported_root() {
        assert_eq!(
            read_item_from_str("<Note/>", &ReadSettings::default()).unwrap_err(),
            ReadError::UnsupportedElement("Note".to_string())
        );
        assert!(matches!(
            read_item_from_str("", &ReadSettings::default()),
            Err(ReadError::MissingElement(_))
        ));
    }

    #[test]
    fn test_unknown_elements_reported_with_lines() {
        let xml = "<Fingering>\n<text>3</text>\n<subtype>mf</subtype>\n</Fingering>";
        let report = read_item_from_str(xml, &ReadSettings::default()).unwrap();
        assert_eq!(report.recognized, 1);
        assert_eq!(report.unknown, vec![UnknownElement { name: "subtype".to_string(), line: 3 }]);

        let strict = ReadSettings {
            unknown_elements: UnknownElementPolicy::Strict,
            ..ReadSettings::default()
        };
        assert!(matches!(
            read_item_from_str(xml, &strict),
            Err(ReadError::UnknownElement { line: 3, .. })
        ));
    }

    #[test]
    fn test_default_values_are_not_written() {
        let mut item = Item::new(ElementType::BarLine);
        assert_eq!(item.to_xml().unwrap(), "<BarLine>\n</BarLine>\n");

        item.set_property(Pid::BarlineSpanTo, (-1_i32).into());
        let xml = item.to_xml().unwrap();
        assert!(xml.contains(r#"<span to="-1">0</span>"#), "{}", xml);
        assert!(non_default_value(&item, Pid::BarlineSpanFrom).is_none());
        assert_eq!(non_default_value(&item, Pid::BarlineSpanTo), Some(PropertyValue::Int(-1)));
    }
}
