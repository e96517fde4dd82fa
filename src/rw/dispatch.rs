//! Delegating property dispatch
//!
//! Each element type is read by an ordered chain of [`PropertyReader`]s,
//! most specific first. For every child element the chain is asked in order;
//! the first reader that recognizes the element consumes it. If none does,
//! the element reaches the unknown terminal exactly once:
//!
//! ```text
//! child element ──▶ reader[0] ──no──▶ reader[1] ──no──▶ ... ──no──▶ Unknown
//!                      │yes              │yes
//!                      ▼                 ▼
//!                  Recognized        Recognized
//! ```
//!
//! A reader that answers "no" must leave the cursor where it was.

use log::debug;

use super::context::ReadContext;
use super::cursor::ElementCursor;
use super::errors::{ReadError, Result, WriteError};
use super::value_codec::read_value;
use super::writer::XmlWriter;
use crate::property::{Pid, PropertyTarget, PropertyValue};

/// Terminal state of dispatching one child element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Recognized,
    Unknown,
}

/// Reader for the properties one element type adds to its base types
pub trait PropertyReader: Sync {
    /// Used in log output
    fn name(&self) -> &'static str;

    /// Properties this reader owns, in write order
    fn pids(&self) -> &'static [Pid];

    /// Try to consume the element under the cursor.
    ///
    /// Returns `Ok(false)` without touching the cursor when the element is
    /// not one of this reader's.
    fn read_property(
        &self,
        cursor: &mut dyn ElementCursor,
        ctx: &mut ReadContext,
        target: &mut dyn PropertyTarget,
    ) -> Result<bool> {
        read_listed_property(self.pids(), cursor, ctx, target)
    }

    /// Write this reader's properties that differ from their defaults
    fn write_properties(
        &self,
        target: &dyn PropertyTarget,
        writer: &mut XmlWriter,
    ) -> std::result::Result<(), WriteError> {
        for pid in self.pids() {
            writer.write_property(target, *pid)?;
        }
        Ok(())
    }
}

/// Read `pid` from the element under the cursor into `target`
pub fn read_pid(
    pid: Pid,
    cursor: &mut dyn ElementCursor,
    ctx: &mut ReadContext,
    target: &mut dyn PropertyTarget,
) -> Result<()> {
    let value = read_value(pid.value_type(), cursor, ctx.settings())?;
    store(pid, value, cursor, target)
}

/// Hand a value read from the element under the cursor to `target`,
/// failing when the target refuses it
pub fn store(
    pid: Pid,
    value: PropertyValue,
    cursor: &dyn ElementCursor,
    target: &mut dyn PropertyTarget,
) -> Result<()> {
    let value_type = value.property_type();
    if target.set_property(pid, value) {
        Ok(())
    } else {
        Err(ReadError::Refused {
            element: cursor.name().to_string(),
            pid,
            value_type,
        })
    }
}

/// Table-driven matching: the element name must be one of `pids`' XML names
/// and the target must carry that property.
pub fn read_listed_property(
    pids: &[Pid],
    cursor: &mut dyn ElementCursor,
    ctx: &mut ReadContext,
    target: &mut dyn PropertyTarget,
) -> Result<bool> {
    let name = cursor.name();
    let Some(pid) = pids
        .iter()
        .copied()
        .find(|pid| pid.xml_name() == name && target.recognizes(*pid))
    else {
        return Ok(false);
    };
    read_pid(pid, cursor, ctx, target)?;
    Ok(true)
}

/// Dispatch the element under the cursor through `chain`
pub fn read_properties(
    chain: &[&dyn PropertyReader],
    cursor: &mut dyn ElementCursor,
    ctx: &mut ReadContext,
    target: &mut dyn PropertyTarget,
) -> Result<ReadOutcome> {
    for reader in chain {
        if reader.read_property(cursor, ctx, target)? {
            debug!("<{}> read by {}", cursor.name(), reader.name());
            ctx.note_recognized();
            return Ok(ReadOutcome::Recognized);
        }
    }
    ctx.handle_unknown(cursor)?;
    Ok(ReadOutcome::Unknown)
}

/// Read every child of the current element through `chain`, consuming the
/// element's end tag
pub fn read_element(
    chain: &[&dyn PropertyReader],
    cursor: &mut dyn ElementCursor,
    ctx: &mut ReadContext,
    target: &mut dyn PropertyTarget,
) -> Result<()> {
    while cursor.read_next_start_element()? {
        read_properties(chain, cursor, ctx, target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DynamicType, ElementType, Item};
    use crate::property::PropertyType;
    use crate::rw::cursor::UnknownElement;
    use crate::rw::readers::{DynamicRw, EngravingItemRw, TextBaseRw};
    use crate::settings::{ReadSettings, UnknownElementPolicy};

    /// Flat list of text-only child elements; counts how often each is consumed
    struct ScriptedCursor {
        elements: Vec<(&'static str, &'static str)>,
        index: Option<usize>,
        consumed: Vec<u32>,
        unknown: Vec<UnknownElement>,
    }

    impl ScriptedCursor {
        fn new(elements: Vec<(&'static str, &'static str)>) -> Self {
            let consumed = vec![0; elements.len()];
            Self {
                elements,
                index: None,
                consumed,
                unknown: Vec::new(),
            }
        }

        fn consume(&mut self) -> usize {
            let index = self.index.expect("no current element");
            self.consumed[index] += 1;
            index
        }
    }

    impl ElementCursor for ScriptedCursor {
        fn read_next_start_element(&mut self) -> Result<bool> {
            if let Some(index) = self.index {
                assert_eq!(self.consumed[index], 1, "element {} left unconsumed", index);
            }
            let next = self.index.map_or(0, |i| i + 1);
            if next >= self.elements.len() {
                return Ok(false);
            }
            self.index = Some(next);
            Ok(true)
        }

        fn name(&self) -> &str {
            self.index.map_or("", |i| self.elements[i].0)
        }

        fn attribute(&self, _name: &str) -> Option<&str> {
            None
        }

        fn line(&self) -> usize {
            self.index.map_or(0, |i| i + 1)
        }

        fn read_text(&mut self) -> Result<String> {
            let index = self.consume();
            Ok(self.elements[index].1.to_string())
        }

        fn skip_current(&mut self) -> Result<()> {
            self.consume();
            Ok(())
        }

        fn unknown(&mut self) -> Result<()> {
            let index = self.consume();
            self.unknown.push(UnknownElement {
                name: self.elements[index].0.to_string(),
                line: index + 1,
            });
            Ok(())
        }

        fn unknown_elements(&self) -> &[UnknownElement] {
            &self.unknown
        }
    }

    const DYNAMIC_CHAIN: &[&dyn PropertyReader] = &[&DynamicRw, &TextBaseRw, &EngravingItemRw];

    #[test]
    fn test_unknown_terminal_reached_once_per_element() {
        let mut cursor = ScriptedCursor::new(vec![
            ("subtype", "mf"),
            ("bogus", "?"),
            ("text", "espr."),
            ("visible", "0"),
            ("alsoBogus", "?"),
        ]);
        let mut ctx = ReadContext::default();
        let mut item = Item::new(ElementType::Dynamic);

        read_element(DYNAMIC_CHAIN, &mut cursor, &mut ctx, &mut item).unwrap();

        assert_eq!(cursor.consumed, vec![1, 1, 1, 1, 1]);
        assert_eq!(ctx.recognized_count(), 3);
        assert_eq!(ctx.unknown_count(), 2);
        let names: Vec<_> = cursor.unknown_elements().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["bogus", "alsoBogus"]);

        assert_eq!(item.property(Pid::DynamicType).as_dynamic_type(), Some(&DynamicType::Mf));
        assert_eq!(item.property(Pid::Text), PropertyValue::from("espr."));
        assert_eq!(item.property(Pid::Visible), PropertyValue::Bool(false));
    }

    #[test]
    fn test_base_reader_handles_what_subtype_does_not() {
        let mut cursor = ScriptedCursor::new(vec![("autoplace", "0")]);
        cursor.read_next_start_element().unwrap();
        let mut ctx = ReadContext::default();
        let mut item = Item::new(ElementType::Dynamic);

        assert!(!DynamicRw.read_property(&mut cursor, &mut ctx, &mut item).unwrap());
        assert_eq!(cursor.consumed, vec![0]);

        let outcome = read_properties(DYNAMIC_CHAIN, &mut cursor, &mut ctx, &mut item).unwrap();
        assert_eq!(outcome, ReadOutcome::Recognized);
        assert_eq!(item.property(Pid::Autoplace), PropertyValue::Bool(false));
    }

    #[test]
    fn test_target_capability_limits_recognition() {
        // A fingering has no dynamic properties, so "subtype" falls through
        let mut cursor = ScriptedCursor::new(vec![("subtype", "mf")]);
        cursor.read_next_start_element().unwrap();
        let mut ctx = ReadContext::default();
        let mut item = Item::new(ElementType::Fingering);

        let outcome = read_properties(DYNAMIC_CHAIN, &mut cursor, &mut ctx, &mut item).unwrap();
        assert_eq!(outcome, ReadOutcome::Unknown);
        assert_eq!(cursor.consumed, vec![1]);
    }

    struct Claims(&'static str);

    impl PropertyReader for Claims {
        fn name(&self) -> &'static str {
            self.0
        }

        fn pids(&self) -> &'static [Pid] {
            &[]
        }

        fn read_property(
            &self,
            cursor: &mut dyn ElementCursor,
            _ctx: &mut ReadContext,
            target: &mut dyn PropertyTarget,
        ) -> Result<bool> {
            if cursor.name() != "text" {
                return Ok(false);
            }
            cursor.read_text()?;
            target.set_property(Pid::Text, PropertyValue::from(self.0));
            Ok(true)
        }
    }

    #[test]
    fn test_first_reader_in_chain_wins() {
        let chain: &[&dyn PropertyReader] = &[&Claims("first"), &Claims("second")];
        let mut cursor = ScriptedCursor::new(vec![("text", "ignored")]);
        let mut ctx = ReadContext::default();
        let mut item = Item::new(ElementType::Fingering);

        read_element(chain, &mut cursor, &mut ctx, &mut item).unwrap();
        assert_eq!(item.property(Pid::Text), PropertyValue::from("first"));
        assert_eq!(cursor.consumed, vec![1]);
    }

    #[test]
    fn test_strict_policy_fails_after_recording() {
        let mut cursor = ScriptedCursor::new(vec![("bogus", "?")]);
        let mut ctx = ReadContext::new(ReadSettings {
            unknown_elements: UnknownElementPolicy::Strict,
            ..ReadSettings::default()
        });
        let mut item = Item::new(ElementType::Dynamic);

        let err = read_element(DYNAMIC_CHAIN, &mut cursor, &mut ctx, &mut item).unwrap_err();
        assert_eq!(err, ReadError::UnknownElement { name: "bogus".to_string(), line: 1 });
        assert_eq!(cursor.unknown_elements().len(), 1);
        assert_eq!(cursor.consumed, vec![1]);
    }

    /// Carries every property but stores nothing
    struct ReadOnly;

    impl PropertyTarget for ReadOnly {
        fn recognizes(&self, _pid: Pid) -> bool {
            true
        }

        fn set_property(&mut self, _pid: Pid, _value: PropertyValue) -> bool {
            false
        }

        fn property(&self, pid: Pid) -> PropertyValue {
            pid.default_value()
        }
    }

    #[test]
    fn test_refused_value_is_an_error() {
        let mut cursor = ScriptedCursor::new(vec![("velocity", "90")]);
        let mut ctx = ReadContext::default();

        let err = read_element(DYNAMIC_CHAIN, &mut cursor, &mut ctx, &mut ReadOnly).unwrap_err();
        assert_eq!(
            err,
            ReadError::Refused {
                element: "velocity".to_string(),
                pid: Pid::Velocity,
                value_type: PropertyType::Int,
            }
        );
        assert_eq!(ctx.recognized_count(), 0);
        assert_eq!(cursor.consumed, vec![1]);
    }
}
