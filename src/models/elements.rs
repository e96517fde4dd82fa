//! Element types and the generic property-carrying item
//!
//! `Item` is an in-memory element used by the document reader when the host
//! has no object model of its own. It stores only explicitly set properties;
//! everything else reads back as the pid default.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::property::{Pid, PidGroup, PropertyTarget, PropertyValue};

/// Element types the reader knows how to populate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    /// Fingering text attached to a note
    Fingering,

    /// Dynamic marking (p, mf, ff, ...)
    Dynamic,

    BarLine,
}

impl ElementType {
    pub const ALL: [ElementType; 3] = [
        ElementType::Fingering,
        ElementType::Dynamic,
        ElementType::BarLine,
    ];

    /// Tag name of the element in documents
    pub fn xml_name(&self) -> &'static str {
        match self {
            ElementType::Fingering => "Fingering",
            ElementType::Dynamic => "Dynamic",
            ElementType::BarLine => "BarLine",
        }
    }

    pub fn from_xml(name: &str) -> Option<Self> {
        ElementType::ALL.into_iter().find(|t| t.xml_name() == name)
    }

    /// Whether elements of this type carry properties of the given group
    pub fn supports(&self, group: PidGroup) -> bool {
        match (self, group) {
            (_, PidGroup::Item) => true,
            (ElementType::Fingering | ElementType::Dynamic, PidGroup::Text) => true,
            (ElementType::Dynamic, PidGroup::Dynamic) => true,
            (ElementType::BarLine, PidGroup::BarLine) => true,
            _ => false,
        }
    }
}

/// A typed element holding its explicitly set properties
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    element_type: ElementType,
    properties: BTreeMap<Pid, PropertyValue>,
}

impl Item {
    pub fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            properties: BTreeMap::new(),
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn is_set(&self, pid: Pid) -> bool {
        self.properties.contains_key(&pid)
    }
}

impl PropertyTarget for Item {
    fn recognizes(&self, pid: Pid) -> bool {
        self.element_type.supports(pid.group())
    }

    fn set_property(&mut self, pid: Pid, value: PropertyValue) -> bool {
        if !self.recognizes(pid) {
            warn!("{} has no property {:?}", self.element_type.xml_name(), pid);
            return false;
        }
        if value.property_type() != pid.value_type() {
            warn!(
                "refusing {} value for {:?} on {}, expected {}",
                value.property_type(),
                pid,
                self.element_type.xml_name(),
                pid.value_type()
            );
            return false;
        }
        self.properties.insert(pid, value);
        true
    }

    fn property(&self, pid: Pid) -> PropertyValue {
        if !self.recognizes(pid) {
            return PropertyValue::Undefined;
        }
        self.properties
            .get(&pid)
            .cloned()
            .unwrap_or_else(|| pid.default_value())
    }
}
