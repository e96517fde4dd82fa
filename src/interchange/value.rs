//! Generic interchange value
//!
//! `InterchangeValue` is the coarse, domain-agnostic value that crosses the
//! boundary to hosts which know nothing about engraving types (settings
//! screens, scripting, inspectors). Its discriminator space is much smaller
//! than `PropertyType`: spatium, millimetre and real all travel as `Double`,
//! every enumeration travels as `Int`.

use std::any::Any;
use std::fmt;

use crate::models::{Color, PairF, PointF, SizeF};

/// Discriminator of an `InterchangeValue`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InterchangeType {
    Invalid,
    Bool,
    Int,
    UInt,
    LongLong,
    ULongLong,
    Char,
    Double,
    String,
    Size,
    SizeF,
    Point,
    PointF,
    Color,
    PairReal,
    UserType,
}

/// Dynamically typed value at the system boundary
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InterchangeValue {
    #[default]
    Invalid,
    Bool(bool),
    Int(i32),
    UInt(u32),
    LongLong(i64),
    ULongLong(u64),
    Char(char),
    Double(f64),
    String(String),
    /// Integer size
    Size { width: i32, height: i32 },
    SizeF(SizeF),
    /// Integer point
    Point { x: i32, y: i32 },
    PointF(PointF),
    Color(Color),
    PairReal(PairF),
    /// A domain value wrapped as-is
    UserType(OpaqueValue),
}

impl InterchangeValue {
    pub fn value_type(&self) -> InterchangeType {
        match self {
            InterchangeValue::Invalid => InterchangeType::Invalid,
            InterchangeValue::Bool(_) => InterchangeType::Bool,
            InterchangeValue::Int(_) => InterchangeType::Int,
            InterchangeValue::UInt(_) => InterchangeType::UInt,
            InterchangeValue::LongLong(_) => InterchangeType::LongLong,
            InterchangeValue::ULongLong(_) => InterchangeType::ULongLong,
            InterchangeValue::Char(_) => InterchangeType::Char,
            InterchangeValue::Double(_) => InterchangeType::Double,
            InterchangeValue::String(_) => InterchangeType::String,
            InterchangeValue::Size { .. } => InterchangeType::Size,
            InterchangeValue::SizeF(_) => InterchangeType::SizeF,
            InterchangeValue::Point { .. } => InterchangeType::Point,
            InterchangeValue::PointF(_) => InterchangeType::PointF,
            InterchangeValue::Color(_) => InterchangeType::Color,
            InterchangeValue::PairReal(_) => InterchangeType::PairReal,
            InterchangeValue::UserType(_) => InterchangeType::UserType,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, InterchangeValue::Invalid)
    }

    /// Truthiness: non-zero numbers, and strings other than `""`, `"0"` and `"false"`
    pub fn to_bool(&self) -> bool {
        match self {
            InterchangeValue::Bool(v) => *v,
            InterchangeValue::Int(v) => *v != 0,
            InterchangeValue::UInt(v) => *v != 0,
            InterchangeValue::LongLong(v) => *v != 0,
            InterchangeValue::ULongLong(v) => *v != 0,
            InterchangeValue::Char(c) => *c != '\0',
            InterchangeValue::Double(v) => *v != 0.0,
            InterchangeValue::String(s) => {
                let s = s.trim();
                !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
            }
            _ => false,
        }
    }

    /// Narrowing integer read. Wider integers are truncated, doubles are
    /// rounded, unparsable strings and non-numeric values read as zero.
    pub fn to_int(&self) -> i32 {
        match self {
            InterchangeValue::Bool(v) => i32::from(*v),
            InterchangeValue::Int(v) => *v,
            InterchangeValue::UInt(v) => *v as i32,
            InterchangeValue::LongLong(v) => *v as i32,
            InterchangeValue::ULongLong(v) => *v as i32,
            InterchangeValue::Char(c) => *c as i32,
            InterchangeValue::Double(v) => v.round() as i32,
            InterchangeValue::String(s) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Floating point read; unparsable strings and non-numeric values read as zero
    pub fn to_real(&self) -> f64 {
        match self {
            InterchangeValue::Bool(v) => f64::from(u8::from(*v)),
            InterchangeValue::Int(v) => f64::from(*v),
            InterchangeValue::UInt(v) => f64::from(*v),
            InterchangeValue::LongLong(v) => *v as f64,
            InterchangeValue::ULongLong(v) => *v as f64,
            InterchangeValue::Char(c) => f64::from(u32::from(*c)),
            InterchangeValue::Double(v) => *v,
            InterchangeValue::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Text rendering of scalar values; aggregates read as the empty string
    pub fn to_string_value(&self) -> String {
        match self {
            InterchangeValue::Bool(v) => v.to_string(),
            InterchangeValue::Int(v) => v.to_string(),
            InterchangeValue::UInt(v) => v.to_string(),
            InterchangeValue::LongLong(v) => v.to_string(),
            InterchangeValue::ULongLong(v) => v.to_string(),
            InterchangeValue::Char(c) => c.to_string(),
            InterchangeValue::Double(v) => v.to_string(),
            InterchangeValue::String(s) => s.clone(),
            InterchangeValue::Color(c) => c.to_string(),
            _ => String::new(),
        }
    }

    /// Point view of integer and floating points
    pub fn to_point_f(&self) -> Option<PointF> {
        match self {
            InterchangeValue::Point { x, y } => Some(PointF::new(f64::from(*x), f64::from(*y))),
            InterchangeValue::PointF(p) => Some(*p),
            _ => None,
        }
    }

    /// Size view of integer and floating sizes
    pub fn to_size_f(&self) -> Option<SizeF> {
        match self {
            InterchangeValue::Size { width, height } => {
                Some(SizeF::new(f64::from(*width), f64::from(*height)))
            }
            InterchangeValue::SizeF(s) => Some(*s),
            _ => None,
        }
    }

    pub fn to_color(&self) -> Option<Color> {
        match self {
            InterchangeValue::Color(c) => Some(*c),
            InterchangeValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn to_pair(&self) -> Option<PairF> {
        match self {
            InterchangeValue::PairReal(p) => Some(*p),
            _ => None,
        }
    }

    pub fn user_value<T: 'static>(&self) -> Option<&T> {
        match self {
            InterchangeValue::UserType(v) => v.downcast_ref(),
            _ => None,
        }
    }
}

/// Debug-dump form of an interchange value
impl From<&InterchangeValue> for serde_json::Value {
    fn from(value: &InterchangeValue) -> Self {
        use serde_json::{json, Value};

        match value {
            InterchangeValue::Invalid => Value::Null,
            InterchangeValue::Bool(v) => json!(v),
            InterchangeValue::Int(v) => json!(v),
            InterchangeValue::UInt(v) => json!(v),
            InterchangeValue::LongLong(v) => json!(v),
            InterchangeValue::ULongLong(v) => json!(v),
            InterchangeValue::Char(c) => json!(c.to_string()),
            InterchangeValue::Double(v) => json!(v),
            InterchangeValue::String(s) => json!(s),
            InterchangeValue::Size { width, height } => json!({ "width": width, "height": height }),
            InterchangeValue::SizeF(s) => json!({ "width": s.width, "height": s.height }),
            InterchangeValue::Point { x, y } => json!({ "x": x, "y": y }),
            InterchangeValue::PointF(p) => json!({ "x": p.x, "y": p.y }),
            InterchangeValue::Color(c) => json!(c.to_string()),
            InterchangeValue::PairReal(p) => json!([p.first, p.second]),
            InterchangeValue::UserType(v) => json!({ "userType": v.type_name() }),
        }
    }
}

/// A type-erased, clonable, comparable domain value
pub struct OpaqueValue {
    inner: Box<dyn OpaquePayload>,
    type_name: &'static str,
}

impl OpaqueValue {
    pub fn new<T: Clone + PartialEq + fmt::Debug + 'static>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    /// Returns `None` if the contained value is not of type `T`
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref()
    }
}

impl Clone for OpaqueValue {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
            type_name: self.type_name,
        }
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_dyn(other.inner.as_ref())
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueValue").field(&self.inner).finish()
    }
}

trait OpaquePayload: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn OpaquePayload>;
    fn eq_dyn(&self, other: &dyn OpaquePayload) -> bool;
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> OpaquePayload for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn OpaquePayload> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn OpaquePayload) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowing_reads() {
        assert_eq!(InterchangeValue::LongLong(1 << 33 | 5).to_int(), 5);
        assert_eq!(InterchangeValue::Double(2.6).to_int(), 3);
        assert_eq!(InterchangeValue::String(" 42 ".into()).to_int(), 42);
        assert_eq!(InterchangeValue::String("4.2".into()).to_int(), 0);
        assert_eq!(InterchangeValue::Char('A').to_int(), 65);
        assert_eq!(InterchangeValue::Invalid.to_int(), 0);
    }

    #[test]
    fn test_truthiness() {
        assert!(InterchangeValue::Int(-3).to_bool());
        assert!(!InterchangeValue::String("false".into()).to_bool());
        assert!(!InterchangeValue::String("0".into()).to_bool());
        assert!(InterchangeValue::String("yes".into()).to_bool());
        assert!(!InterchangeValue::PointF(PointF::new(1.0, 1.0)).to_bool());
    }

    #[test]
    fn test_integer_geometry_widens() {
        let p = InterchangeValue::Point { x: 3, y: -4 };
        assert_eq!(p.to_point_f(), Some(PointF::new(3.0, -4.0)));
        assert_eq!(p.to_size_f(), None);
    }

    #[test]
    fn test_opaque_value_equality_and_downcast() {
        let a = OpaqueValue::new(vec![1, 2, 3]);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, OpaqueValue::new(vec![1, 2]));
        assert_ne!(a, OpaqueValue::new("other"));
        assert!(a.is::<Vec<i32>>());
        assert_eq!(a.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
        assert_eq!(a.downcast_ref::<String>(), None);
    }

    #[test]
    fn test_json_dump() {
        let v = serde_json::Value::from(&InterchangeValue::SizeF(SizeF::new(1.5, 2.0)));
        assert_eq!(v, serde_json::json!({ "width": 1.5, "height": 2.0 }));
        let c = serde_json::Value::from(&InterchangeValue::Color(Color::rgb(255, 0, 0)));
        assert_eq!(c, serde_json::json!("#ff0000"));
    }
}
