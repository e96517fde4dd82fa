// Equality policy and accessor behaviour of PropertyValue

use notation_props::models::{
    Align, AlignH, AlignV, BarlineType, Color, DynamicType, Fraction, Millimetre, PlacementV,
    PointF, Spatium,
};
use notation_props::property::{matching_rule, Comparison};
use notation_props::{PropertyType, PropertyValue};

#[test]
fn test_tag_matches_payload() {
    let samples: Vec<(PropertyValue, PropertyType)> = vec![
        (true.into(), PropertyType::Bool),
        (7_i32.into(), PropertyType::Int),
        (0.5_f64.into(), PropertyType::Real),
        ("x".into(), PropertyType::String),
        (PointF::new(1.0, 2.0).into(), PropertyType::Point),
        (Spatium(1.0).into(), PropertyType::Spatium),
        (Millimetre(1.0).into(), PropertyType::Millimetre),
        (Color::WHITE.into(), PropertyType::Color),
        (Fraction::new(3, 8).into(), PropertyType::Fraction),
        (DynamicType::P.into(), PropertyType::DynamicType),
        (BarlineType::Double.into(), PropertyType::BarlineType),
    ];
    for (value, tag) in samples {
        assert_eq!(value.property_type(), tag, "tag of {:?}", value);
        assert!(value.is_valid());
    }
}

#[test]
fn test_undefined_identity() {
    assert_eq!(PropertyValue::default(), PropertyValue::Undefined);
    assert_ne!(PropertyValue::Undefined, PropertyValue::Int(5));
    assert_ne!(PropertyValue::Int(5), PropertyValue::Undefined);
    assert!(!PropertyValue::default().is_valid());
}

#[test]
fn test_bool_compares_by_truthiness() {
    assert_eq!(PropertyValue::Bool(true), PropertyValue::Int(1));
    assert_eq!(PropertyValue::Bool(false), PropertyValue::Int(0));
    assert_eq!(PropertyValue::Int(0), PropertyValue::Bool(false));
    // Any non-zero integer is truthy
    assert_eq!(PropertyValue::Bool(true), PropertyValue::Int(2));
    assert_ne!(PropertyValue::Bool(false), PropertyValue::Int(2));
    assert_eq!(
        matching_rule(PropertyType::Int, PropertyType::Bool).map(|r| r.comparison),
        Some(Comparison::Truthiness)
    );
}

#[test]
fn test_int_compares_with_enum_ordinals() {
    assert_eq!(PropertyValue::Int(1), PropertyValue::from(PlacementV::Below));
    assert_ne!(PropertyValue::Int(0), PropertyValue::from(PlacementV::Below));
    assert_eq!(PropertyValue::from(DynamicType::Mf), PropertyValue::Int(8));
}

#[test]
fn test_spatium_within_epsilon() {
    assert_eq!(PropertyValue::from(Spatium(1.0000001)), PropertyValue::from(Spatium(1.0)));
    assert_ne!(PropertyValue::from(Spatium(1.00001)), PropertyValue::from(Spatium(1.0)));
    // Spatium bridges to plain reals
    assert_eq!(PropertyValue::from(Spatium(2.5)), PropertyValue::Real(2.5));
}

#[test]
fn test_real_within_epsilon() {
    assert_eq!(PropertyValue::Real(0.1 + 0.2), PropertyValue::Real(0.3));
    assert_ne!(PropertyValue::Real(0.3001), PropertyValue::Real(0.3));
}

#[test]
fn test_fraction_identity_not_value() {
    let half = Fraction::new(1, 2);
    let two_quarters = Fraction::new(2, 4);
    assert!(half.value_eq(&two_quarters));
    assert_ne!(PropertyValue::from(two_quarters), PropertyValue::from(half));
    assert_eq!(PropertyValue::from(two_quarters), PropertyValue::from(Fraction::new(2, 4)));
}

#[test]
fn test_other_types_compare_structurally() {
    assert_eq!(PropertyValue::from("abc"), PropertyValue::String("abc".to_string()));
    assert_ne!(PropertyValue::from(Color::BLACK), PropertyValue::from(Color::WHITE));
    assert_ne!(
        PropertyValue::from(Align::new(AlignH::Left, AlignV::Top)),
        PropertyValue::from(Align::new(AlignH::Right, AlignV::Top))
    );
    // Different tags outside the policy table never compare equal
    assert_ne!(PropertyValue::from(Color::BLACK), PropertyValue::from(PlacementV::Above));
    // Millimetre meets the Spatium rule and is compared as a real
    assert_eq!(PropertyValue::from(Millimetre(1.0)), PropertyValue::from(Spatium(1.0)));
}

#[test]
fn test_checked_and_unchecked_accessors() {
    let value = PropertyValue::from(Spatium(1.5));
    assert_eq!(value.as_spatium(), Some(&Spatium(1.5)));
    assert_eq!(value.as_real(), None);
    assert_eq!(value.to_spatium(), Spatium(1.5));
    assert_eq!(value.value::<f64>(), Some(1.5));
}

#[test]
#[should_panic(expected = "contract violation")]
fn test_unchecked_accessor_on_wrong_tag_panics() {
    PropertyValue::Int(3).to_color();
}

#[test]
fn test_serde_json_round_trip() {
    let value = PropertyValue::from(DynamicType::Ff);
    let json = serde_json::to_string(&value).unwrap();
    let back: PropertyValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_dynamic_type(), Some(&DynamicType::Ff));
}

#[test]
fn test_serde_rejects_zero_denominator() {
    let json = serde_json::to_string(&PropertyValue::from(Fraction::new(6, 8))).unwrap();
    let back: PropertyValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_fraction(), Some(&Fraction::new(6, 8)));

    let broken = r#"{"Fraction":{"numerator":1,"denominator":0}}"#;
    assert!(serde_json::from_str::<PropertyValue>(broken).is_err());
}
