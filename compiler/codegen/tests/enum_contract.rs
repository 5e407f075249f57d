//! The behavior of generated enumeration code, checked through the host-side
//! layout and serial buffer that model it.

mod common;

use common::{file, generate_resource};
use fppgen_codegen::{
    CodegenOptions, EnumLayout, SerialBuffer, SerializeStatus, ValidityPolicy,
};
use fppgen_model::enums::{EnumDefinition, EnumMember, SerialKind};
use proptest::prelude::*;
use rstest::rstest;

fn two_members() -> EnumDefinition {
    EnumDefinition::new("E", vec![EnumMember::new("A", 0), EnumMember::new("B", 1)])
        .with_serial_kind(SerialKind::U8)
}

fn gapped() -> EnumDefinition {
    EnumDefinition::new("G", vec![EnumMember::new("A", 0), EnumMember::new("B", 5)])
}

#[rstest]
#[case(SerialKind::U8)]
#[case(SerialKind::I16)]
#[case(SerialKind::U32)]
#[case(SerialKind::I64)]
fn round_trip_when_declared_member_then_equal_value_and_ok(#[case] kind: SerialKind) {
    let definition = EnumDefinition::new(
        "E",
        vec![EnumMember::new("LOW", 0), EnumMember::new("HIGH", 7)],
    )
    .with_serial_kind(kind);
    let layout = EnumLayout::new(&definition, ValidityPolicy::ExactMembership);

    for member in &definition.members {
        let mut buffer = SerialBuffer::new(kind.size());
        assert_eq!(layout.serialize(&mut buffer, member.ordinal), SerializeStatus::Ok);
        assert_eq!(buffer.bytes().len(), kind.size());

        assert_eq!(
            layout.deserialize(&mut buffer),
            (SerializeStatus::Ok, Some(member.ordinal))
        );
    }
}

#[test]
fn deserialize_when_raw_past_last_member_then_format_error() {
    let definition = two_members();
    let layout = EnumLayout::new(&definition, ValidityPolicy::InclusiveRange);
    let mut buffer = SerialBuffer::from_bytes(&[2]);

    let (status, value) = layout.deserialize(&mut buffer);

    assert!(!layout.is_valid(2));
    assert_eq!(status, SerializeStatus::DeserializeFormatError);
    assert_eq!(status.cpp_name(), "Fw::FW_DESERIALIZE_FORMAT_ERROR");
    assert_eq!(value, Some(2));
}

#[rstest]
#[case(ValidityPolicy::InclusiveRange, SerializeStatus::Ok)]
#[case(ValidityPolicy::ExactMembership, SerializeStatus::DeserializeFormatError)]
fn deserialize_when_raw_in_gap_then_follows_policy(
    #[case] policy: ValidityPolicy,
    #[case] expected: SerializeStatus,
) {
    let definition = gapped();
    let layout = EnumLayout::new(&definition, policy);
    let mut buffer = SerialBuffer::new(4);
    layout.serialize(&mut buffer, 3);

    assert_eq!(layout.deserialize(&mut buffer), (expected, Some(3)));
}

#[rstest]
#[case(0, "A (0)")]
#[case(5, "B (5)")]
#[case(3, "[invalid] (3)")]
#[case(-4, "[invalid] (-4)")]
fn format_when_raw_then_name_or_invalid_label(#[case] raw: i64, #[case] expected: &str) {
    let definition = gapped();
    let layout = EnumLayout::new(&definition, ValidityPolicy::InclusiveRange);

    assert_eq!(layout.format(raw), expected);
}

#[test]
fn generate_when_exact_membership_then_emitted_check_matches_layout() {
    let options = CodegenOptions::reference().with_validity(ValidityPolicy::ExactMembership);
    let files = generate_resource("serialize_type.json", &options);

    let definition = file(&files, "SerializeTypeEnumAc.cpp");
    assert!(definition.contains("return ((e == X) || (e == Y));"));
}

proptest! {
    #[test]
    fn deserialize_when_any_u16_then_status_agrees_with_is_valid(raw in 0i64..=0xFFFF) {
        let definition = gapped().with_serial_kind(SerialKind::U16);
        for policy in [ValidityPolicy::InclusiveRange, ValidityPolicy::ExactMembership] {
            let layout = EnumLayout::new(&definition, policy);
            let mut buffer = SerialBuffer::new(2);
            prop_assert_eq!(layout.serialize(&mut buffer, raw), SerializeStatus::Ok);

            let (status, value) = layout.deserialize(&mut buffer);
            prop_assert_eq!(status.is_ok(), layout.is_valid(raw));
            prop_assert_eq!(value, Some(raw));
        }
    }
}
