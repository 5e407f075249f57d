//! The behavior that generated enumeration code implements, computed from
//! the model.
//!
//! The emitter takes the validity bounds from here, and tests and host-side
//! tools use the same layout to predict what the generated code does for
//! any raw value.
use fppgen_model::enums::{EnumDefinition, EnumMember, SerialKind};

use crate::options::ValidityPolicy;

/// Label printed for values that have no declared name.
pub const INVALID_LABEL: &str = "[invalid]";

#[derive(Clone, Copy, Debug)]
pub struct EnumLayout<'a> {
    definition: &'a EnumDefinition,
    policy: ValidityPolicy,
}

impl<'a> EnumLayout<'a> {
    pub fn new(definition: &'a EnumDefinition, policy: ValidityPolicy) -> Self {
        Self { definition, policy }
    }

    pub fn definition(&self) -> &'a EnumDefinition {
        self.definition
    }

    pub fn policy(&self) -> ValidityPolicy {
        self.policy
    }

    /// The members holding the smallest and the largest ordinal, or `None`
    /// when the enumeration has no members.
    pub fn bounds(&self) -> Option<(&'a EnumMember, &'a EnumMember)> {
        self.definition
            .min_member()
            .zip(self.definition.max_member())
    }

    /// Returns true if generated `isValid()` accepts the raw value.
    pub fn is_valid(&self, raw: i64) -> bool {
        match self.policy {
            ValidityPolicy::InclusiveRange => match self.bounds() {
                Some((min, max)) => min.ordinal <= raw && raw <= max.ordinal,
                None => false,
            },
            ValidityPolicy::ExactMembership => self.member(raw).is_some(),
        }
    }

    /// The first declared member with the ordinal.
    pub fn member(&self, raw: i64) -> Option<&'a EnumMember> {
        self.definition.members.iter().find(|m| m.ordinal == raw)
    }

    /// The name printed for the raw value.
    pub fn label(&self, raw: i64) -> &'a str {
        self.member(raw)
            .map(|m| m.name.as_str())
            .unwrap_or(INVALID_LABEL)
    }

    /// The text generated `toString` produces for the raw value. `U64`
    /// values are held in an `i64` bit for bit and print unsigned.
    pub fn format(&self, raw: i64) -> String {
        match self.definition.serial_kind {
            SerialKind::U64 => format!("{} ({})", self.label(raw), raw as u64),
            _ => format!("{} ({})", self.label(raw), raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn gapped() -> EnumDefinition {
        EnumDefinition::new("E", vec![EnumMember::new("A", 0), EnumMember::new("B", 5)])
    }

    #[rstest]
    #[case(ValidityPolicy::InclusiveRange, 3, true)]
    #[case(ValidityPolicy::ExactMembership, 3, false)]
    #[case(ValidityPolicy::InclusiveRange, 5, true)]
    #[case(ValidityPolicy::InclusiveRange, 6, false)]
    #[case(ValidityPolicy::InclusiveRange, -1, false)]
    #[case(ValidityPolicy::ExactMembership, 0, true)]
    fn is_valid_when_gapped_then_follows_policy(
        #[case] policy: ValidityPolicy,
        #[case] raw: i64,
        #[case] expected: bool,
    ) {
        let definition = gapped();
        assert_eq!(EnumLayout::new(&definition, policy).is_valid(raw), expected);
    }

    #[test]
    fn format_when_declared_then_name_and_ordinal() {
        let definition = gapped();
        let layout = EnumLayout::new(&definition, ValidityPolicy::InclusiveRange);

        assert_eq!(layout.format(0), "A (0)");
        assert_eq!(layout.format(5), "B (5)");
    }

    #[test]
    fn format_when_undeclared_then_invalid_label() {
        let definition = gapped();
        let layout = EnumLayout::new(&definition, ValidityPolicy::InclusiveRange);

        assert_eq!(layout.format(3), "[invalid] (3)");
        assert_eq!(layout.format(-7), "[invalid] (-7)");
    }

    #[test]
    fn is_valid_when_no_members_then_false() {
        let definition = EnumDefinition::new("E", vec![]);
        let layout = EnumLayout::new(&definition, ValidityPolicy::InclusiveRange);

        assert!(layout.bounds().is_none());
        assert!(!layout.is_valid(0));
    }
}
