//! Problem codes for diagnostics about resolved models.
//!
//! The enumeration is generated at build time from
//! `resources/problem-codes.csv`.

include!(concat!(env!("OUT_DIR"), "/problems.rs"));

#[cfg(test)]
mod tests {
    use super::Problem;

    #[test]
    fn code_when_model_syntax_then_m0001() {
        assert_eq!(Problem::ModelSyntax.code(), "M0001");
    }

    #[test]
    fn message_when_duplicate_instance_then_describes_topology() {
        assert!(Problem::TopologyDuplicateInstance
            .message()
            .contains("topology"));
    }

    #[test]
    fn fmt_when_problem_then_code_and_message() {
        assert_eq!(
            format!("{}", Problem::EnumNoMembers),
            "M0100: Enumeration must declare at least one member"
        );
    }
}
