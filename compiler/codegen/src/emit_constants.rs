//! Emits `FppConstants.hpp` and `FppConstants.cpp` for the constants of a
//! model.
//!
//! Qualified names flatten to `A_B_name`. Integer constants are enumerators
//! and live only in the header.
use fppgen_model::constants::{
    ConstantDefinition, ConstantValue, CONSTANTS_FILE_BASE_NAME as BASE_NAME,
};
use log::trace;

use crate::escape::escape;
use crate::unit::CompilationUnit;
use crate::writer::CppWriter;

/// Emits the single compilation unit holding every constant.
pub fn apply(constants: &[ConstantDefinition]) -> CompilationUnit {
    trace!("emitting {} constants", constants.len());
    CompilationUnit::new(BASE_NAME, emit_header(constants), emit_definition(constants))
}

/// Renders a float so that it reads as a floating-point literal.
fn float_literal(value: f64) -> String {
    if value.is_nan() {
        return "std::numeric_limits<F64>::quiet_NaN()".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}std::numeric_limits<F64>::infinity()", sign);
    }
    let text = format!("{:?}", value);
    if text.contains(['.', 'e']) {
        text
    } else {
        format!("{}.0", text)
    }
}

fn emit_header(constants: &[ConstantDefinition]) -> String {
    let mut w = CppWriter::new();
    w.banner_with_copyright(&format!("{}.hpp", BASE_NAME));
    w.open_guard(&format!("{}_HPP", BASE_NAME));
    w.includes(&["\"Fw/Types/BasicTypes.hpp\""]);

    for constant in constants {
        let name = constant.name.flattened();
        w.annotation(constant.annotation.as_deref());
        match &constant.value {
            ConstantValue::String(_) => w.line(&format!("extern const char *const {};", name)),
            ConstantValue::Integer(value) => {
                w.line(&format!("enum FppConstant_{} {{", name));
                w.line(&format!("  {} = {}", name, value));
                w.line("};");
            }
            ConstantValue::Float(_) => w.line(&format!("extern const F64 {};", name)),
            ConstantValue::Boolean(_) => w.line(&format!("extern const bool {};", name)),
        }
        w.blank();
    }

    w.directive("#endif");
    w.finish()
}

fn emit_definition(constants: &[ConstantDefinition]) -> String {
    let mut w = CppWriter::new();
    w.banner_with_copyright(&format!("{}.cpp", BASE_NAME));

    let needs_limits = constants
        .iter()
        .any(|c| matches!(c.value, ConstantValue::Float(v) if !v.is_finite()));
    if needs_limits {
        w.includes(&["<limits>"]);
    }
    let header = format!("\"{}.hpp\"", BASE_NAME);
    w.includes(&[header.as_str()]);

    for constant in constants {
        let name = constant.name.flattened();
        let definition = match &constant.value {
            ConstantValue::String(text) => {
                format!("const char *const {} = \"{}\";", name, escape(text))
            }
            ConstantValue::Integer(_) => continue,
            ConstantValue::Float(value) => {
                format!("const F64 {} = {};", name, float_literal(*value))
            }
            ConstantValue::Boolean(value) => format!("const bool {} = {};", name, value),
        };
        w.line(&definition);
        w.blank();
    }

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fppgen_model::core::QualifiedName;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, "1.0")]
    #[case(-2.5, "-2.5")]
    #[case(1e300, "1e300")]
    #[case(f64::INFINITY, "std::numeric_limits<F64>::infinity()")]
    #[case(f64::NEG_INFINITY, "-std::numeric_limits<F64>::infinity()")]
    fn float_literal_when_value_then_floating_point_text(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(float_literal(value), expected);
    }

    #[test]
    fn apply_when_string_then_escaped_definition() {
        let constants = vec![ConstantDefinition::string("s", "a \"b\"\nc")];

        let unit = apply(&constants);

        assert_eq!(unit.header.name, "FppConstants.hpp");
        assert!(unit
            .header
            .contents
            .contains("extern const char *const s;\n"));
        assert!(unit
            .definition
            .contents
            .contains("const char *const s = \"a \\\"b\\\"\\nc\";\n"));
    }

    #[test]
    fn apply_when_integer_then_header_enumerator_only() {
        let constants = vec![ConstantDefinition::new("count", ConstantValue::Integer(3))];

        let unit = apply(&constants);

        assert!(unit
            .header
            .contents
            .contains("enum FppConstant_count {\n  count = 3\n};\n"));
        assert!(!unit.definition.contents.contains("count ="));
        assert!(!unit
            .definition
            .contents
            .lines()
            .any(|line| line.starts_with("const") && line.contains("count")));
    }

    #[test]
    fn apply_when_namespaced_then_flattened_name() {
        let name = QualifiedName::new("limit").in_namespace(["A", "B"]);
        let constants = vec![ConstantDefinition::new(name, ConstantValue::Boolean(true))];

        let unit = apply(&constants);

        assert!(unit.header.contents.contains("extern const bool A_B_limit;\n"));
        assert!(unit.definition.contents.contains("const bool A_B_limit = true;\n"));
    }

    #[test]
    fn apply_when_not_finite_float_then_includes_limits() {
        let constants = vec![ConstantDefinition::new("f", ConstantValue::Float(f64::NAN))];

        let unit = apply(&constants);

        assert!(unit.definition.contents.contains("#include <limits>\n"));
        assert!(unit
            .definition
            .contents
            .contains("const F64 f = std::numeric_limits<F64>::quiet_NaN();\n"));
    }

    #[test]
    fn apply_when_annotated_then_comment_precedes_declaration() {
        let constants =
            vec![ConstantDefinition::new("f", ConstantValue::Float(0.5)).with_annotation("Half")];

        let unit = apply(&constants);

        assert!(unit.header.contents.contains("//! Half\nextern const F64 f;\n"));
    }
}
