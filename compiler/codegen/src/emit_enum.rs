//! Emits the serializable C++ class for one enumeration.
//!
//! The class stores the raw value `e` and provides assignment, `isValid`,
//! `serialize`, `deserialize` and `toString`. Assignment never checks
//! validity. `deserialize` stores whatever it reads and reports a format
//! error when the value is not valid. `toString` never fails.
use fppgen_model::enums::{EnumDefinition, SerialKind};
use log::trace;

use crate::enum_layout::{EnumLayout, INVALID_LABEL};
use crate::options::{CodegenOptions, NameLookup, ValidityPolicy};
use crate::status::SerializeStatus;
use crate::unit::CompilationUnit;
use crate::writer::CppWriter;

/// Emits the header and definition file for the enumeration.
pub fn apply(definition: &EnumDefinition, options: &CodegenOptions) -> CompilationUnit {
    let layout = EnumLayout::new(definition, options.validity);
    let base_name = definition.file_base_name();
    trace!("emitting enum {} as {}", definition.name, base_name);

    CompilationUnit::new(
        &base_name,
        emit_header(&layout, &base_name),
        emit_definition(&layout, options, &base_name),
    )
}

/// The `isValid()` condition.
fn validity_condition(layout: &EnumLayout) -> String {
    match layout.policy() {
        ValidityPolicy::InclusiveRange => match layout.bounds() {
            Some((min, max)) => format!("((e >= {}) && (e <= {}))", min.name, max.name),
            None => "false".to_string(),
        },
        ValidityPolicy::ExactMembership => {
            let terms: Vec<String> = layout
                .definition()
                .members
                .iter()
                .map(|m| format!("(e == {})", m.name))
                .collect();
            match terms.len() {
                0 => "false".to_string(),
                1 => terms.join(""),
                _ => format!("({})", terms.join(" || ")),
            }
        }
    }
}

/// The format string and argument that print the raw value in `toString`.
fn ordinal_format(kind: SerialKind) -> (&'static str, &'static str) {
    match kind {
        SerialKind::I64 => ("\"%s (%\" PRIi64 \")\"", "static_cast<I64>(e)"),
        SerialKind::U64 => ("\"%s (%\" PRIu64 \")\"", "static_cast<U64>(e)"),
        _ => ("\"%s (%d)\"", "e"),
    }
}

fn emit_definition(layout: &EnumLayout, options: &CodegenOptions, base_name: &str) -> String {
    let definition = layout.definition();
    let name = &definition.name.name;
    let mut w = CppWriter::new();

    w.banner(
        &format!("{}.cpp", base_name),
        &format!("cpp file for {} enum", name),
    );
    match definition.serial_kind {
        SerialKind::I64 | SerialKind::U64 => w.includes(&["<cinttypes>", "<cstring>", "<limits>"]),
        _ => w.includes(&["<cstring>", "<limits>"]),
    }
    let own_header = format!("\"{}.hpp\"", base_name);
    w.includes(&["\"Fw/Types/Assert.hpp\"", own_header.as_str()]);
    w.open_namespaces(&definition.name.namespace);

    w.section("Operators");

    w.line(&format!("{}& {} ::", name, name));
    w.line(&format!("  operator=(const {}& obj)", name));
    w.line("{");
    w.line("  this->e = obj.e;");
    w.line("  return *this;");
    w.line("}");
    w.blank();

    w.line(&format!("{}& {} ::", name, name));
    w.line("  operator=(T e)");
    w.line("{");
    w.line("  this->e = e;");
    w.line("  return *this;");
    w.line("}");
    w.blank();

    w.directive("#ifdef BUILD_UT");
    w.blank();
    w.line(&format!(
        "std::ostream& operator<<(std::ostream& os, const {}& obj) {{",
        name
    ));
    w.line("  Fw::String s;");
    w.line("  obj.toString(s);");
    w.line("  os << s;");
    w.line("  return os;");
    w.line("}");
    w.blank();
    w.directive("#endif");
    w.blank();

    w.section("Member functions");

    w.line(&format!("bool {} ::", name));
    w.line("  isValid() const");
    w.line("{");
    w.line(&format!("  return {};", validity_condition(layout)));
    w.line("}");
    w.blank();

    w.line(&format!("Fw::SerializeStatus {} ::", name));
    w.line("  serialize(Fw::SerializeBufferBase& buffer) const");
    w.line("{");
    w.line("  const Fw::SerializeStatus status = buffer.serialize(");
    w.line("      static_cast<SerialType>(this->e)");
    w.line("  );");
    w.line("  return status;");
    w.line("}");
    w.blank();

    w.line(&format!("Fw::SerializeStatus {} ::", name));
    w.line("  deserialize(Fw::SerializeBufferBase& buffer)");
    w.line("{");
    w.line("  SerialType es;");
    w.line("  Fw::SerializeStatus status = buffer.deserialize(es);");
    w.line(&format!(
        "  if (status == {}) {{",
        SerializeStatus::Ok.cpp_name()
    ));
    w.line("    this->e = static_cast<T>(es);");
    w.line("    if (!this->isValid()) {");
    w.line(&format!(
        "      status = {};",
        SerializeStatus::DeserializeFormatError.cpp_name()
    ));
    w.line("    }");
    w.line("  }");
    w.line("  return status;");
    w.line("}");
    w.blank();

    w.directive("#if FW_SERIALIZABLE_TO_STRING || BUILD_UT");
    w.blank();
    w.line(&format!("void {} ::", name));
    w.line("  toString(Fw::StringBase& sb) const");
    w.line("{");
    w.indent();
    let (format, argument) = ordinal_format(definition.serial_kind);
    match options.name_lookup {
        NameLookup::Switch => {
            emit_switch_lookup(&mut w, definition);
            w.line(&format!("sb.format({}, s.toChar(), {});", format, argument));
        }
        NameLookup::Table => {
            emit_table_lookup(&mut w, definition);
            w.line(&format!("sb.format({}, s, {});", format, argument));
        }
    }
    w.outdent();
    w.line("}");
    w.blank();
    w.directive("#endif");
    w.blank();

    w.close_namespaces(&definition.name.namespace);
    w.finish()
}

fn emit_switch_lookup(w: &mut CppWriter, definition: &EnumDefinition) {
    w.line("Fw::String s;");
    w.line("switch (e) {");
    for member in &definition.members {
        w.line(&format!("  case {}:", member.name));
        w.line(&format!("    s = \"{}\";", member.name));
        w.line("    break;");
    }
    w.line("  default:");
    w.line(&format!("    s = \"{}\";", INVALID_LABEL));
    w.line("    break;");
    w.line("}");
}

fn emit_table_lookup(w: &mut CppWriter, definition: &EnumDefinition) {
    w.line("static const struct {");
    w.line("  T value;");
    w.line("  const char* name;");
    w.line("} names[NUM_CONSTANTS] = {");
    for member in &definition.members {
        w.line(&format!("  {{ {}, \"{}\" }},", member.name, member.name));
    }
    w.line("};");
    w.line(&format!("const char* s = \"{}\";", INVALID_LABEL));
    w.line("for (FwSizeType i = 0; i < NUM_CONSTANTS; i++) {");
    w.line("  if (names[i].value == e) {");
    w.line("    s = names[i].name;");
    w.line("    break;");
    w.line("  }");
    w.line("}");
}

fn emit_header(layout: &EnumLayout, base_name: &str) -> String {
    let definition = layout.definition();
    let name = &definition.name.name;
    let guard = {
        let mut parts = definition.name.namespace.clone();
        parts.push(base_name.to_string());
        parts.push("HPP".to_string());
        parts.join("_")
    };
    let mut w = CppWriter::new();

    w.banner(
        &format!("{}.hpp", base_name),
        &format!("hpp file for {} enum", name),
    );
    w.open_guard(&guard);
    w.includes(&[
        "\"FpConfig.hpp\"",
        "\"Fw/Types/Serializable.hpp\"",
        "\"Fw/Types/String.hpp\"",
    ]);
    w.open_namespaces(&definition.name.namespace);

    w.annotation(definition.annotation.as_deref());
    w.line(&format!("class {} :", name));
    w.line("  public Fw::Serializable");
    w.line("{");
    w.blank();
    w.indent();

    w.line("public:");
    w.blank();
    w.indent();
    w.section("Types");
    w.line("//! The serial representation type");
    w.line(&format!("typedef {} SerialType;", definition.serial_kind.name()));
    w.blank();
    w.line("//! The raw enum type");
    w.line("enum T {");
    w.indent();
    for member in &definition.members {
        w.annotation(member.annotation.as_deref());
        w.line(&format!("{} = {},", member.name, member.ordinal));
    }
    w.outdent();
    w.line("};");
    w.blank();
    w.line("//! For backwards compatibility");
    w.line("typedef T t;");
    w.blank();
    w.outdent();

    w.line("public:");
    w.blank();
    w.indent();
    w.section("Constants");
    w.line("enum {");
    w.line("  //! The size of the serial representation");
    w.line("  SERIALIZED_SIZE = sizeof(SerialType),");
    w.line("  //! The number of enumerated constants");
    w.line(&format!("  NUM_CONSTANTS = {},", definition.members.len()));
    w.line("};");
    w.blank();
    w.outdent();

    w.line("public:");
    w.blank();
    w.indent();
    w.section("Constructors");
    let default_value = match definition.default_member() {
        Some(member) => member.name.clone(),
        None => "static_cast<T>(0)".to_string(),
    };
    w.line(&format!("//! Constructor (default value of {})", default_value));
    w.line(&format!("{}()", name));
    w.line("{");
    w.line(&format!("  this->e = {};", default_value));
    w.line("}");
    w.blank();
    w.line("//! Constructor (user-provided value)");
    w.line(&format!("{}(", name));
    w.line("    const T e //!< The raw enum value");
    w.line(")");
    w.line("{");
    w.line("  this->e = e;");
    w.line("}");
    w.blank();
    w.line("//! Copy constructor");
    w.line(&format!("{}(", name));
    w.line(&format!("    const {}& obj //!< The source object", name));
    w.line(")");
    w.line("{");
    w.line("  this->e = obj.e;");
    w.line("}");
    w.blank();
    w.outdent();

    w.line("public:");
    w.blank();
    w.indent();
    w.section("Operators");
    w.line("//! Copy assignment operator (object)");
    w.line(&format!("{}& operator=(", name));
    w.line(&format!("    const {}& obj //!< The source object", name));
    w.line(");");
    w.blank();
    w.line("//! Copy assignment operator (raw enum)");
    w.line(&format!("{}& operator=(", name));
    w.line("    T e //!< The enum value");
    w.line(");");
    w.blank();
    w.line("//! Conversion operator");
    w.line("operator T() const");
    w.line("{");
    w.line("  return this->e;");
    w.line("}");
    w.blank();
    w.line("//! Equality operator");
    w.line("bool operator==(T e) const");
    w.line("{");
    w.line("  return this->e == e;");
    w.line("}");
    w.blank();
    w.line("//! Inequality operator");
    w.line("bool operator!=(T e) const");
    w.line("{");
    w.line("  return !(*this == e);");
    w.line("}");
    w.blank();
    w.directive("#ifdef BUILD_UT");
    w.blank();
    w.line("//! Ostream operator");
    w.line("friend std::ostream& operator<<(");
    w.line("    std::ostream& os, //!< The ostream");
    w.line(&format!("    const {}& obj //!< The object", name));
    w.line(");");
    w.blank();
    w.directive("#endif");
    w.blank();
    w.outdent();

    w.line("public:");
    w.blank();
    w.indent();
    w.section("Member functions");
    w.line("//! Check raw enum value for validity");
    w.line("bool isValid() const;");
    w.blank();
    w.line("//! Serialize raw enum value to SerialType");
    w.line("Fw::SerializeStatus serialize(");
    w.line("    Fw::SerializeBufferBase& buffer //!< The serial buffer");
    w.line(") const;");
    w.blank();
    w.line("//! Deserialize raw enum value from SerialType");
    w.line("Fw::SerializeStatus deserialize(");
    w.line("    Fw::SerializeBufferBase& buffer //!< The serial buffer");
    w.line(");");
    w.blank();
    w.directive("#if FW_SERIALIZABLE_TO_STRING || BUILD_UT");
    w.blank();
    w.line("//! Convert enum to string");
    w.line("void toString(");
    w.line("    Fw::StringBase& sb //!< The StringBase object to hold the result");
    w.line(") const;");
    w.blank();
    w.directive("#endif");
    w.blank();
    w.outdent();

    w.line("public:");
    w.blank();
    w.indent();
    w.section("Member variables");
    w.line("//! The raw enum value");
    w.line("T e;");
    w.blank();
    w.outdent();

    w.outdent();
    w.line("};");
    w.blank();

    w.close_namespaces(&definition.name.namespace);
    w.blank();
    w.directive("#endif");
    w.finish()
}
