//! Enumerations and the integer kinds that store them.
use std::fmt;
use std::ops::RangeInclusive;

use crate::core::QualifiedName;

/// The integer kind used to store and serialize an enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SerialKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    #[default]
    I32,
    I64,
}

impl SerialKind {
    /// All kinds, unsigned first.
    pub const ALL: [SerialKind; 8] = [
        SerialKind::U8,
        SerialKind::U16,
        SerialKind::U32,
        SerialKind::U64,
        SerialKind::I8,
        SerialKind::I16,
        SerialKind::I32,
        SerialKind::I64,
    ];

    /// Returns the kind whose name is `name`, such as `U32`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The type name used by the target framework.
    pub fn name(&self) -> &'static str {
        match self {
            SerialKind::U8 => "U8",
            SerialKind::U16 => "U16",
            SerialKind::U32 => "U32",
            SerialKind::U64 => "U64",
            SerialKind::I8 => "I8",
            SerialKind::I16 => "I16",
            SerialKind::I32 => "I32",
            SerialKind::I64 => "I64",
        }
    }

    /// Number of bytes in the serialized form.
    pub fn size(&self) -> usize {
        match self {
            SerialKind::U8 | SerialKind::I8 => 1,
            SerialKind::U16 | SerialKind::I16 => 2,
            SerialKind::U32 | SerialKind::I32 => 4,
            SerialKind::U64 | SerialKind::I64 => 8,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            SerialKind::I8 | SerialKind::I16 | SerialKind::I32 | SerialKind::I64
        )
    }

    /// The values representable by the kind.
    ///
    /// Ordinals are held as `i64`, so `U64` is limited to the non-negative
    /// half of its range.
    pub fn range(&self) -> RangeInclusive<i64> {
        match self {
            SerialKind::U8 => 0..=i64::from(u8::MAX),
            SerialKind::U16 => 0..=i64::from(u16::MAX),
            SerialKind::U32 => 0..=i64::from(u32::MAX),
            SerialKind::U64 => 0..=i64::MAX,
            SerialKind::I8 => i64::from(i8::MIN)..=i64::from(i8::MAX),
            SerialKind::I16 => i64::from(i16::MIN)..=i64::from(i16::MAX),
            SerialKind::I32 => i64::from(i32::MIN)..=i64::from(i32::MAX),
            SerialKind::I64 => i64::MIN..=i64::MAX,
        }
    }
}

impl fmt::Display for SerialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named value of an enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub ordinal: i64,
    pub annotation: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, ordinal: i64) -> Self {
        Self {
            name: name.into(),
            ordinal,
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

/// A named enumeration with members in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDefinition {
    pub name: QualifiedName,
    pub serial_kind: SerialKind,
    pub members: Vec<EnumMember>,
    /// Name of the member used by the default constructor. `None` means
    /// the first member.
    pub default: Option<String>,
    pub annotation: Option<String>,
}

impl EnumDefinition {
    pub fn new(name: impl Into<QualifiedName>, members: Vec<EnumMember>) -> Self {
        Self {
            name: name.into(),
            serial_kind: SerialKind::default(),
            members,
            default: None,
            annotation: None,
        }
    }

    pub fn with_serial_kind(mut self, kind: SerialKind) -> Self {
        self.serial_kind = kind;
        self
    }

    pub fn with_default(mut self, member: impl Into<String>) -> Self {
        self.default = Some(member.into());
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// The name shared by the generated header and definition file.
    pub fn file_base_name(&self) -> String {
        format!("{}EnumAc", self.name.name)
    }

    /// Returns the member used by the default constructor.
    pub fn default_member(&self) -> Option<&EnumMember> {
        match &self.default {
            Some(name) => self.members.iter().find(|m| &m.name == name),
            None => self.members.first(),
        }
    }

    /// Returns the member with the smallest ordinal.
    pub fn min_member(&self) -> Option<&EnumMember> {
        self.members.iter().min_by_key(|m| m.ordinal)
    }

    /// Returns the member with the largest ordinal.
    pub fn max_member(&self) -> Option<&EnumMember> {
        self.members.iter().max_by_key(|m| m.ordinal)
    }
}
