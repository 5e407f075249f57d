//! The status vocabulary of the target serialization runtime.

/// Status returned by `serialize` and `deserialize` in generated code.
///
/// Every value except `DeserializeFormatError` originates in the byte
/// buffer. Generated enumerations add `DeserializeFormatError` when bytes
/// were read successfully but do not hold a valid ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SerializeStatus {
    Ok,
    /// Writing would exceed the buffer capacity.
    NoRoomLeft,
    /// Reading would go past the written data.
    BufferEmpty,
    /// The buffer rejected the data it was asked to write.
    SerializeFormatError,
    /// The data was read but is not a valid value.
    DeserializeFormatError,
}

impl SerializeStatus {
    /// The C++ name of the status.
    pub fn cpp_name(&self) -> &'static str {
        match self {
            SerializeStatus::Ok => "Fw::FW_SERIALIZE_OK",
            SerializeStatus::NoRoomLeft => "Fw::FW_SERIALIZE_NO_ROOM_LEFT",
            SerializeStatus::BufferEmpty => "Fw::FW_DESERIALIZE_BUFFER_EMPTY",
            SerializeStatus::SerializeFormatError => "Fw::FW_SERIALIZE_FORMAT_ERROR",
            SerializeStatus::DeserializeFormatError => "Fw::FW_DESERIALIZE_FORMAT_ERROR",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, SerializeStatus::Ok)
    }
}
