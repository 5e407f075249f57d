//! A host-side model of the serial buffer that generated code writes to and
//! reads from, and of the generated enumeration `serialize` and
//! `deserialize` functions.
//!
//! Values are big-endian and occupy exactly the size of their serial kind.
use fppgen_model::enums::SerialKind;

use crate::enum_layout::EnumLayout;
use crate::status::SerializeStatus;

/// A buffer with a fixed capacity that is written front to back and read
/// front to back.
#[derive(Clone, Debug)]
pub struct SerialBuffer {
    data: Vec<u8>,
    capacity: usize,
    read_pos: usize,
}

impl SerialBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            read_pos: 0,
        }
    }

    /// Creates a buffer already holding the bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
            capacity: bytes.len(),
            read_pos: 0,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Appends the value as the serial kind. The value is truncated to the
    /// size of the kind.
    pub fn serialize(&mut self, kind: SerialKind, value: i64) -> SerializeStatus {
        let size = kind.size();
        if self.data.len() + size > self.capacity {
            return SerializeStatus::NoRoomLeft;
        }
        let bytes = value.to_be_bytes();
        self.data.extend_from_slice(&bytes[bytes.len() - size..]);
        SerializeStatus::Ok
    }

    /// Reads the next value of the serial kind.
    pub fn deserialize(&mut self, kind: SerialKind) -> Result<i64, SerializeStatus> {
        let size = kind.size();
        let end = self.read_pos + size;
        let Some(slice) = self.data.get(self.read_pos..end) else {
            return Err(SerializeStatus::BufferEmpty);
        };

        let fill = if kind.is_signed() && slice[0] & 0x80 != 0 {
            0xFF
        } else {
            0x00
        };
        let mut bytes = [fill; 8];
        bytes[8 - size..].copy_from_slice(slice);
        self.read_pos = end;
        Ok(i64::from_be_bytes(bytes))
    }

    /// Restarts reading from the first byte.
    pub fn reset_deserialization(&mut self) {
        self.read_pos = 0;
    }
}

impl EnumLayout<'_> {
    /// Does what generated `serialize` does: writes the raw value as the
    /// serial kind and returns the buffer status unchanged.
    pub fn serialize(&self, buffer: &mut SerialBuffer, raw: i64) -> SerializeStatus {
        buffer.serialize(self.definition().serial_kind, raw)
    }

    /// Does what generated `deserialize` does. Returns the status and the
    /// stored raw value, which is `None` when nothing could be read.
    ///
    /// A value that was read but is not valid is still stored, and the
    /// status becomes `DeserializeFormatError`.
    pub fn deserialize(&self, buffer: &mut SerialBuffer) -> (SerializeStatus, Option<i64>) {
        match buffer.deserialize(self.definition().serial_kind) {
            Ok(raw) if self.is_valid(raw) => (SerializeStatus::Ok, Some(raw)),
            Ok(raw) => (SerializeStatus::DeserializeFormatError, Some(raw)),
            Err(status) => (status, None),
        }
    }
}
