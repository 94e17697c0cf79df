//! ASN.1 DER encoder.

use super::{encode_length, normalize_unsigned, tags};
use ectime_types::CodecError;

/// A builder for constructing DER-encoded ASN.1 data.
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Consume the encoder and return the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Write a raw TLV with the given tag byte and value.
    pub fn write_tlv(&mut self, tag: u8, value: &[u8]) -> &mut Self {
        self.buf.push(tag);
        self.buf.extend_from_slice(&encode_length(value.len()));
        self.buf.extend_from_slice(value);
        self
    }

    /// Write an INTEGER from an unsigned big-endian magnitude, normalized to DER-minimal form.
    pub fn write_integer(&mut self, value: &[u8]) -> Result<&mut Self, CodecError> {
        let content = normalize_unsigned(value)?;
        Ok(self.write_tlv(tags::INTEGER, &content))
    }

    /// Write a SEQUENCE wrapping the given (already encoded) contents.
    pub fn write_sequence(&mut self, contents: &[u8]) -> &mut Self {
        self.write_tlv(tags::SEQUENCE, contents)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
