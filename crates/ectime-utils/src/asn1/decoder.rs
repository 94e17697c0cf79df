//! ASN.1 DER decoder.

use super::{decode_length, is_minimal_unsigned, tags, Tlv};
use ectime_types::CodecError;

/// A DER decoder over a borrowed buffer.
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Create a new decoder over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the remaining undecoded bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Parse the next TLV element. Only single-byte tags are accepted.
    pub fn read_tlv(&mut self) -> Result<Tlv<'a>, CodecError> {
        let tag = *self.data.get(self.pos).ok_or(CodecError::TruncatedInput)?;
        if tag & 0x1F == 0x1F {
            // High tag number form
            return Err(CodecError::MalformedEncoding);
        }

        let (length, len_len) = decode_length(self.data, self.pos + 1)?;
        let start = self.pos + 1 + len_len;
        let end = start
            .checked_add(length)
            .ok_or(CodecError::MalformedEncoding)?;
        if end > self.data.len() {
            return Err(CodecError::TruncatedInput);
        }

        self.pos = end;
        Ok(Tlv {
            tag,
            value: &self.data[start..end],
        })
    }

    /// Read a non-negative INTEGER and return its DER-minimal content bytes.
    pub fn read_integer(&mut self) -> Result<&'a [u8], CodecError> {
        if self.is_empty() {
            return Err(CodecError::MalformedEncoding);
        }
        if self.data[self.pos] != tags::INTEGER {
            return Err(CodecError::MalformedEncoding);
        }
        let tlv = self.read_tlv()?;
        if !is_minimal_unsigned(tlv.value) {
            return Err(CodecError::MalformedEncoding);
        }
        Ok(tlv.value)
    }

    /// Read a SEQUENCE, returning a sub-decoder over its contents.
    pub fn read_sequence(&mut self) -> Result<Decoder<'a>, CodecError> {
        if self.is_empty() || self.data[self.pos] != tags::SEQUENCE {
            return Err(CodecError::MalformedEncoding);
        }
        let tlv = self.read_tlv()?;
        Ok(Decoder::new(tlv.value))
    }

    /// Require that the whole buffer has been consumed.
    pub fn finish(self) -> Result<(), CodecError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CodecError::TrailingData)
        }
    }
}
