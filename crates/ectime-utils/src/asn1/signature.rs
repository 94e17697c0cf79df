//! ECDSA signature encoding: `SEQUENCE { r INTEGER, s INTEGER }`.

use super::{Decoder, Encoder};
use ectime_types::CodecError;

/// Encode raw unsigned big-endian `r` and `s` as a DER ECDSA signature.
///
/// `r` and `s` may carry fixed-width zero padding; both are normalized before encoding.
pub fn encode_signature(r: &[u8], s: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut inner = Encoder::new();
    inner.write_integer(r)?.write_integer(s)?;

    let mut outer = Encoder::new();
    outer.write_sequence(&inner.finish());
    Ok(outer.finish())
}

/// Decode a DER ECDSA signature into its DER-minimal `(r, s)` contents.
///
/// The whole buffer must be exactly one SEQUENCE holding exactly two INTEGERs.
pub fn decode_signature(input: &[u8]) -> Result<(Vec<u8>, Vec<u8>), CodecError> {
    let mut outer = Decoder::new(input);
    let mut seq = outer.read_sequence()?;
    outer.finish()?;

    let r = seq.read_integer()?;
    let s = seq.read_integer()?;
    seq.finish()?;

    Ok((r.to_vec(), s.to_vec()))
}
