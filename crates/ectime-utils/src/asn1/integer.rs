//! Unsigned INTEGER content normalization.

use ectime_types::CodecError;

/// Produce the DER-minimal content octets for an unsigned big-endian magnitude.
///
/// Leading zero bytes are stripped (an all-zero input becomes a single `0x00`),
/// then one `0x00` is prepended if the top bit of the first byte is set so the
/// value is not read back as negative.
pub fn normalize_unsigned(raw: &[u8]) -> Result<Vec<u8>, CodecError> {
    if raw.is_empty() {
        return Err(CodecError::InvalidArgument);
    }
    let skip = raw[..raw.len() - 1].iter().take_while(|&&b| b == 0).count();
    let digits = &raw[skip..];

    let mut out = Vec::with_capacity(digits.len() + 1);
    if digits[0] & 0x80 != 0 {
        out.push(0x00);
    }
    out.extend_from_slice(digits);
    Ok(out)
}

/// Check that `value` is a DER-minimal, non-negative INTEGER content.
pub fn is_minimal_unsigned(value: &[u8]) -> bool {
    match value {
        [] => false,
        [first, ..] if first & 0x80 != 0 => false,
        [0x00, second, ..] => second & 0x80 != 0,
        _ => true,
    }
}

/// Drop the sign-padding byte of a DER-minimal value, leaving the plain magnitude.
pub fn strip_sign_pad(value: &[u8]) -> &[u8] {
    match value {
        [0x00, second, ..] if second & 0x80 != 0 => &value[1..],
        _ => value,
    }
}
