//! DER definite-length encoding.

use ectime_types::CodecError;

/// Encode `length` as a DER definite length (short form below 128, long form otherwise).
pub fn encode_length(length: usize) -> Vec<u8> {
    if length < 0x80 {
        return vec![length as u8];
    }
    let be = length.to_be_bytes();
    let skip = be.iter().take_while(|&&b| b == 0).count();
    let digits = &be[skip..];

    let mut out = Vec::with_capacity(1 + digits.len());
    out.push(0x80 | digits.len() as u8);
    out.extend_from_slice(digits);
    out
}

/// Decode a DER length starting at `offset`.
/// Returns the length and the number of bytes consumed.
pub fn decode_length(input: &[u8], offset: usize) -> Result<(usize, usize), CodecError> {
    let first = *input.get(offset).ok_or(CodecError::TruncatedInput)?;
    if first & 0x80 == 0 {
        return Ok((first as usize, 1));
    }

    let num_bytes = (first & 0x7F) as usize;
    if num_bytes == 0 {
        // Indefinite length is BER only
        return Err(CodecError::MalformedEncoding);
    }
    let start = offset + 1;
    let digits = input
        .get(start..start + num_bytes)
        .ok_or(CodecError::TruncatedInput)?;
    if digits[0] == 0 {
        return Err(CodecError::MalformedEncoding);
    }

    let mut length: usize = 0;
    for &b in digits {
        length = length
            .checked_mul(256)
            .and_then(|l| l.checked_add(b as usize))
            .ok_or(CodecError::MalformedEncoding)?;
    }
    if length < 0x80 {
        // Must have used the short form
        return Err(CodecError::MalformedEncoding);
    }
    Ok((length, 1 + num_bytes))
}
