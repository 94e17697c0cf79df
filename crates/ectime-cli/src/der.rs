//! Convert between `r,s` hex pairs and DER-encoded ECDSA signatures.

use std::io::Write;

use ectime_types::HarnessError;
use ectime_utils::asn1::{decode_signature, encode_signature, strip_sign_pad};

fn parse_hex(input: &str) -> Result<Vec<u8>, HarnessError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    // allow an odd number of digits, e.g. "1" for the value one
    let padded;
    let digits = if digits.len() % 2 == 1 {
        padded = format!("0{digits}");
        padded.as_str()
    } else {
        digits
    };
    hex::decode(digits).map_err(|e| HarnessError::InvalidHex(format!("{input}: {e}")))
}

/// Encode `r` and `s` (unsigned hex) and write the DER signature as hex.
pub fn encode<W: Write>(r: &str, s: &str, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let der = encode_signature(&parse_hex(r)?, &parse_hex(s)?).map_err(HarnessError::from)?;
    writeln!(out, "{}", hex::encode(der))?;
    Ok(())
}

/// Decode a hex DER signature and write `r,s` as unsigned hex.
pub fn decode<W: Write>(der: &str, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let (r, s) = decode_signature(&parse_hex(der)?).map_err(HarnessError::from)?;
    writeln!(
        out,
        "{},{}",
        hex::encode(strip_sign_pad(&r)),
        hex::encode(strip_sign_pad(&s))
    )?;
    Ok(())
}
