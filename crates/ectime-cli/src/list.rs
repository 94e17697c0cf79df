//! List supported curves and hash algorithms.

use std::io::Write;

use ectime_types::{CurveId, HashId};

pub fn run<W: Write>(out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "Curves:")?;
    for curve in CurveId::ALL {
        writeln!(
            out,
            "  {:<12} {:>3}-byte field",
            curve.name(),
            curve.field_size()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Hashes:")?;
    for hash in HashId::ALL {
        match hash.digest_len() {
            Some(len) => writeln!(out, "  {:<12} {len:>3}-byte digest", hash.name())?,
            None => writeln!(out, "  {:<12} message signed as-is", hash.name())?,
        }
    }
    Ok(())
}
