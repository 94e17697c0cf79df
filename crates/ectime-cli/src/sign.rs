//! Signature timing collection.
//!
//! Output format, one record per line on stdout:
//!
//! ```text
//! <public key hex> <message hex> [<private scalar hex>]
//! <r hex>,<s hex>,<elapsed ns>      (--output rs)
//! <signature der hex>,<elapsed ns>  (--output der)
//! ```
//!
//! The private scalar is only printed with `--debug-key`.

use std::io::{self, Write};
use std::time::Duration;

use ectime_types::{CurveId, HashId};
use ectime_utils::asn1::strip_sign_pad;
use tracing::{debug, info, warn};

use crate::backend::{self, Backend, Clock};
use crate::digest::digest;

const MAX_MESSAGE_LEN: usize = 4096;

/// Timings kept for the median estimate.
const MEDIAN_SAMPLE_CAP: usize = 1 << 16;

/// How each signature line is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `r,s,elapsed` with `r` and `s` as unsigned hex.
    Rs,
    /// `der,elapsed` with the DER signature as hex.
    Der,
}

/// Collection settings that do not depend on the curve or hash.
#[derive(Debug, Clone, Copy)]
pub struct SignOptions {
    pub backend: Backend,
    pub output: OutputFormat,
    pub message_len: usize,
    pub clock: Clock,
    /// Append the private scalar to the header line.
    pub debug_key: bool,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            backend: Backend::Fixed,
            output: OutputFormat::Rs,
            message_len: 64,
            clock: Clock::default(),
            debug_key: false,
        }
    }
}

/// Resolved parameters for one collection run.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub curve: CurveId,
    pub hash: HashId,
    pub options: SignOptions,
}

pub fn run(
    curve: &str,
    hash: &str,
    count: usize,
    options: SignOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session {
        hash: HashId::from_name(hash)?,
        curve: CurveId::from_name(curve)?,
        options,
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    collect(&session, count, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Generate a key and a random message, then write `count` timed signatures to `out`.
pub fn collect<W: Write>(
    session: &Session,
    count: usize,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = &session.options;
    if options.message_len == 0 || options.message_len > MAX_MESSAGE_LEN {
        return Err(format!("message length must be between 1 and {MAX_MESSAGE_LEN}").into());
    }

    let source = backend::generate(session.curve, options.backend, options.clock);
    info!(
        curve = session.curve.name(),
        hash = session.hash.name(),
        backend = ?options.backend,
        clock = ?options.clock,
        "generated signing key"
    );

    let mut message = vec![0u8; options.message_len];
    getrandom::getrandom(&mut message).map_err(|e| format!("getrandom failed: {e}"))?;
    write!(
        out,
        "{} {}",
        hex::encode(source.public_key()),
        hex::encode(&message)
    )?;
    if options.debug_key {
        warn!("private key written to output");
        write!(out, " {}", hex::encode(source.private_key()))?;
    }
    writeln!(out)?;

    let hashed = digest(session.hash, &message);
    debug!(digest = %hex::encode(&hashed), "message digest");

    let mut summary = TimingSummary::default();
    for _ in 0..count {
        let (raw, elapsed) = source.sign(&hashed)?;
        let ns = elapsed.as_nanos();
        match options.output {
            OutputFormat::Rs => {
                let (r, s) = raw.components()?;
                writeln!(
                    out,
                    "{},{},{ns}",
                    hex::encode(strip_sign_pad(&r)),
                    hex::encode(strip_sign_pad(&s))
                )?;
            }
            OutputFormat::Der => {
                writeln!(out, "{},{ns}", hex::encode(raw.to_der()?))?;
            }
        }
        summary.record(elapsed);
    }

    if let Some((min, median, max)) = summary.finish() {
        info!(count = summary.count, ?min, ?median, ?max, "signing time");
    }
    Ok(())
}

/// Running minimum and maximum over every timing, with the median taken
/// from the first `MEDIAN_SAMPLE_CAP` timings.
#[derive(Debug, Default)]
struct TimingSummary {
    count: u64,
    min: Duration,
    max: Duration,
    samples: Vec<Duration>,
}

impl TimingSummary {
    fn record(&mut self, elapsed: Duration) {
        if self.count == 0 || elapsed < self.min {
            self.min = elapsed;
        }
        if elapsed > self.max {
            self.max = elapsed;
        }
        self.count += 1;
        if self.samples.len() < MEDIAN_SAMPLE_CAP {
            self.samples.push(elapsed);
        }
    }

    /// Minimum, median and maximum, or `None` if nothing was recorded.
    fn finish(&mut self) -> Option<(Duration, Duration, Duration)> {
        if self.count == 0 {
            return None;
        }
        self.samples.sort_unstable();
        Some((self.min, self.samples[self.samples.len() / 2], self.max))
    }
}
