//! Signing backends wrapping the RustCrypto curve crates.
//!
//! A backend reports signatures either as fixed-width `(r, s)` field elements
//! or as a DER buffer, mirroring the two shapes signing libraries expose.

use std::time::{Duration, Instant};

use cpu_time::ProcessTime;
use ectime_types::{CodecError, CurveId, HarnessError};
use ectime_utils::asn1::{decode_signature, encode_signature, normalize_unsigned};
use p256::ecdsa::signature::hazmat::PrehashSigner;
use rand_core::OsRng;

/// How a backend hands back its signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Fixed-width big-endian `r` and `s`.
    Fixed,
    /// A DER `SEQUENCE { r, s }` buffer.
    Der,
}

/// Clock used to time each signing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Clock {
    /// CPU time consumed by the whole process.
    #[default]
    Cpu,
    /// Monotonic wall-clock time.
    Wall,
}

impl Clock {
    /// Run `f` and return its result with the time it took on this clock.
    pub fn measure<T>(self, f: impl FnOnce() -> T) -> Result<(T, Duration), HarnessError> {
        match self {
            Clock::Wall => {
                let start = Instant::now();
                let value = f();
                Ok((value, start.elapsed()))
            }
            Clock::Cpu => {
                let start = ProcessTime::try_now().map_err(clock_failed)?;
                let value = f();
                let end = ProcessTime::try_now().map_err(clock_failed)?;
                Ok((
                    value,
                    end.as_duration().saturating_sub(start.as_duration()),
                ))
            }
        }
    }
}

fn clock_failed(e: std::io::Error) -> HarnessError {
    HarnessError::ClockFailed(e.to_string())
}

/// A signature as produced by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSignature {
    Components { r: Vec<u8>, s: Vec<u8> },
    Der(Vec<u8>),
}

impl RawSignature {
    /// DER-minimal `(r, s)` contents.
    pub fn components(&self) -> Result<(Vec<u8>, Vec<u8>), CodecError> {
        match self {
            RawSignature::Components { r, s } => Ok((normalize_unsigned(r)?, normalize_unsigned(s)?)),
            RawSignature::Der(der) => decode_signature(der),
        }
    }

    /// Canonical DER encoding.
    pub fn to_der(&self) -> Result<Vec<u8>, CodecError> {
        match self {
            RawSignature::Components { r, s } => encode_signature(r, s),
            RawSignature::Der(der) => {
                // reject anything that is not canonical before passing it on
                decode_signature(der)?;
                Ok(der.clone())
            }
        }
    }
}

/// A key pair able to produce timed signatures over a digest.
pub trait SignatureSource {
    fn curve(&self) -> CurveId;

    /// Uncompressed SEC1 public key point.
    fn public_key(&self) -> Vec<u8>;

    /// Big-endian private scalar, zero-padded to the field size.
    fn private_key(&self) -> Vec<u8>;

    /// Sign `digest`, returning the signature and the time spent in the library call.
    fn sign(&self, digest: &[u8]) -> Result<(RawSignature, Duration), HarnessError>;
}

macro_rules! curve_source {
    ($name:ident, $krate:ident, $curve:expr) => {
        struct $name {
            key: $krate::ecdsa::SigningKey,
            backend: Backend,
            clock: Clock,
        }

        impl $name {
            fn generate(backend: Backend, clock: Clock) -> Self {
                Self {
                    key: $krate::ecdsa::SigningKey::random(&mut OsRng),
                    backend,
                    clock,
                }
            }
        }

        impl SignatureSource for $name {
            fn curve(&self) -> CurveId {
                $curve
            }

            fn public_key(&self) -> Vec<u8> {
                self.key
                    .verifying_key()
                    .to_encoded_point(false)
                    .as_bytes()
                    .to_vec()
            }

            fn private_key(&self) -> Vec<u8> {
                self.key.to_bytes().to_vec()
            }

            fn sign(&self, digest: &[u8]) -> Result<(RawSignature, Duration), HarnessError> {
                let (result, elapsed) = self
                    .clock
                    .measure(|| -> Result<$krate::ecdsa::Signature, _> {
                        self.key.sign_prehash(digest)
                    })?;

                let sig = result.map_err(|e| HarnessError::SignFailed(e.to_string()))?;
                let raw = match self.backend {
                    Backend::Fixed => {
                        let (r, s) = sig.split_bytes();
                        RawSignature::Components {
                            r: r.to_vec(),
                            s: s.to_vec(),
                        }
                    }
                    Backend::Der => RawSignature::Der(sig.to_der().as_bytes().to_vec()),
                };
                Ok((raw, elapsed))
            }
        }
    };
}

curve_source!(P256Source, p256, CurveId::Secp256r1);
curve_source!(P384Source, p384, CurveId::Secp384r1);
curve_source!(K256Source, k256, CurveId::Secp256k1);

/// Generate a fresh key pair on `curve`, timing signatures with `clock`.
pub fn generate(curve: CurveId, backend: Backend, clock: Clock) -> Box<dyn SignatureSource> {
    match curve {
        CurveId::Secp256r1 => Box::new(P256Source::generate(backend, clock)),
        CurveId::Secp384r1 => Box::new(P384Source::generate(backend, clock)),
        CurveId::Secp256k1 => Box::new(K256Source::generate(backend, clock)),
    }
}
