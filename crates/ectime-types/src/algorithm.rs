use crate::HarnessError;

/// Elliptic curve identifiers supported by the signing harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    Secp256r1,
    Secp384r1,
    Secp256k1,
}

/// Name aliases accepted for each curve (matched case-insensitively).
const CURVE_NAMES: &[(&str, CurveId)] = &[
    ("secp256r1", CurveId::Secp256r1),
    ("prime256v1", CurveId::Secp256r1),
    ("p-256", CurveId::Secp256r1),
    ("p256", CurveId::Secp256r1),
    ("secp384r1", CurveId::Secp384r1),
    ("p-384", CurveId::Secp384r1),
    ("p384", CurveId::Secp384r1),
    ("secp256k1", CurveId::Secp256k1),
];

impl CurveId {
    pub const ALL: [CurveId; 3] = [CurveId::Secp256r1, CurveId::Secp384r1, CurveId::Secp256k1];

    /// Look up a curve by any of its names.
    pub fn from_name(name: &str) -> Result<Self, HarnessError> {
        CURVE_NAMES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, id)| *id)
            .ok_or_else(|| HarnessError::UnknownCurve(name.to_string()))
    }

    /// Canonical SEC 2 name.
    pub fn name(&self) -> &'static str {
        match self {
            CurveId::Secp256r1 => "secp256r1",
            CurveId::Secp384r1 => "secp384r1",
            CurveId::Secp256k1 => "secp256k1",
        }
    }

    /// Size of a field element (and of R and S) in bytes.
    pub fn field_size(&self) -> usize {
        match self {
            CurveId::Secp256r1 | CurveId::Secp256k1 => 32,
            CurveId::Secp384r1 => 48,
        }
    }

    /// Length of an uncompressed SEC1 public key point.
    pub fn public_key_len(&self) -> usize {
        1 + 2 * self.field_size()
    }
}

/// Message digest applied before signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashId {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    /// The message is signed as-is.
    None,
}

const HASH_NAMES: &[(&str, HashId)] = &[
    ("sha1", HashId::Sha1),
    ("sha-1", HashId::Sha1),
    ("sha224", HashId::Sha224),
    ("sha-224", HashId::Sha224),
    ("sha256", HashId::Sha256),
    ("sha-256", HashId::Sha256),
    ("sha384", HashId::Sha384),
    ("sha-384", HashId::Sha384),
    ("sha512", HashId::Sha512),
    ("sha-512", HashId::Sha512),
    ("none", HashId::None),
];

impl HashId {
    pub const ALL: [HashId; 6] = [
        HashId::Sha1,
        HashId::Sha224,
        HashId::Sha256,
        HashId::Sha384,
        HashId::Sha512,
        HashId::None,
    ];

    /// Look up a hash by name.
    pub fn from_name(name: &str) -> Result<Self, HarnessError> {
        HASH_NAMES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, id)| *id)
            .ok_or_else(|| HarnessError::UnknownHash(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            HashId::Sha1 => "SHA1",
            HashId::Sha224 => "SHA224",
            HashId::Sha256 => "SHA256",
            HashId::Sha384 => "SHA384",
            HashId::Sha512 => "SHA512",
            HashId::None => "NONE",
        }
    }

    /// Digest output length, or `None` when the message passes through unchanged.
    pub fn digest_len(&self) -> Option<usize> {
        match self {
            HashId::Sha1 => Some(20),
            HashId::Sha224 => Some(28),
            HashId::Sha256 => Some(32),
            HashId::Sha384 => Some(48),
            HashId::Sha512 => Some(64),
            HashId::None => None,
        }
    }
}
