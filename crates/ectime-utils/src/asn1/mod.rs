//! ASN.1 DER encoding and decoding, restricted to what ECDSA signatures need.

mod decoder;
mod encoder;
mod integer;
mod length;
mod signature;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use integer::{is_minimal_unsigned, normalize_unsigned, strip_sign_pad};
pub use length::{decode_length, encode_length};
pub use signature::{decode_signature, encode_signature};

/// ASN.1 tag constants.
pub mod tags {
    pub const INTEGER: u8 = 0x02;
    pub const SEQUENCE: u8 = 0x30;
}

/// A borrowed ASN.1 TLV element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub tag: u8,
    pub value: &'a [u8],
}
