#![forbid(unsafe_code)]
#![doc = "Utility functions for ectime: ASN.1 DER encoding of ECDSA signatures."]

#[cfg(feature = "asn1")]
pub mod asn1;
