//! Message digests applied before signing.

use ectime_types::HashId;
use sha2::Digest;

/// Hash `data` with `hash`. `HashId::None` passes the message through unchanged.
pub fn digest(hash: HashId, data: &[u8]) -> Vec<u8> {
    match hash {
        HashId::Sha1 => sha1::Sha1::digest(data).to_vec(),
        HashId::Sha224 => sha2::Sha224::digest(data).to_vec(),
        HashId::Sha256 => sha2::Sha256::digest(data).to_vec(),
        HashId::Sha384 => sha2::Sha384::digest(data).to_vec(),
        HashId::Sha512 => sha2::Sha512::digest(data).to_vec(),
        HashId::None => data.to_vec(),
    }
}
