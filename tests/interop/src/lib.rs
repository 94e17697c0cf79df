//! Integration tests for ectime.
//! Cross-checks the DER codec against the RustCrypto `ecdsa` implementation
//! and verifies harness output end to end.

#[cfg(test)]
mod tests {
    use ectime_cli::backend::{Backend, Clock};
    use ectime_cli::sign::{collect, OutputFormat, Session, SignOptions};
    use ectime_types::{CurveId, HashId};
    use ectime_utils::asn1::{decode_signature, encode_signature, normalize_unsigned};
    use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
    use sha2::Digest;

    fn left_pad(value: &[u8], width: usize) -> Vec<u8> {
        let mut out = vec![0u8; width - value.len()];
        out.extend_from_slice(value);
        out
    }

    fn collect_lines(session: &Session, count: usize) -> Vec<String> {
        let mut buf = Vec::new();
        collect(session, count, &mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    // -------------------------------------------------------
    // 1. Library DER output decodes to the library's own r and s
    // -------------------------------------------------------
    #[test]
    fn test_decode_matches_rustcrypto_der() {
        let key = p256::ecdsa::SigningKey::from_slice(&[0x42; 32]).unwrap();
        for i in 0..16u8 {
            let digest = sha2::Sha256::digest([i]);
            let sig: p256::ecdsa::Signature = key.sign_prehash(&digest).unwrap();
            let (r, s) = sig.split_bytes();

            let (r2, s2) = decode_signature(sig.to_der().as_bytes()).unwrap();
            assert_eq!(r2, normalize_unsigned(&r).unwrap());
            assert_eq!(s2, normalize_unsigned(&s).unwrap());
        }
    }

    // -------------------------------------------------------
    // 2. Encoding fixed-width r and s matches the library's DER
    // -------------------------------------------------------
    #[test]
    fn test_encode_matches_rustcrypto_der() {
        let key = p384::ecdsa::SigningKey::from_slice(&[0x17; 48]).unwrap();
        for i in 0..16u8 {
            let digest = sha2::Sha384::digest([i]);
            let sig: p384::ecdsa::Signature = key.sign_prehash(&digest).unwrap();
            let (r, s) = sig.split_bytes();

            let der = encode_signature(&r, &s).unwrap();
            assert_eq!(der.as_slice(), sig.to_der().as_bytes());
        }
    }

    // -------------------------------------------------------
    // 3. Small and high-bit scalars: padding and sign byte agree
    // -------------------------------------------------------
    #[test]
    fn test_edge_scalars_match_rustcrypto_der() {
        let mut fixed = left_pad(&[0x01], 48);
        let mut s = vec![0u8; 48];
        s[1] = 0x80;
        fixed.extend_from_slice(&s);
        let sig = p384::ecdsa::Signature::from_slice(&fixed).unwrap();
        let (r, s) = sig.split_bytes();

        let der = encode_signature(&r, &s).unwrap();
        assert_eq!(der.as_slice(), sig.to_der().as_bytes());
        assert_eq!(&der[2..5], &[0x02, 0x01, 0x01]);
        // s: 47 magnitude bytes starting 0x80, one sign pad
        assert_eq!(&der[5..8], &[0x02, 48, 0x00]);

        let parsed = p384::ecdsa::Signature::from_der(&der).unwrap();
        assert_eq!(parsed, sig);
    }

    // -------------------------------------------------------
    // 4. Harness rs output verifies against the printed public key
    // -------------------------------------------------------
    #[test]
    fn test_harness_rs_output_verifies() {
        let session = Session {
            curve: CurveId::Secp256r1,
            hash: HashId::Sha256,
            options: SignOptions {
                backend: Backend::Der,
                output: OutputFormat::Rs,
                message_len: 64,
                clock: Clock::Cpu,
                debug_key: false,
            },
        };
        let lines = collect_lines(&session, 4);
        let (pk_hex, msg_hex) = lines[0].split_once(' ').unwrap();
        let vk = p256::ecdsa::VerifyingKey::from_sec1_bytes(&hex::decode(pk_hex).unwrap())
            .unwrap();
        let digest = sha2::Sha256::digest(hex::decode(msg_hex).unwrap());

        for line in &lines[1..] {
            let fields: Vec<&str> = line.split(',').collect();
            let mut fixed = left_pad(&hex::decode(fields[0]).unwrap(), 32);
            fixed.extend(left_pad(&hex::decode(fields[1]).unwrap(), 32));
            let sig = p256::ecdsa::Signature::from_slice(&fixed).unwrap();
            assert!(vk.verify_prehash(&digest, &sig).is_ok());
        }
    }

    // -------------------------------------------------------
    // 5. Harness der output (encoded from fixed-width r, s) verifies
    // -------------------------------------------------------
    #[test]
    fn test_harness_der_output_verifies() {
        let session = Session {
            curve: CurveId::Secp256k1,
            hash: HashId::Sha512,
            options: SignOptions {
                backend: Backend::Fixed,
                output: OutputFormat::Der,
                message_len: 32,
                clock: Clock::Wall,
                debug_key: false,
            },
        };
        let lines = collect_lines(&session, 4);
        let (pk_hex, msg_hex) = lines[0].split_once(' ').unwrap();
        assert_eq!(msg_hex.len(), 64);
        let vk = k256::ecdsa::VerifyingKey::from_sec1_bytes(&hex::decode(pk_hex).unwrap())
            .unwrap();
        let digest = sha2::Sha512::digest(hex::decode(msg_hex).unwrap());

        for line in &lines[1..] {
            let (der_hex, _) = line.split_once(',').unwrap();
            let sig = k256::ecdsa::Signature::from_der(&hex::decode(der_hex).unwrap()).unwrap();
            assert!(vk.verify_prehash(&digest, &sig).is_ok());
        }
    }

    // -------------------------------------------------------
    // 6. The debug scalar signs for the printed public key
    // -------------------------------------------------------
    #[test]
    fn test_harness_debug_key_matches_public_key() {
        let session = Session {
            curve: CurveId::Secp384r1,
            hash: HashId::Sha384,
            options: SignOptions {
                debug_key: true,
                ..SignOptions::default()
            },
        };
        let lines = collect_lines(&session, 1);
        let header: Vec<&str> = lines[0].split(' ').collect();
        assert_eq!(header.len(), 3);

        let key = p384::ecdsa::SigningKey::from_slice(&hex::decode(header[2]).unwrap()).unwrap();
        let vk = p384::ecdsa::VerifyingKey::from_sec1_bytes(&hex::decode(header[0]).unwrap())
            .unwrap();
        assert_eq!(key.verifying_key(), &vk);

        let digest = sha2::Sha384::digest(b"debug key");
        let sig: p384::ecdsa::Signature = key.sign_prehash(&digest).unwrap();
        assert!(vk.verify_prehash(&digest, &sig).is_ok());
    }

    // -------------------------------------------------------
    // 7. Tampered library DER is rejected by both parsers
    // -------------------------------------------------------
    #[test]
    fn test_trailing_byte_rejected_by_both() {
        let key = p256::ecdsa::SigningKey::from_slice(&[0x07; 32]).unwrap();
        let digest = sha2::Sha256::digest(b"trailing");
        let sig: p256::ecdsa::Signature = key.sign_prehash(&digest).unwrap();
        let mut der = sig.to_der().as_bytes().to_vec();
        der.push(0x00);

        assert!(decode_signature(&der).is_err());
        assert!(p256::ecdsa::Signature::from_der(&der).is_err());
    }
}
