#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything accepted must be canonical, so it re-encodes byte for byte.
    if let Ok((r, s)) = ectime_utils::asn1::decode_signature(data) {
        let der = ectime_utils::asn1::encode_signature(&r, &s).unwrap();
        assert_eq!(der, data);
    }
});
