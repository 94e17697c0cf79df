#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = 1 + data[0] as usize % (data.len() - 1);
    let (r, s) = data[1..].split_at(split.min(data.len() - 2));
    if r.is_empty() || s.is_empty() {
        return;
    }
    let der = ectime_utils::asn1::encode_signature(r, s).unwrap();
    let (r2, s2) = ectime_utils::asn1::decode_signature(&der).unwrap();
    assert_eq!(r2, ectime_utils::asn1::normalize_unsigned(r).unwrap());
    assert_eq!(s2, ectime_utils::asn1::normalize_unsigned(s).unwrap());
});
