#![no_main]

use libfuzzer_sys::fuzz_target;
use oscore_cbor::decode::Decoder;

fuzz_target!(|data: &[u8]| {
    let mut decoder = Decoder::new(data);
    let start = decoder.offset();
    if let Ok(len) = decoder.clone().skip_value() {
        let item = decoder.strip_value().expect("strip must agree with skip");
        assert_eq!(item.len(), len);
        assert_eq!(item, data[start..start + len]);
    }
});
