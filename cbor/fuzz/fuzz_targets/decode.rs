#![no_main]

use libfuzzer_sys::fuzz_target;
use oscore_cbor::{MajorType, decode::Decoder};

fuzz_target!(|data: &[u8]| {
    let mut decoder = Decoder::new(data);
    while let Ok(major) = decoder.get_next_element() {
        let r = match major {
            MajorType::Unsigned | MajorType::Negative => decoder.get_number().map(|_| ()),
            MajorType::Bytes | MajorType::Text => decoder.get_string_array().map(|_| ()),
            MajorType::Simple => decoder.get_simple_value().map(|_| ()),
            _ => decoder.get_element_size().map(|_| ()),
        };
        if r.is_err() {
            break;
        }
    }
});
