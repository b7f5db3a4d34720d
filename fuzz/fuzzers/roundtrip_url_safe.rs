#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use bin2text::base64::Mode;

mod utils;

fuzz_target!(|data: &[u8]| {
    let encoded = utils::encode_vec(Mode::UrlSafe, data);

    let mut decoded = vec![0_u8; data.len()];
    assert_eq!(Ok(data.len()), Mode::UrlSafe.decode(&encoded, &mut decoded));
    assert_eq!(data, decoded.as_slice());
});
