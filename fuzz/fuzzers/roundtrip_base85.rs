#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use bin2text::base85;

mod utils;

fuzz_target!(|data: &[u8]| {
    let (_, alphabet) = utils::random_choices(data);

    let mut encoded = vec![0_u8; base85::encoded_len(data.len()).unwrap() + 1];
    let written = base85::encode(&alphabet, data, &mut encoded);
    encoded.truncate(written);

    let mut decoded = vec![0_u8; data.len()];
    assert_eq!(Ok(data.len()), base85::decode(&alphabet, &encoded, &mut decoded));
    assert_eq!(data, decoded.as_slice());
});
