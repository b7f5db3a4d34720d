#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use bin2text::base85;

mod utils;

fuzz_target!(|data: &[u8]| {
    let (mode, alphabet) = utils::random_choices(data);

    // The data probably isn't valid input, but as long as it returns an error instead
    // of crashing, that's correct behavior. When it does decode, the length has to agree.
    let mut buf = vec![0_u8; data.len()];

    let decoded = mode.decode(data, &mut buf);
    assert_eq!(decoded, mode.decoded_len(data));

    let decoded = base85::decode(&alphabet, data, &mut buf);
    if let Ok(len) = base85::decoded_len(&alphabet, data) {
        assert!(decoded.is_err() || decoded == Ok(len));
    }
});
