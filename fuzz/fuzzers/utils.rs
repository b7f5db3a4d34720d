use bin2text::base64::Mode;
use bin2text::base85::{Alphabet, ASCII85, Z85};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use sha2::{Digest, Sha256};

fn rng_for(data: &[u8]) -> Pcg32 {
    // use sha256 of data as rng seed so it's repeatable
    let sha = Sha256::digest(data);

    let mut seed: [u8; 16] = [0; 16];
    seed.copy_from_slice(&sha[0..16]);

    Pcg32::from_seed(seed)
}

/// A base64 mode and a base85 alphabet, chosen independently but repeatably for `data`.
pub fn random_choices(data: &[u8]) -> (Mode, Alphabet) {
    let mut rng = rng_for(data);

    let mode = if rng.gen() {
        Mode::UrlSafe
    } else {
        Mode::Standard
    };
    let alphabet = if rng.gen() { Z85 } else { ASCII85 };

    (mode, alphabet)
}

pub fn encode_vec(mode: Mode, data: &[u8]) -> Vec<u8> {
    let mut buf = vec![0_u8; mode.encoded_len(data.len()).unwrap() + 1];
    let written = mode.encode(data, &mut buf);
    assert_eq!(0, buf[written]);
    buf.truncate(written);

    buf
}
