use crate::convert;
use crate::generator::GenError;
use crate::kdf;
use crate::policy::{LETTERS, NUMBERS, SYMBOLS};

/// Legacy source alphabet for the seed conversion. It is the character set a
/// rendered numeral can draw from: decimal digits, scientific-notation marks,
/// and the deduplicated "Infinity" token. Kept verbatim for compatibility.
const SEED_ALPHABET: &str = "0123456789.e+Infity";

/// Derives a stable, non-secret HashId digest for an identity.
///
/// The identity itself is the thing being hashed; the salt only has to be
/// deterministic, so it is synthesized from the identity's shape: seed =
/// length (in UTF-16 code units) raised to the vowel count, with a vowel-less
/// identity counting as 3. The seed is computed with exact integer
/// arithmetic and rendered as a plain decimal string, then converted into the
/// numbers+symbols+letters alphabet to form the salt for a Strong hash.
pub fn derive_hash_id(identity: &str) -> Result<String, GenError> {
    let length = identity.encode_utf16().count() as u64;

    let vowels = identity
        .chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count() as u32;
    let vowels = if vowels == 0 { 3 } else { vowels };

    let seed = pow_decimal(length, vowels);

    let dest = format!("{NUMBERS}{SYMBOLS}{LETTERS}");
    let salt = convert::convert(&seed, SEED_ALPHABET, &dest)?;

    Ok(kdf::hash(identity, &salt, kdf::STRONG)?)
}

/// Exact `base^exp` as a decimal string. `exp` is always at least 1 here.
fn pow_decimal(base: u64, exp: u32) -> String {
    if base == 0 {
        return "0".to_string();
    }

    // Little-endian decimal digits, multiplied by `base` per round.
    let mut digits: Vec<u8> = vec![1];
    for _ in 0..exp {
        let mut carry: u64 = 0;
        for d in digits.iter_mut() {
            let acc = u64::from(*d) * base + carry;
            *d = (acc % 10) as u8;
            carry = acc / 10;
        }
        while carry > 0 {
            digits.push((carry % 10) as u8);
            carry /= 10;
        }
    }

    digits.iter().rev().map(|d| char::from(b'0' + d)).collect()
}
