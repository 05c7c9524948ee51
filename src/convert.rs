use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("character {0:?} is not in the source alphabet")]
    UnknownDigit(char),

    #[error("conversion alphabets must be nonempty")]
    EmptyAlphabet,

    #[error("destination alphabet needs at least two characters")]
    DestAlphabetTooSmall,
}

/// Re-expresses `src` from one positional alphabet to another.
///
/// `src` is read as a numeral in base `|src_table|`, where each character's
/// digit value is its index in `src_table`. The value is rewritten in base
/// `|dest_table|` by streaming long division over the digit sequence, so
/// sources of any length work without a fixed-width accumulator (a 64-hex-char
/// digest alone overflows u64).
///
/// An empty or all-zero source collapses to the single zero-index character of
/// `dest_table`. No output padding is performed: the result is the minimal
/// most-significant-first representation.
pub fn convert(src: &str, src_table: &str, dest_table: &str) -> Result<String, ConvertError> {
    let src_tab: Vec<char> = src_table.chars().collect();
    let dest_tab: Vec<char> = dest_table.chars().collect();
    if src_tab.is_empty() || dest_tab.is_empty() {
        return Err(ConvertError::EmptyAlphabet);
    }
    // A one-character destination cannot represent nonzero values; the
    // division below would never shrink the quotient.
    if dest_tab.len() < 2 {
        return Err(ConvertError::DestAlphabetTooSmall);
    }
    let src_base = src_tab.len() as u64;
    let dest_base = dest_tab.len() as u64;

    let mut digits = src
        .chars()
        .map(|c| {
            src_tab
                .iter()
                .position(|&t| t == c)
                .map(|i| i as u32)
                .ok_or(ConvertError::UnknownDigit(c))
        })
        .collect::<Result<Vec<u32>, _>>()?;

    if let Some(first) = digits.iter().position(|&d| d != 0) {
        digits.drain(..first);
    } else {
        digits.clear();
    }

    // Remainders come out least-significant first.
    let mut out: Vec<char> = Vec::new();
    while !digits.is_empty() {
        let mut rem: u64 = 0;
        let mut quot: Vec<u32> = Vec::with_capacity(digits.len());
        for &d in &digits {
            let acc = rem * src_base + u64::from(d);
            quot.push((acc / dest_base) as u32);
            rem = acc % dest_base;
        }
        out.push(dest_tab[rem as usize]);

        match quot.iter().position(|&q| q != 0) {
            Some(first) => {
                quot.drain(..first);
                digits = quot;
            }
            None => digits.clear(),
        }
    }

    if out.is_empty() {
        out.push(dest_tab[0]);
    }

    Ok(out.into_iter().rev().collect())
}
