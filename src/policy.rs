use thiserror::Error;

// Fixed, ordered character classes. Order and membership are load-bearing:
// each character's index in the assembled alphabet is its digit value during
// base conversion, so any reordering changes every derived password.
// Ambiguous glyphs (l, I, O, 0) are deliberately absent.
pub const LETTERS: &str = "abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";
pub const NUMBERS: &str = "123456789";
pub const SYMBOLS: &str = "_!$-+";

pub const MIN_LENGTH: u8 = 4;
pub const MAX_LENGTH: u8 = 40;

/// Per-call generation parameters. Always passed by value or reference to a
/// single derivation; never shared mutable state, so concurrent calls with
/// different options cannot interfere.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationOptions {
    pub length: u8,
    pub letters: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub variant: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            length: 20,
            letters: true,
            numbers: true,
            symbols: true,
            variant: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("password length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {0}")]
    LengthOutOfRange(u8),

    #[error("at least one character class (letters, numbers, symbols) must be enabled")]
    NoClassEnabled,
}

/// Validates invariants and returns a checked copy.
///
/// This is the canonical validator: if it returns `Ok(options)`, the options
/// satisfy `4 ≤ length ≤ 40` and enable at least one character class, and the
/// generator does not re-check them.
pub fn validate(options: &GenerationOptions) -> Result<GenerationOptions, OptionsError> {
    if !options.letters && !options.numbers && !options.symbols {
        return Err(OptionsError::NoClassEnabled);
    }
    if options.length < MIN_LENGTH || options.length > MAX_LENGTH {
        return Err(OptionsError::LengthOutOfRange(options.length));
    }
    Ok(options.clone())
}

/// Returns the concatenated active alphabet: symbols, then numbers, then
/// letters, per enabled classes.
pub fn active_alphabet(options: &GenerationOptions) -> String {
    let mut out = String::with_capacity(SYMBOLS.len() + NUMBERS.len() + LETTERS.len());
    if options.symbols {
        out.push_str(SYMBOLS);
    }
    if options.numbers {
        out.push_str(NUMBERS);
    }
    if options.letters {
        out.push_str(LETTERS);
    }
    out
}

/// Checks the coverage and anti-repetition policy for every enabled class.
///
/// Letters require at least one lowercase and one uppercase character; numbers
/// and symbols each require one member of their set. No class may contribute a
/// run of three identical characters anywhere in the password.
pub fn satisfies_policy(password: &str, options: &GenerationOptions) -> bool {
    if options.letters {
        let has_lower = password.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = password.bytes().any(|b| b.is_ascii_uppercase());
        if !has_lower || !has_upper || has_triple_run(password, |b| b.is_ascii_alphabetic()) {
            return false;
        }
    }

    if options.numbers {
        let has_digit = password.bytes().any(|b| b.is_ascii_digit());
        if !has_digit || has_triple_run(password, |b| b.is_ascii_digit()) {
            return false;
        }
    }

    if options.symbols {
        let has_symbol = password.bytes().any(is_symbol);
        if !has_symbol || has_triple_run(password, is_symbol) {
            return false;
        }
    }

    true
}

fn is_symbol(b: u8) -> bool {
    SYMBOLS.as_bytes().contains(&b)
}

fn has_triple_run(password: &str, class: impl Fn(u8) -> bool) -> bool {
    password
        .as_bytes()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2] && class(w[0]))
}
