use thiserror::Error;

use crate::convert::{self, ConvertError};
use crate::kdf::{self, KdfError};
use crate::policy::{self, GenerationOptions, LETTERS, NUMBERS, SYMBOLS};

pub const HEX_ALPHABET: &str = "0123456789abcdef";

/// Digests are consumed 7 hex chars at a time; the value of one chunk stays
/// within 28 bits, matching the reference partitioning.
const CHUNK_HEX: usize = 7;

/// Lengths above this trigger the per-chunk entropy expansion.
const EXPANSION_THRESHOLD: u8 = 9;

/// Lengths above this force an alphabetic first character when letters are on.
const LEADING_LETTER_THRESHOLD: u8 = 6;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("encoded candidate ({produced} chars) must exceed the requested length {requested}")]
    InsufficientEntropy { produced: usize, requested: usize },

    #[error(transparent)]
    Kdf(#[from] KdfError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Maps a hex digest into a password candidate over the active alphabet.
///
/// The digest is split into 7-hex-char chunks; the trailing short chunk is
/// never converted directly. For lengths above 9, every step first re-hashes
/// the *original* digest (Fast profile) salted with the chunk at the mirrored
/// index `last - i - 1` of the current sequence and continues from the
/// re-derived chunks, so no sizeable run of the digest is revealed verbatim
/// in a long password. The mirrored indexing is part of the output format:
/// changing it changes every long password.
///
/// The converted candidate is center-trimmed to the requested length. When
/// letters are enabled and the length exceeds 6, a non-alphabetic first
/// character is remapped into the letters alphabet (a single-character base
/// conversion, not a re-derivation).
pub fn encode(digest: &str, options: &GenerationOptions) -> Result<String, EncodeError> {
    let alphabet = policy::active_alphabet(options);

    let mut chunks = split_chunks(digest);
    let last = chunks.len().saturating_sub(1);

    let mut candidate = String::new();
    for i in 0..last {
        if options.length > EXPANSION_THRESHOLD {
            let rehash = kdf::hash(digest, &chunks[last - i - 1], kdf::FAST)?;
            chunks = split_chunks(&rehash);
        }
        candidate.push_str(&convert::convert(&chunks[i], HEX_ALPHABET, &alphabet)?);
    }

    let requested = options.length as usize;
    if candidate.len() <= requested {
        return Err(EncodeError::InsufficientEntropy {
            produced: candidate.len(),
            requested,
        });
    }

    // Center trim; the alphabet is ASCII so byte indexing is char indexing.
    let offset = (candidate.len() - requested) / 2;
    let mut result = candidate[offset..offset + requested].to_string();

    if options.letters && options.length > LEADING_LETTER_THRESHOLD {
        let first = result.as_bytes()[0];
        if !first.is_ascii_alphabetic() {
            let source = format!("{SYMBOLS}{NUMBERS}");
            let replacement =
                convert::convert(&(first as char).to_string(), &source, LETTERS)?;
            result.replace_range(..1, &replacement);
        }
    }

    Ok(result)
}

fn split_chunks(digest: &str) -> Vec<String> {
    (0..digest.len())
        .step_by(CHUNK_HEX)
        .map(|start| digest[start..digest.len().min(start + CHUNK_HEX)].to_string())
        .collect()
}
