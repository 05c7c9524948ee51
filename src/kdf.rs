use scrypt::Params;
use thiserror::Error;

/// Digest size in bytes; every oracle call returns 64 lowercase hex chars.
pub const KDF_OUT_LEN: usize = 32;

/// Errors that can occur when invoking the scrypt oracle
#[derive(Error, Debug)]
pub enum KdfError {
    #[error("invalid scrypt parameters: {0}")]
    InvalidParams(String),

    #[error("scrypt rejected the requested output length")]
    OutputLen,
}

/// A fixed scrypt cost profile (N = 2^log_n).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CostProfile {
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

/// High work factor: one invocation per top-level derivation and per HashId.
pub const STRONG: CostProfile = CostProfile { log_n: 14, r: 8, p: 1 };

/// Low work factor: internal expansion and validator retry steps.
pub const FAST: CostProfile = CostProfile { log_n: 5, r: 8, p: 1 };

/// Derives a 64-char lowercase hex digest from `(message, salt)` under the
/// given cost profile. Deterministic for fixed inputs and profile.
pub fn hash(message: &str, salt: &str, cost: CostProfile) -> Result<String, KdfError> {
    let params = Params::new(cost.log_n, cost.r, cost.p, KDF_OUT_LEN)
        .map_err(|e| KdfError::InvalidParams(e.to_string()))?;

    let mut out = [0u8; KDF_OUT_LEN];
    scrypt::scrypt(message.as_bytes(), salt.as_bytes(), &params, &mut out)
        .map_err(|_| KdfError::OutputLen)?;

    Ok(hex::encode(out))
}
