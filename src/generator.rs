use thiserror::Error;
use zeroize::Zeroize;

use crate::convert::ConvertError;
use crate::encoder::{self, EncodeError};
use crate::kdf::{self, KdfError};
use crate::policy::{self, GenerationOptions, OptionsError};
use crate::service;

/// The validator loop converges within a handful of re-derivations on real
/// digests, but it has no proven upper bound, so it is capped rather than
/// trusted to terminate. 512 keeps the chance of a false "unsatisfiable" on
/// the tightest configuration (length 4, all classes) negligible while the
/// Fast profile keeps each retry cheap.
pub const MAX_POLICY_ITERATIONS: u32 = 512;

#[derive(Error, Debug)]
pub enum GenError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Kdf(#[from] KdfError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("character policy still unsatisfied after {0} re-derivations")]
    PolicyUnsatisfiable(u32),
}

/// Outcome of one derivation. Ephemeral: nothing here is ever persisted, and
/// identical inputs reproduce it exactly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerivationResult {
    pub password: String,
    pub digest: String,
}

/// Derives a policy-compliant password from the master secret, service and
/// per-identity HashId.
///
/// Options are validated before any hashing. The composed message is
/// Strong-hashed with the HashId as salt, encoded over the active alphabet,
/// and then re-derived (Fast profile) until the character policy holds. The
/// whole call is synchronous and deterministic: same inputs, same result,
/// independent of call ordering.
pub fn generate_password(
    master: &str,
    service: &str,
    hash_id: &str,
    options: &GenerationOptions,
) -> Result<DerivationResult, GenError> {
    let options = policy::validate(options)?;

    let service = service::normalize_service(service);

    let mut message = compose_message(master, &service, &options);
    let digest = kdf::hash(&message, hash_id, kdf::STRONG);
    message.zeroize();
    let digest = digest?;

    let password = encoder::encode(&digest, &options)?;
    iterate(digest, password, &options)
}

/// Re-derives the digest/password pair until every enabled class is covered
/// and no class character repeats three times in a row.
fn iterate(
    mut digest: String,
    mut password: String,
    options: &GenerationOptions,
) -> Result<DerivationResult, GenError> {
    let mut iterations = 0;
    while !policy::satisfies_policy(&password, options) {
        iterations += 1;
        if iterations > MAX_POLICY_ITERATIONS {
            return Err(GenError::PolicyUnsatisfiable(MAX_POLICY_ITERATIONS));
        }
        digest = kdf::hash(&digest, &password, kdf::FAST)?;
        password = encoder::encode(&digest, options)?;
    }
    Ok(DerivationResult { password, digest })
}

/// `master.service.<length><letters><symbols><numbers>[.variant]`, flags as
/// 1/0. The field order is part of the output format.
fn compose_message(master: &str, service: &str, options: &GenerationOptions) -> String {
    let mut buf = itoa::Buffer::new();

    let mut message = String::with_capacity(master.len() + service.len() + 16);
    message.push_str(master);
    message.push('.');
    message.push_str(service);
    message.push('.');
    message.push_str(buf.format(options.length));
    message.push(if options.letters { '1' } else { '0' });
    message.push(if options.symbols { '1' } else { '0' });
    message.push(if options.numbers { '1' } else { '0' });

    if let Some(variant) = options.variant.as_deref() {
        if !variant.is_empty() {
            message.push('.');
            message.push_str(variant);
        }
    }

    message
}
