//! Stateless deterministic password derivation.
//!
//! A password is a pure function of `(master secret, service, HashId,
//! options)`: the composed message is run through a memory-hard scrypt hash,
//! the digest is remapped onto the enabled character classes by numeral-base
//! conversion, and the result is re-derived until it satisfies the coverage
//! and anti-repetition policy. Nothing is stored; identical inputs always
//! yield the identical password, anywhere.

pub mod convert;
pub mod encoder;
pub mod generator;
pub mod identity;
pub mod kdf;
pub mod policy;
pub mod service;

pub use generator::{generate_password, DerivationResult, GenError};
pub use identity::derive_hash_id;
pub use policy::{GenerationOptions, OptionsError};
pub use service::normalize_service;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
