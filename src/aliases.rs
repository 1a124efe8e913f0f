// src/aliases.rs
//! secure-gate wrappers for decrypted material
//!
//! Everything that comes out of `pass show` lives in one of these until the
//! CSV row is written, and is zeroized on drop.

pub use secure_gate::dynamic_alias;

// Full decrypted entry, all lines
dynamic_alias!(SecretContent, String);
// First line of an entry
dynamic_alias!(LoginPassword, String);
