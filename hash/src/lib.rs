//! Digest type and hash-function abstraction for treedigest commitment trees.
//!
//! Both tree structures commit to data through a caller-chosen hash function.
//! A [`TreeHasher`] maps an arbitrary byte sequence to a fixed-length
//! [`Digest`] — the lowercase hexadecimal rendering of the hash output,
//! treated as bytes for all further hashing. Two hashers are provided:
//!
//! - [`Sha256TreeHasher`] — SHA-256 via the `sha2` crate.
//! - [`Blake3TreeHasher`] — Blake3.
//!
//! Proof objects embed the hasher's [`TreeHasher::ID`] so that verification
//! against a different hash function fails closed instead of silently
//! replaying the wrong chain.

#![warn(missing_docs)]

mod digest;
mod hasher;

pub use digest::Digest;
pub use hasher::{combine, Blake3TreeHasher, Sha256TreeHasher, TreeHasher};
