use std::fmt;

use bincode::{Decode, Encode};

/// A hash digest in its lowercase hexadecimal byte form.
///
/// For a 256-bit hash this is 64 ASCII bytes. Internal tree nodes hash the
/// concatenation of their children's digests in exactly this form, so the
/// hex rendering is part of the commitment, not a display concern.
///
/// Digests compare by byte equality. The sparse tree additionally uses two
/// short sentinel values ("leaf exists" / "leaf does not exist") as digests,
/// so the type does not enforce a fixed length.
#[derive(Clone, PartialEq, Eq, Hash, Encode, Decode)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// Wrap raw digest bytes (already in their canonical byte form).
    pub fn new(bytes: Vec<u8>) -> Self {
        Digest(bytes)
    }

    /// Build a digest from a raw hash output by hex-encoding it.
    pub fn hex_of(raw: &[u8]) -> Self {
        Digest(hex::encode(raw).into_bytes())
    }

    /// The digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes (hex characters for a real hash output).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the digest holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Digest(bytes)
    }
}

impl From<&[u8]> for Digest {
    fn from(bytes: &[u8]) -> Self {
        Digest(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Digest({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_of_lowercase() {
        let digest = Digest::hex_of(&[0xAB, 0xCD, 0x01]);
        assert_eq!(digest.as_bytes(), b"abcd01");
    }

    #[test]
    fn test_byte_equality() {
        let a = Digest::from(b"5feceb".as_slice());
        let b = Digest::new(b"5feceb".to_vec());
        assert_eq!(a, b);
        assert_ne!(a, Digest::from(b"5fecec".as_slice()));
    }

    #[test]
    fn test_display_is_text() {
        let digest = Digest::hex_of(&[0x00, 0xFF]);
        assert_eq!(digest.to_string(), "00ff");
        assert_eq!(format!("{:?}", digest), "Digest(00ff)");
    }
}
