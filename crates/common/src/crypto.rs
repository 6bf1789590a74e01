//! Secret handling for node credentials and access keys
//!
//! Node passwords are never stored in the clear: the registry keeps a
//! SHA-256 digest and check-ins are verified against it.

use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

/// Length in bytes of a WireGuard public key
pub const WG_KEY_LEN: usize = 32;

/// Hash a secret for storage
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a presented secret against a stored digest
pub fn verify_secret(secret: &str, digest: &str) -> bool {
    let computed = hash_secret(secret);
    if computed.len() != digest.len() {
        return false;
    }
    // Compare every byte so timing does not leak the mismatch position
    computed
        .bytes()
        .zip(digest.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// Generate a random URL-safe secret from `len` bytes of entropy
pub fn generate_secret(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Validate that a string is a base64-encoded WireGuard public key
pub fn validate_public_key(key: &str) -> Result<()> {
    let raw = STANDARD
        .decode(key)
        .map_err(|e| Error::invalid(format!("public key is not base64: {}", e)))?;
    if raw.len() != WG_KEY_LEN {
        return Err(Error::invalid(format!(
            "public key must be {} bytes, got {}",
            WG_KEY_LEN,
            raw.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify() {
        let digest = hash_secret("hunter2");
        assert_eq!(digest.len(), 64);
        assert!(verify_secret("hunter2", &digest));
        assert!(!verify_secret("hunter3", &digest));
        assert!(!verify_secret("hunter2", "short"));
    }

    #[test]
    fn test_generated_secrets_differ() {
        let a = generate_secret(24);
        let b = generate_secret(24);
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_public_key_validation() {
        let key = STANDARD.encode([7u8; 32]);
        assert!(validate_public_key(&key).is_ok());
        assert!(validate_public_key("not base64!").is_err());
        assert!(validate_public_key(&STANDARD.encode([1u8; 16])).is_err());
    }
}
