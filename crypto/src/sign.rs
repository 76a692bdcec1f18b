//! Ed25519 signing, verification and signer recovery.
//!
//! Ballots and proposals carry only a signature, never a separate public key,
//! so the verifier must be able to recover the signer from
//! `(message, signature)`. Ed25519 has no native key recovery; instead a
//! recoverable signature is self-describing:
//!
//! ```text
//! [ 64-byte Ed25519 signature | 32-byte signer public key ]
//! ```
//!
//! Recovery decodes the embedded key and strictly verifies the signature over
//! the exact message bytes. A key is returned only when verification passes,
//! so a forged or substituted key cannot be recovered.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use meshvote_types::{PrivateKey, PublicKey};

use crate::CryptoError;

const SIGNATURE_LEN: usize = 64;
const PUBLIC_KEY_LEN: usize = 32;

/// Length of a recoverable signature.
pub const RECOVERABLE_SIGNATURE_LEN: usize = SIGNATURE_LEN + PUBLIC_KEY_LEN;

/// Sign a message with a private key, returning the plain 64-byte signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> [u8; 64] {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    signing_key.sign(message).to_bytes()
}

/// Verify a plain 64-byte signature against a message and public key.
///
/// Rejects non-canonical signatures (malleability protection).
pub fn verify_signature(message: &[u8], signature: &[u8; 64], public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(signature);
    verifying_key.verify(message, &dalek_sig).is_ok()
}

/// Sign a message producing a recoverable signature.
pub fn sign_recoverable(message: &[u8], private_key: &PrivateKey) -> Vec<u8> {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    let mut out = Vec::with_capacity(RECOVERABLE_SIGNATURE_LEN);
    out.extend_from_slice(&signing_key.sign(message).to_bytes());
    out.extend_from_slice(&signing_key.verifying_key().to_bytes());
    out
}

/// Recover the signer's public key from a message and a recoverable signature.
pub fn recover_public_key(message: &[u8], signature: &[u8]) -> Result<PublicKey, CryptoError> {
    if signature.len() != RECOVERABLE_SIGNATURE_LEN {
        return Err(CryptoError::InvalidLength {
            expected: RECOVERABLE_SIGNATURE_LEN,
            actual: signature.len(),
        });
    }
    let (sig_bytes, key_bytes) = signature.split_at(SIGNATURE_LEN);

    let mut key = [0u8; PUBLIC_KEY_LEN];
    key.copy_from_slice(key_bytes);
    let verifying_key =
        VerifyingKey::from_bytes(&key).map_err(|_| CryptoError::InvalidPublicKey)?;

    let mut sig = [0u8; SIGNATURE_LEN];
    sig.copy_from_slice(sig_bytes);
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&sig);

    verifying_key
        .verify_strict(message, &dalek_sig)
        .map_err(|_| CryptoError::VerificationFailed)?;
    Ok(PublicKey(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_keypair, keypair_from_seed};

    #[test]
    fn sign_and_verify() {
        let kp = generate_keypair();
        let msg = b"test message for meshvote";
        let sig = sign_message(msg, &kp.private);
        assert!(verify_signature(msg, &sig, &kp.public));
    }

    #[test]
    fn wrong_key_fails_plain_verify() {
        let kp1 = generate_keypair();
        let kp2 = generate_keypair();
        let sig = sign_message(b"test", &kp1.private);
        assert!(!verify_signature(b"test", &sig, &kp2.public));
    }

    #[test]
    fn recover_returns_signer() {
        let kp = keypair_from_seed(&[7u8; 32]);
        let sig = sign_recoverable(b"ballot bytes", &kp.private);
        assert_eq!(sig.len(), RECOVERABLE_SIGNATURE_LEN);
        assert_eq!(recover_public_key(b"ballot bytes", &sig), Ok(kp.public));
    }

    #[test]
    fn recoverable_signature_is_deterministic() {
        let kp = keypair_from_seed(&[99u8; 32]);
        assert_eq!(
            sign_recoverable(b"same", &kp.private),
            sign_recoverable(b"same", &kp.private)
        );
    }

    #[test]
    fn recover_rejects_wrong_length() {
        let err = recover_public_key(b"msg", &[0u8; 64]).unwrap_err();
        assert_eq!(
            err,
            CryptoError::InvalidLength {
                expected: RECOVERABLE_SIGNATURE_LEN,
                actual: 64
            }
        );
        assert!(recover_public_key(b"msg", &[]).is_err());
    }

    #[test]
    fn recover_rejects_tampered_message() {
        let kp = generate_keypair();
        let sig = sign_recoverable(b"original", &kp.private);
        assert_eq!(
            recover_public_key(b"tampered", &sig),
            Err(CryptoError::VerificationFailed)
        );
    }

    #[test]
    fn recover_rejects_substituted_key() {
        let signer = generate_keypair();
        let other = generate_keypair();
        let mut sig = sign_recoverable(b"payload", &signer.private);
        sig[64..].copy_from_slice(&other.public.0);
        assert_eq!(
            recover_public_key(b"payload", &sig),
            Err(CryptoError::VerificationFailed)
        );
    }

    #[test]
    fn recover_rejects_invalid_curve_point() {
        let kp = generate_keypair();
        let mut sig = sign_recoverable(b"payload", &kp.private);
        // roughly half of all y-coordinates have no matching x on the curve
        let bad = (2u8..=255)
            .map(|y| {
                let mut bytes = [0u8; 32];
                bytes[0] = y;
                bytes
            })
            .find(|bytes| VerifyingKey::from_bytes(bytes).is_err())
            .expect("some small y-coordinate is off the curve");
        sig[64..].copy_from_slice(&bad);
        assert_eq!(
            recover_public_key(b"payload", &sig),
            Err(CryptoError::InvalidPublicKey)
        );
    }
}
