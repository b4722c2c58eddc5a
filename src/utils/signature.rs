use anyhow::Result;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use tracing::debug;

/// Verifies inbound request signatures against a fixed Ed25519 public key.
///
/// The platform signs the byte string `timestamp || rawBody` (concatenation,
/// no separator), hex-encodes the 64-byte signature into the
/// `x-signature-ed25519` header, and sends the timestamp as a decimal string
/// in `x-signature-timestamp`. Verification must run over the exact bytes
/// received, never a re-serialized value.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Build a verifier from a hex-encoded 32-byte public key.
    pub fn from_hex(public_key_hex: &str) -> Result<Self> {
        let key_bytes = hex::decode(public_key_hex)
            .map_err(|e| anyhow::anyhow!("Invalid public key hex: {}", e))?;

        let key_array: [u8; 32] = key_bytes.try_into().map_err(|bytes: Vec<u8>| {
            anyhow::anyhow!(
                "Invalid public key length: expected 32 bytes, got {}",
                bytes.len()
            )
        })?;

        let key = VerifyingKey::from_bytes(&key_array)
            .map_err(|e| anyhow::anyhow!("Invalid public key: {}", e))?;

        Ok(Self { key })
    }

    /// Verify `signature_hex` over `timestamp || body`.
    ///
    /// Returns `false` for malformed hex, a wrong-length signature, or a
    /// failed cryptographic check; all are the same unauthenticated outcome
    /// to the caller. Never panics and never returns an error.
    pub fn verify(&self, signature_hex: &str, timestamp: &str, body: &[u8]) -> bool {
        let signature_bytes = match hex::decode(signature_hex) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Signature hex decode failed: {}", e);
                return false;
            }
        };

        let signature_array: [u8; 64] = match signature_bytes.try_into() {
            Ok(array) => array,
            Err(bytes) => {
                debug!(
                    "Invalid signature length: expected 64 bytes, got {}",
                    bytes.len()
                );
                return false;
            }
        };

        let signature = Signature::from_bytes(&signature_array);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key.verify(&message, &signature).is_ok()
    }
}
