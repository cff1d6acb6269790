//! Webhook signature verification
//!
//! The gateway signs every webhook payload with its RSA key and sends
//! the signature base64-encoded in the `X-Signature` header. Handlers
//! must verify the raw body against that header before acting on the
//! content.
//!
//! Verification is a free function rather than a client method: it
//! needs the gateway's public key and nothing from the client
//! configuration.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::sha2::Sha256;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;

/// Verify a detached RSA-SHA256 signature over a webhook payload.
///
/// `content` is the raw webhook body exactly as received, `signature`
/// the base64-encoded `X-Signature` header value, and `public_key_pem`
/// the gateway's public key in PEM form (`BEGIN PUBLIC KEY`;
/// `BEGIN RSA PUBLIC KEY` is accepted as well).
///
/// Returns `true` iff the signature is a valid PKCS#1 v1.5 RSA-SHA256
/// signature over `content` under the key. Malformed base64, a key
/// that does not parse, or signature bytes of the wrong shape all
/// yield `false`; this function never panics.
pub fn verify(content: &[u8], signature: &str, public_key_pem: &str) -> bool {
    let Ok(raw) = STANDARD.decode(signature) else {
        return false;
    };
    let Some(public_key) = decode_public_key(public_key_pem) else {
        return false;
    };
    let Ok(signature) = Signature::try_from(raw.as_slice()) else {
        return false;
    };
    VerifyingKey::<Sha256>::new(public_key)
        .verify(content, &signature)
        .is_ok()
}

fn decode_public_key(pem: &str) -> Option<RsaPublicKey> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .ok()
}
