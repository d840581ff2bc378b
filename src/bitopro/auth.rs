use base64::{prelude::BASE64_STANDARD, Engine as _};
use hex::encode;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha384;

use crate::credentials::Credentials;

pub const APIKEY_HEADER: &str = "X-BITOPRO-APIKEY";
pub const PAYLOAD_HEADER: &str = "X-BITOPRO-PAYLOAD";
pub const SIGNATURE_HEADER: &str = "X-BITOPRO-SIGNATURE";

/// Header values for one signed request. The nonce baked into the payload
/// must be fresh at call time; the exchange rejects replayed payloads.
#[derive(Debug, Clone)]
pub struct AuthHeaders {
    pub api_key: String,
    pub payload: String,
    pub signature: String,
}

#[derive(Serialize)]
struct Payload<'a> {
    identity: &'a str,
    nonce: i64,
}

/// GET authentication: base64 of the JSON `{identity, nonce}` payload,
/// signed with hex HMAC-SHA384 over the base64 text.
pub fn sign(credentials: &Credentials, nonce: i64) -> AuthHeaders {
    let payload = Payload {
        identity: &credentials.email,
        nonce,
    };
    let json =
        serde_json::ser::to_string(&payload).expect("payload is two plain fields");
    let payload = BASE64_STANDARD.encode(json);

    let mut mac: Hmac<Sha384> = Hmac::new_from_slice(credentials.api_secret.as_bytes())
        .expect("hmac accepts any key length");
    mac.update(payload.as_bytes());
    let signature = encode(mac.finalize().into_bytes());

    AuthHeaders {
        api_key: credentials.api_key.clone(),
        payload,
        signature,
    }
}

#[cfg(test)]
mod tests {
    use base64::{prelude::BASE64_STANDARD, Engine as _};

    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("trader@example.com", "key", "secret")
    }

    #[test]
    fn test_payload_encoding() {
        let headers = sign(&credentials(), 1700000000000);
        let decoded = BASE64_STANDARD.decode(&headers.payload).unwrap();
        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            r#"{"identity":"trader@example.com","nonce":1700000000000}"#
        );
        assert_eq!(headers.api_key, "key");
    }

    #[test]
    fn test_signature_deterministic() {
        let a = sign(&credentials(), 1700000000000);
        let b = sign(&credentials(), 1700000000000);
        assert_eq!(a.signature, b.signature);
        // sha384 -> 48 bytes -> 96 hex chars
        assert_eq!(a.signature.len(), 96);
        assert!(a.signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_changes_with_inputs() {
        let base = sign(&credentials(), 1700000000000);

        let other_nonce = sign(&credentials(), 1700000000001);
        assert_ne!(base.signature, other_nonce.signature);

        let other_secret = sign(
            &Credentials::new("trader@example.com", "key", "secret2"),
            1700000000000,
        );
        assert_ne!(base.signature, other_secret.signature);

        let other_identity = sign(
            &Credentials::new("other@example.com", "key", "secret"),
            1700000000000,
        );
        assert_ne!(base.signature, other_identity.signature);
    }
}
