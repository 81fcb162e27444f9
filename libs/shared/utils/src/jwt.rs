use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use tracing::debug;

use shared_models::auth::JwtClaims;

/// Decodes the claims segment of a credential without verifying the
/// signature. The client never holds the signing secret; the server rejects
/// forged tokens on every request, so decoding here only feeds session
/// derivation and display.
pub fn decode_claims(token: &str) -> Result<JwtClaims, String> {
    // Split token into parts
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("Invalid token format".to_string());
    }

    let claims_b64 = parts[1];

    // Decode claims
    let claims_json = match URL_SAFE_NO_PAD.decode(claims_b64) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(json_str) => json_str,
            Err(_) => return Err("Invalid claims encoding".to_string()),
        },
        Err(e) => {
            debug!("Failed to decode claims segment: {}", e);
            return Err("Invalid claims encoding".to_string());
        }
    };

    // Parse claims
    let claims: JwtClaims = match serde_json::from_str(&claims_json) {
        Ok(c) => c,
        Err(e) => {
            debug!("Failed to parse claims: {}", e);
            return Err("Invalid claims format".to_string());
        }
    };

    Ok(claims)
}

/// A credential with no `exp` claim never expires locally; the server still
/// gets the final word on every request.
pub fn is_expired(claims: &JwtClaims, now_epoch: i64) -> bool {
    matches!(claims.exp, Some(exp) if exp < now_epoch)
}
