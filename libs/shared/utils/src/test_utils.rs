use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

pub struct TestUser {
    pub email: String,
    pub role: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            email: "test@example.com".to_string(),
            role: "USER".to_string(),
        }
    }
}

impl TestUser {
    pub fn new(email: &str, role: &str) -> Self {
        Self {
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    pub fn admin(email: &str) -> Self {
        Self::new(email, "ADMIN")
    }

    pub fn user(email: &str) -> Self {
        Self::new(email, "USER")
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    /// Builds an HS256-signed token; the client never verifies the signature
    /// but fixtures should still look like what the server issues.
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "sub": user.email,
            "role": user.role,
            "iat": now.timestamp(),
            "exp": exp.timestamp()
        });

        Self::sign(&header.to_string(), &payload.to_string(), secret)
    }

    /// A token whose payload has no `exp` claim at all.
    pub fn create_token_without_expiry(user: &TestUser, secret: &str) -> String {
        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "sub": user.email,
            "role": user.role,
            "iat": Utc::now().timestamp()
        });

        Self::sign(&header.to_string(), &payload.to_string(), secret)
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }

    fn sign(header: &str, payload: &str, secret: &str) -> String {
        let header_encoded = general_purpose::URL_SAFE_NO_PAD.encode(header);
        let payload_encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload);

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }
}

pub struct MockApiResponses;

impl MockApiResponses {
    pub fn patient_json(id: i64, name: &str, last_name: &str, card_identity: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "lastName": last_name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "cardIdentity": card_identity,
            "address": {
                "street": "Av. Siempreviva",
                "number": "742",
                "location": "Springfield",
                "province": "Buenos Aires"
            }
        })
    }

    pub fn dentist_json(id: i64, name: &str, last_name: &str, registration: &str) -> serde_json::Value {
        json!({
            "id": id,
            "registration": registration,
            "name": name,
            "lastName": last_name
        })
    }

    pub fn appointment_json(id: i64, patient_id: i64, dentist_id: i64, date: &str) -> serde_json::Value {
        json!({
            "id": id,
            "patient_id": patient_id,
            "dentist_id": dentist_id,
            "date": date
        })
    }
}
