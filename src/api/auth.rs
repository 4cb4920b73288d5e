use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};

use crate::config::Config;
use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    pub is_admin: bool,
    pub exp: usize,
    pub iat: usize,
}

/// Extractor gating mutating routes; extraction fails unless the request
/// carries a valid bearer token with admin rights.
#[derive(Debug)]
pub struct AdminUser {
    pub username: String,
}

pub fn create_token(
    secret: &str,
    username: &str,
    is_admin: bool,
    duration_minutes: i64,
) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        sub: username.to_owned(),
        is_admin,
        exp: (now + Duration::minutes(duration_minutes)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| ApiError::Unauthorized("Failed to issue token".to_string()))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS512),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))
}

fn admin_from_request(req: &HttpRequest) -> Result<AdminUser, ApiError> {
    let settings = req
        .app_data::<web::Data<Config>>()
        .ok_or_else(|| ApiError::Unauthorized("Authorization is not configured".to_string()))?;

    let token = req
        .headers()
        .get("authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let claims = verify_token(token, &settings.secret_key)?;

    if !claims.is_admin {
        return Err(ApiError::Unauthorized(
            "Admin privileges required".to_string(),
        ));
    }

    Ok(AdminUser {
        username: claims.sub,
    })
}

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Ready<Result<AdminUser, ApiError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(admin_from_request(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    const SECRET: &str = "test-secret";

    fn test_config() -> Config {
        Config {
            database_url: "postgresql://localhost/jobly_test".to_string(),
            secret_key: SECRET.to_string(),
            port: 0,
            max_payload_size: 1024,
            max_db_connections: 1,
            log_dir: "logs".to_string(),
        }
    }

    #[test]
    fn token_round_trip_preserves_claims() {
        let token = create_token(SECRET, "alice", true, 30).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "alice");
        assert!(claims.is_admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let token = create_token(SECRET, "alice", true, 30).unwrap();
        let err = verify_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn admin_token_passes_the_gate() {
        let token = create_token(SECRET, "alice", true, 30).unwrap();
        let req = TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .insert_header(("authorization", format!("Bearer {}", token)))
            .to_http_request();

        let admin = admin_from_request(&req).unwrap();
        assert_eq!(admin.username, "alice");
    }

    #[test]
    fn non_admin_token_is_rejected() {
        let token = create_token(SECRET, "bob", false, 30).unwrap();
        let req = TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .insert_header(("authorization", format!("Bearer {}", token)))
            .to_http_request();

        let err = admin_from_request(&req).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn missing_header_is_rejected() {
        let req = TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .to_http_request();

        let err = admin_from_request(&req).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
