use axum::{
    extract::FromRequestParts,
    http::{Method, Request, Uri, header, request::Parts},
};
use jsonwebtoken::{EncodingKey, Header, encode};
use show_tracker::{
    auth::{AuthUser, Claims},
    config::{AppConfig, Env},
    error::ApiError,
};
use std::time::SystemTime;
use uuid::Uuid;

// --- Helper Functions ---

const TEST_JWT_SECRET: &str = "test-secret-value-1234567890";
const TEST_USER_ID: Uuid = Uuid::from_u128(1);

fn create_token(user_id: Uuid, exp_offset: i64) -> String {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    let claims = Claims {
        sub: user_id,
        iat: now as usize,
        exp: (now + exp_offset) as usize,
    };

    let key = EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes());
    encode(&Header::default(), &claims, &key).unwrap()
}

// The extractor only depends on AppConfig, so the state under test is just
// a config value (AppConfig: FromRef<AppConfig> via the blanket Clone impl).
fn config_for(env: Env) -> AppConfig {
    AppConfig {
        env,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        ..AppConfig::default()
    }
}

/// Helper to get the mutable Parts struct from a generated Request
fn get_request_parts(method: Method, uri: Uri) -> Parts {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let (parts, _) = request.into_parts();
    parts
}

// --- Tests ---

#[tokio::test]
async fn test_auth_success_with_valid_jwt() {
    let token = create_token(TEST_USER_ID, 3600);
    let config = config_for(Env::Production);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &config).await;

    let principal = auth_user.expect("valid bearer token must authenticate");
    assert_eq!(principal.id, TEST_USER_ID);
}

#[tokio::test]
async fn test_auth_failure_with_missing_header() {
    let config = config_for(Env::Production);
    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());

    let err = AuthUser::from_request_parts(&mut parts, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_auth_failure_with_expired_jwt() {
    // Expired an hour ago, well past any validation leeway.
    let token = create_token(TEST_USER_ID, -3600);
    let config = config_for(Env::Production);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let err = AuthUser::from_request_parts(&mut parts, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_auth_failure_with_wrong_signing_secret() {
    let token = create_token(TEST_USER_ID, 3600);
    let config = AppConfig {
        env: Env::Production,
        jwt_secret: "a-completely-different-secret".to_string(),
        ..AppConfig::default()
    };

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let err = AuthUser::from_request_parts(&mut parts, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_local_bypass_success() {
    let bypass_id = Uuid::new_v4();
    let config = config_for(Env::Local);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&bypass_id.to_string()).unwrap(),
    );

    let principal = AuthUser::from_request_parts(&mut parts, &config)
        .await
        .expect("x-user-id bypass must authenticate in local env");
    assert_eq!(principal.id, bypass_id);
}

#[tokio::test]
async fn test_local_bypass_disabled_in_prod() {
    let config = config_for(Env::Production);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    // Provide ONLY the local bypass header.
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
    );

    let err = AuthUser::from_request_parts(&mut parts, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_malformed_bypass_header_falls_through_to_bearer_check() {
    let config = config_for(Env::Local);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_static("not-a-uuid"),
    );

    // No bearer token either, so the fall-through rejects.
    let err = AuthUser::from_request_parts(&mut parts, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}
