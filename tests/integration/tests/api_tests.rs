//! API Integration Tests
//!
//! Most tests run against an in-memory store and need no services. The
//! `postgres_*` tests additionally require `DATABASE_URL` and `JWT_SECRET`
//! and are skipped otherwise.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, memory_config, TestServer,
};
use reqwest::StatusCode;

async fn register(server: &TestServer, credentials: &Credentials) -> UserResponse {
    let response = server.post("/api/users", credentials).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn login(server: &TestServer, credentials: &Credentials) -> LoginResponse {
    let response = server.post("/api/login", credentials).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_healthz() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/healthz").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_health_ready_in_memory() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_end_to_end_session() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();

    let user = register(&server, &credentials).await;
    let session = login(&server, &credentials).await;
    assert_eq!(session.id, user.id);
    assert_eq!(session.email, credentials.email);
    assert_eq!(session.refresh_token.len(), 64);

    // The access token authorizes requests as the logged-in user
    let response = server
        .post_auth("/api/chirps", &session.token, &CreateChirpRequest::new("hello"))
        .await
        .unwrap();
    let chirp: ChirpResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(chirp.user_id, user.id);

    // A refreshed access token works on its own
    let response = server
        .post_bearer("/api/refresh", &session.refresh_token)
        .await
        .unwrap();
    let refreshed: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server
        .post_auth("/api/chirps", &refreshed.token, &CreateChirpRequest::new("again"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Revocation is idempotent and ends the refresh token's life
    for _ in 0..2 {
        let response = server
            .post_bearer("/api/revoke", &session.refresh_token)
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let response = server
        .post_bearer("/api/refresh", &session.refresh_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_login_ignores_expiry_hint() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();
    register(&server, &credentials).await;

    let request = LoginWithHint {
        email: credentials.email.clone(),
        password: credentials.password.clone(),
        expires_in_seconds: 1,
    };
    let response = server.post("/api/login", &request).await.unwrap();
    let session: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    let response = server
        .post_auth("/api/chirps", &session.token, &CreateChirpRequest::new("still valid"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();
    register(&server, &credentials).await;

    let wrong = Credentials {
        email: credentials.email.clone(),
        password: "wrong".to_string(),
    };
    let response = server.post("/api/login", &wrong).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.message, "Incorrect email or password");
}

#[tokio::test]
async fn test_refresh_with_access_token_fails() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();
    register(&server, &credentials).await;
    let session = login(&server, &credentials).await;

    let response = server.post_bearer("/api/refresh", &session.token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.post_empty("/api/revoke").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_validation() {
    let server = TestServer::start().await.expect("Failed to start server");

    let bad_email = Credentials {
        email: "not-an-email".to_string(),
        password: "pw".to_string(),
    };
    let response = server.post("/api/users", &bad_email).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let credentials = Credentials::unique();
    register(&server, &credentials).await;
    let response = server.post("/api/users", &credentials).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_update_credentials() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();
    let user = register(&server, &credentials).await;
    let session = login(&server, &credentials).await;

    let replacement = Credentials::unique();
    let response = server
        .put_auth("/api/users", &session.token, &replacement)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.email, replacement.email);

    let response = server.post("/api/login", &credentials).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    login(&server, &replacement).await;

    let response = server.put_auth("/api/users", "garbage", &replacement).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Chirp Tests
// ============================================================================

#[tokio::test]
async fn test_chirps_are_listed_oldest_first() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();
    register(&server, &credentials).await;
    let session = login(&server, &credentials).await;

    let mut created = Vec::new();
    for body in ["first", "second", "third"] {
        let response = server
            .post_auth("/api/chirps", &session.token, &CreateChirpRequest::new(body))
            .await
            .unwrap();
        let chirp: ChirpResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        created.push(chirp);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let response = server.get("/api/chirps").await.unwrap();
    let listed: Vec<ChirpResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed, created);

    let response = server
        .get(&format!("/api/chirps/{}", created[1].id))
        .await
        .unwrap();
    let single: ChirpResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(single.body, "second");
}

#[tokio::test]
async fn test_chirp_censoring() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();
    register(&server, &credentials).await;
    let session = login(&server, &credentials).await;

    let response = server
        .post_auth(
            "/api/chirps",
            &session.token,
            &CreateChirpRequest::new("I hear Mastodon is better than Chirpy. sharbert I need to migrate"),
        )
        .await
        .unwrap();
    let chirp: ChirpResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(
        chirp.body,
        "I hear Mastodon is better than Chirpy. **** I need to migrate"
    );
}

#[tokio::test]
async fn test_delete_chirp_permissions() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = Credentials::unique();
    let stranger = Credentials::unique();
    register(&server, &author).await;
    register(&server, &stranger).await;
    let author_session = login(&server, &author).await;
    let stranger_session = login(&server, &stranger).await;

    let response = server
        .post_auth("/api/chirps", &author_session.token, &CreateChirpRequest::new("mine"))
        .await
        .unwrap();
    let chirp: ChirpResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/chirps/{}", chirp.id);

    let response = server.delete_auth(&path, &stranger_session.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &author_session.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_metrics_and_reset() {
    let server = TestServer::start_with_config(memory_config("dev").unwrap())
        .await
        .expect("Failed to start server");
    let credentials = Credentials::unique();
    register(&server, &credentials).await;

    // Counted even when the file does not exist
    server.get("/app/").await.unwrap();
    server.get("/app/missing.html").await.unwrap();

    let html = server.get("/admin/metrics").await.unwrap().text().await.unwrap();
    assert!(html.contains("Chirpy has been visited 2 times!"));

    let response = server.post_empty("/admin/reset").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let html = server.get("/admin/metrics").await.unwrap().text().await.unwrap();
    assert!(html.contains("Chirpy has been visited 0 times!"));

    let response = server.post("/api/login", &credentials).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_reset_forbidden_outside_dev() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_empty("/admin/reset").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// PostgreSQL-backed Tests
// ============================================================================

#[tokio::test]
async fn postgres_session_roundtrip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let credentials = Credentials::unique();
    register(&server, &credentials).await;
    let session = login(&server, &credentials).await;

    let response = server
        .post_bearer("/api/refresh", &session.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_bearer("/api/revoke", &session.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_bearer("/api/refresh", &session.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
