mod common;

#[cfg(test)]
pub mod auth_tests {
    use std::sync::{Arc, Mutex};

    use super::common::*;

    use profile_site::api::Method;
    use profile_site::common::AuthError;
    use profile_site::config::{AppConfig, DEFAULT_SECRET_SEQUENCE};
    use profile_site::services::*;

    const VALIDATE: &str = "/api/admin/auth/validate";
    const LOGIN: &str = "/api/admin/auth/login";
    const LOGOUT: &str = "/api/admin/auth/logout";

    fn type_sequence(session: &AuthSession, keys: &[&str]) -> Vec<bool> {
        keys.iter().map(|k| session.check_key_sequence(k)).collect()
    }

    #[tokio::test]
    async fn test_restore_success_with_valid_token() {
        let harness = Harness::signed_in();
        let session = harness.session();

        session.restore().await;

        assert_eq!(
            session.state(),
            SessionState::Authenticated {
                user: Some(ADMIN_USER.to_string()),
                grant: Grant::Server,
            }
        );
        let snapshot = session.snapshot();
        assert!(snapshot.is_authenticated && snapshot.is_admin);
        assert_eq!(snapshot.token, Some(valid_token()));
    }

    #[tokio::test]
    async fn test_restore_fails_on_expired_token() {
        let harness = Harness::new();
        harness.tokens.set(&expired_token());
        let session = harness.session();

        session.restore().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(harness.tokens.get(), None);
        assert!(harness.server.requests_to(Method::Get, VALIDATE).is_empty());
    }

    #[tokio::test]
    async fn test_restore_fails_on_malformed_token() {
        let harness = Harness::new();
        harness.tokens.set("not-a-jwt");
        let session = harness.session();

        session.restore().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(harness.tokens.get(), None);
    }

    #[tokio::test]
    async fn test_restore_fails_on_rejected_token() {
        let harness = Harness::signed_in();
        harness.server.revoke_tokens();
        let session = harness.session();

        session.restore().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(harness.tokens.get(), None);
        assert_eq!(harness.server.requests_to(Method::Get, VALIDATE).len(), 1);
    }

    #[tokio::test]
    async fn test_restore_fails_on_network_error() {
        let harness = Harness::signed_in();
        harness.server.fail_transport(Method::Get, VALIDATE);
        let session = harness.session();

        session.restore().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(harness.tokens.get(), None);
    }

    #[tokio::test]
    async fn test_restore_without_token_makes_no_request() {
        let harness = Harness::new();
        let session = harness.session();

        session.restore().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(harness.server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_restore_success_on_token_without_expiry() {
        let harness = Harness::new();
        harness.server.issue_token(&token_without_expiry());
        harness.tokens.set(&token_without_expiry());
        let session = harness.session();

        session.restore().await;

        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_success() {
        let harness = Harness::new();
        let session = harness.session();

        assert!(session.login(ADMIN_USER, ADMIN_PASSWORD).await);

        assert!(session.is_authenticated());
        assert_eq!(harness.tokens.get(), Some(valid_token()));
        let request = &harness.server.requests_to(Method::Post, LOGIN)[0];
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_login_fails_on_wrong_password() {
        let harness = Harness::new();
        let session = harness.session();

        let outcome = session.login_with_outcome(ADMIN_USER, "wrong").await;

        assert_eq!(outcome, Err(AuthError::InvalidCredentials));
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
        assert!(!session.login(ADMIN_USER, "wrong").await);
        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(harness.tokens.get(), None);
    }

    #[tokio::test]
    async fn test_login_fails_on_network_error() {
        let harness = Harness::new();
        harness.server.fail_transport(Method::Post, LOGIN);
        let session = harness.session();

        let outcome = session.login_with_outcome(ADMIN_USER, ADMIN_PASSWORD).await;

        let err = outcome.unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
        assert_eq!(err.to_string(), "Login failed. Please try again.");
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_login_fails_on_already_expired_token() {
        let harness = Harness::new();
        harness.server.issue_token(&expired_token());
        let session = harness.session();
        let seen: Arc<Mutex<Vec<bool>>> = Arc::default();
        let sink = seen.clone();
        session.subscribe(move |s| sink.lock().unwrap().push(s.is_authenticated));

        let outcome = session.login_with_outcome(ADMIN_USER, ADMIN_PASSWORD).await;

        assert_eq!(outcome, Err(AuthError::Expired));
        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(harness.tokens.get(), None);
        assert!(!seen.lock().unwrap().contains(&true));
        assert!(harness.server.requests_to(Method::Post, LOGOUT).is_empty());
    }

    #[tokio::test]
    async fn test_login_fails_on_unreadable_token() {
        let harness = Harness::new();
        harness.server.issue_token("opaque");
        let session = harness.session();
        let seen: Arc<Mutex<Vec<bool>>> = Arc::default();
        let sink = seen.clone();
        session.subscribe(move |s| sink.lock().unwrap().push(s.is_authenticated));

        let outcome = session.login_with_outcome(ADMIN_USER, ADMIN_PASSWORD).await;

        assert_eq!(outcome, Err(AuthError::Malformed));
        assert!(!session.is_authenticated());
        assert_eq!(harness.tokens.get(), None);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_logout_success_is_idempotent() {
        let harness = Harness::new();
        let session = harness.session();
        assert!(session.login(ADMIN_USER, ADMIN_PASSWORD).await);

        session.logout().await;
        session.logout().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(harness.tokens.get(), None);

        let logouts = harness.server.requests_to(Method::Post, LOGOUT);
        assert_eq!(logouts.len(), 1);
        let expected = format!("Bearer {}", valid_token());
        assert_eq!(logouts[0].header("Authorization"), Some(expected.as_str()));
    }

    #[tokio::test]
    async fn test_logout_success_when_server_unreachable() {
        let harness = Harness::new();
        let session = harness.session();
        assert!(session.login(ADMIN_USER, ADMIN_PASSWORD).await);
        harness.server.fail_transport(Method::Post, LOGOUT);

        session.logout().await;

        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(harness.tokens.get(), None);
    }

    #[tokio::test]
    async fn test_get_after_logout_sends_no_authorization() {
        let harness = Harness::new();
        let session = harness.session();
        assert!(session.login(ADMIN_USER, ADMIN_PASSWORD).await);
        session.logout().await;

        let response = harness.secure().get("/api/speeches").await.unwrap();

        assert!(response.is_some());
        let sent = harness.server.requests_to(Method::Get, "/api/speeches");
        assert_eq!(sent[0].header("Authorization"), None);
    }

    #[test]
    fn test_key_sequence_success_on_exact_sequence() {
        let harness = Harness::new();
        let session = harness.session();

        let results = type_sequence(&session, &DEFAULT_SECRET_SEQUENCE);

        assert_eq!(results.iter().filter(|r| **r).count(), 1);
        assert!(results[results.len() - 1]);
        assert_eq!(
            session.state(),
            SessionState::Authenticated {
                user: None,
                grant: Grant::KeySequence,
            }
        );
        assert!(harness.server.requests().is_empty());
        assert_eq!(harness.tokens.get(), None);
    }

    #[test]
    fn test_key_sequence_success_after_noise() {
        let harness = Harness::new();
        let session = harness.session();

        type_sequence(&session, &["a", "Enter", "ArrowUp"]);
        let results = type_sequence(&session, &DEFAULT_SECRET_SEQUENCE);

        assert_eq!(results.last(), Some(&true));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_key_sequence_fails_on_near_miss() {
        let harness = Harness::new();
        let session = harness.session();
        let mut keys = DEFAULT_SECRET_SEQUENCE.to_vec();
        keys[9] = "b";

        let results = type_sequence(&session, &keys);

        assert!(results.iter().all(|r| !r));
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_key_sequence_fails_when_disabled() {
        let harness = Harness {
            config: AppConfig {
                secret_sequence: None,
                ..test_config()
            },
            ..Harness::new()
        };
        let session = harness.session();

        let results = type_sequence(&session, &DEFAULT_SECRET_SEQUENCE);

        assert!(results.iter().all(|r| !r));
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_key_sequence_session_rejected_by_server() {
        let harness = Harness::new();
        let session = harness.session();
        type_sequence(&session, &DEFAULT_SECRET_SEQUENCE);
        assert!(session.is_authenticated());

        let response = harness
            .secure()
            .post("/api/speeches", &serde_json::json!({ "titleEn": "x" }))
            .await
            .unwrap();

        assert!(response.is_none());
        assert_eq!(harness.navigator.visits(), vec!["/admin/login".to_string()]);
        assert!(harness.server.collection("/api/speeches").is_empty());
    }

    #[tokio::test]
    async fn test_subscribe_success_on_login_and_logout() {
        let harness = Harness::new();
        let session = harness.session();
        let seen: Arc<Mutex<Vec<bool>>> = Arc::default();
        let sink = seen.clone();
        session.subscribe(move |s| sink.lock().unwrap().push(s.is_authenticated));

        assert!(session.login(ADMIN_USER, ADMIN_PASSWORD).await);
        session.logout().await;

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }
}
