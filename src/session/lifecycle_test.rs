use futures::executor::block_on;

use super::*;
use crate::net::transport::Method;
use crate::test_support::{network_failure, response, test_client};

fn login_body(token: &str, username: &str) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": "Logged in",
        "token": token,
        "token_type": "Bearer",
        "expires_in": 3600,
        "user": {
            "id": 3,
            "username": username,
            "name": "Test User",
            "email": format!("{username}@example.test"),
            "role": "staff",
            "permissions": ["reports.view"],
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z"
        }
    })
}

fn credentials() -> Credentials {
    Credentials {
        username: "ratna".to_owned(),
        password: "secret".to_owned(),
    }
}

#[test]
fn login_posts_to_the_type_specific_endpoint_without_auth() {
    let (client, transport, _) = test_client(vec![response(200, login_body("tok-s", "ratna"))]);

    let result = block_on(login(&client, UserType::Staff, &credentials())).expect("login");
    assert_eq!(result.token, "tok-s");

    let calls = transport.calls();
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(calls[0].url, "/api/v1/staff/login");
    assert!(!calls[0].headers.iter().any(|(n, _)| n == "Authorization"));
    let body: serde_json::Value =
        serde_json::from_str(calls[0].body.as_deref().expect("body")).expect("json");
    assert_eq!(body, serde_json::json!({"username": "ratna", "password": "secret"}));
}

#[test]
fn login_does_not_persist_anything() {
    let (client, _, _) = test_client(vec![response(200, login_body("tok-s", "ratna"))]);

    let _ = block_on(login(&client, UserType::Staff, &credentials())).expect("login");
    assert!(!client.store().is_authenticated(UserType::Staff));
}

#[test]
fn sign_in_persists_the_credential_on_success() {
    let (client, _, _) = test_client(vec![response(200, login_body("tok-a", "head"))]);

    let response = block_on(sign_in(&client, UserType::Admin, &credentials())).expect("sign in");
    assert_eq!(response.token_type, "Bearer");
    assert!(client.store().is_authenticated(UserType::Admin));
    assert_eq!(client.store().read(UserType::Admin).as_deref(), Some("tok-a"));
    assert_eq!(
        client
            .store()
            .read_profile(UserType::Admin)
            .expect("profile")
            .username,
        "head"
    );
}

#[test]
fn sign_in_persists_nothing_on_rejected_credentials() {
    let (client, _, _) = test_client(vec![response(
        422,
        serde_json::json!({"success": false, "message": "Invalid credentials"}),
    )]);

    let result = block_on(sign_in(&client, UserType::Staff, &credentials()));
    assert!(result.is_err());
    assert!(!client.store().is_authenticated(UserType::Staff));
}

#[test]
fn unified_logout_clears_even_when_the_server_errors() {
    let (client, transport, _) = test_client(vec![response(
        500,
        serde_json::json!({"success": false, "message": "boom"}),
    )]);
    seed_staff(&client);

    block_on(logout(&client, UserType::Staff));

    assert!(!client.store().is_authenticated(UserType::Staff));
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn unified_logout_clears_on_transport_failure_too() {
    let (client, _, _) = test_client(vec![network_failure()]);
    seed_staff(&client);

    block_on(logout(&client, UserType::Staff));
    assert!(!client.store().is_authenticated(UserType::Staff));
}

#[test]
fn unified_logout_targets_the_right_endpoint_with_the_slot_token() {
    let (client, transport, _) = test_client(vec![response(
        200,
        serde_json::json!({"success": true, "message": "Logged out"}),
    )]);
    seed_staff(&client);
    seed_admin(&client);

    block_on(logout(&client, UserType::Staff));

    let calls = transport.calls();
    assert_eq!(calls[0].url, "/api/v1/staff/logout");
    // Even with an admin session present, the staff logout must carry the
    // staff token.
    assert!(
        calls[0]
            .headers
            .iter()
            .any(|(n, v)| n == "Authorization" && v == "Bearer tok-s")
    );
    assert!(client.store().is_authenticated(UserType::Admin));
}

#[test]
fn admin_logout_rethrows_but_still_clears() {
    let (client, _, _) = test_client(vec![response(
        500,
        serde_json::json!({"success": false, "message": "boom"}),
    )]);
    seed_admin(&client);

    let result = block_on(logout_admin(&client));
    assert!(result.is_err());
    assert!(!client.store().is_authenticated(UserType::Admin));
}

#[test]
fn staff_logout_returns_the_envelope_on_success() {
    let (client, _, _) = test_client(vec![response(
        200,
        serde_json::json!({"success": true, "message": "Logged out"}),
    )]);
    seed_staff(&client);

    let envelope = block_on(logout_staff(&client)).expect("logout");
    assert!(envelope.success);
    assert!(!client.store().is_authenticated(UserType::Staff));
}

#[test]
fn verify_auth_posts_the_route_context_authenticated() {
    let (client, transport, _) = test_client(vec![response(
        200,
        serde_json::json!({"success": true, "message": "ok"}),
    )]);
    seed_staff(&client);

    let route = RouteContext::new("/reports/list", "?status=open", "");
    block_on(verify_auth(&client, &route)).expect("verified");

    let calls = transport.calls();
    assert_eq!(calls[0].url, "/api/v1/auth/verify");
    assert_eq!(calls[0].method, Method::Post);
    let body: serde_json::Value =
        serde_json::from_str(calls[0].body.as_deref().expect("body")).expect("json");
    assert_eq!(body["route"], "/reports/list");
    assert_eq!(body["fullPath"], "/reports/list?status=open");
    assert!(
        calls[0]
            .headers
            .iter()
            .any(|(n, v)| n == "Authorization" && v == "Bearer tok-s")
    );
}

#[test]
fn verify_auth_401_clears_the_session_and_fails() {
    let (client, _, _) = test_client(vec![response(401, serde_json::json!({}))]);
    seed_staff(&client);

    let result = block_on(verify_auth(
        &client,
        &RouteContext::new("/reports/list", "", ""),
    ));

    assert!(matches!(result, Err(ApiError::Authentication { .. })));
    assert!(!client.store().is_authenticated(UserType::Staff));
}

fn seed_staff<T: crate::net::transport::Transport>(client: &ApiClient<T>) {
    client.store().store(
        UserType::Staff,
        "tok-s",
        &serde_json::from_value(login_body("tok-s", "ratna")["user"].clone()).expect("profile"),
    );
}

fn seed_admin<T: crate::net::transport::Transport>(client: &ApiClient<T>) {
    client.store().store(
        UserType::Admin,
        "tok-a",
        &serde_json::from_value(login_body("tok-a", "head")["user"].clone()).expect("profile"),
    );
}
