use super::*;

fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "username": "ratna",
        "name": "Ratna Sari",
        "email": "ratna@example.test",
        "role": "staff",
        "permissions": ["reports.view", "warehouse.view"],
        "department": "Pharmacy",
        "created_at": "2026-01-05T08:00:00Z",
        "updated_at": "2026-01-05T08:00:00Z"
    })
}

#[test]
fn envelope_round_trips_without_touching_fields() {
    let wire = serde_json::json!({
        "success": true,
        "message": "ok",
        "data": [1, 2, 3]
    });

    let envelope: Envelope<serde_json::Value> =
        serde_json::from_value(wire.clone()).expect("envelope");
    assert!(envelope.success);
    assert_eq!(envelope.message, "ok");
    assert_eq!(envelope.data, Some(serde_json::json!([1, 2, 3])));
    assert!(envelope.errors.is_none());

    // Absent fields stay absent on the way back out.
    let back = serde_json::to_value(&envelope).expect("serialize");
    assert_eq!(back, wire);
}

#[test]
fn envelope_keeps_field_errors() {
    let wire = serde_json::json!({
        "success": false,
        "message": "Validation failed",
        "errors": {"name": ["Name is required"]}
    });

    let envelope: Envelope<serde_json::Value> = serde_json::from_value(wire).expect("envelope");
    let errors = envelope.errors.expect("field errors");
    assert_eq!(errors["name"], vec!["Name is required".to_owned()]);
}

#[test]
fn profile_parses_with_and_without_optional_fields() {
    let full: Profile = serde_json::from_value(profile_json()).expect("profile");
    assert_eq!(full.department.as_deref(), Some("Pharmacy"));
    assert!(full.position.is_none());

    let mut minimal = profile_json();
    minimal.as_object_mut().expect("object").remove("department");
    let parsed: Profile = serde_json::from_value(minimal).expect("profile");
    assert!(parsed.department.is_none());
}

#[test]
fn login_response_parses_wire_shape() {
    let wire = serde_json::json!({
        "success": true,
        "message": "Logged in",
        "token": "tok-123",
        "token_type": "Bearer",
        "expires_in": 3600,
        "user": profile_json()
    });

    let login: LoginResponse = serde_json::from_value(wire).expect("login response");
    assert_eq!(login.token, "tok-123");
    assert_eq!(login.token_type, "Bearer");
    assert_eq!(login.expires_in, 3600);
    assert_eq!(login.user.username, "ratna");
}

#[test]
fn route_context_assembles_full_path_and_renames_field() {
    let ctx = RouteContext::new("/reports/list", "?status=open", "#row-4");
    assert_eq!(ctx.full_path, "/reports/list?status=open#row-4");

    let wire = serde_json::to_value(&ctx).expect("serialize");
    assert_eq!(
        wire,
        serde_json::json!({
            "route": "/reports/list",
            "fullPath": "/reports/list?status=open#row-4",
            "search": "?status=open",
            "hash": "#row-4"
        })
    );
}
