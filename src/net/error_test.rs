use super::*;

fn body(message: Option<&str>) -> ApiErrorBody {
    ApiErrorBody { message: message.map(str::to_owned), errors: None }
}

#[test]
fn unauthorized_maps_to_auth_rejected() {
    let err = ApiError::from_status(401, Some(body(Some("Token expired"))));
    assert_eq!(err, ApiError::AuthRejected { message: "Token expired".to_owned() });
    assert!(err.is_auth_rejected());
    assert!(!err.is_transient());
    assert_eq!(err.to_string(), "Token expired");
}

#[test]
fn missing_body_uses_status_fallback_message() {
    let err = ApiError::from_status(404, None);
    assert_eq!(err.to_string(), "request failed: 404");
}

#[test]
fn blank_message_uses_status_fallback_message() {
    let err = ApiError::from_status(401, Some(body(Some("  "))));
    assert_eq!(err.to_string(), "request failed: 401");
}

#[test]
fn server_errors_are_transient() {
    assert!(ApiError::from_status(503, None).is_transient());
    assert!(ApiError::Transport("offline".to_owned()).is_transient());
    assert!(!ApiError::from_status(400, None).is_transient());
    assert!(!ApiError::Decode("bad json".to_owned()).is_transient());
}

#[test]
fn field_errors_are_exposed() {
    let mut errors = BTreeMap::new();
    errors.insert("email".to_owned(), vec!["Email already in use".to_owned()]);
    let err = ApiError::from_status(
        422,
        Some(ApiErrorBody { message: Some("Validation failed".to_owned()), errors: Some(errors) }),
    );
    assert_eq!(err.field_error("email"), Some("Email already in use"));
    assert_eq!(err.field_error("password"), None);
}

const FORM: &[(&str, &str)] = &[("firstName", "First name"), ("email", "Email"), ("password", "Password")];

fn validation_error(errors: &[(&str, &str)]) -> ApiError {
    let errors = errors
        .iter()
        .map(|(field, msg)| ((*field).to_owned(), vec![(*msg).to_owned()]))
        .collect();
    ApiError::from_status(
        422,
        Some(ApiErrorBody { message: Some("Validation failed".to_owned()), errors: Some(errors) }),
    )
}

#[test]
fn form_message_prefers_first_flagged_field_in_form_order() {
    let err = validation_error(&[("password", "Too short"), ("email", "Email already in use")]);
    assert_eq!(err.form_message(FORM), "Email: Email already in use");
}

#[test]
fn form_message_ignores_fields_the_form_does_not_show() {
    let err = validation_error(&[("role", "Unknown role")]);
    assert_eq!(err.form_message(FORM), "Validation failed");
}

#[test]
fn form_message_falls_back_for_non_validation_errors() {
    assert_eq!(ApiError::Transport("offline".to_owned()).form_message(FORM), "connection error: offline");
    assert_eq!(ApiError::from_status(409, None).form_message(FORM), "request failed: 409");
}

#[test]
fn transport_display_mentions_connection() {
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "connection error: offline");
}
