use super::*;
use serde_json::json;

fn user_json() -> serde_json::Value {
    json!({
        "_id": "u1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "role": "librarian",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    })
}

fn book_json() -> serde_json::Value {
    json!({
        "_id": "b1",
        "title": "Dune",
        "author": "Frank Herbert",
        "publishedYear": 1965,
        "genre": "Science Fiction",
        "stock": 3
    })
}

// =============================================================
// User / Role
// =============================================================

#[test]
fn user_decodes_underscore_id_and_camel_case() {
    let user: User = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.role, Role::Librarian);
    assert_eq!(user.full_name(), "Ada Lovelace");
}

#[test]
fn user_timestamps_are_optional() {
    let user: User = serde_json::from_value(json!({
        "_id": "u2",
        "firstName": "Sam",
        "lastName": "Reader",
        "email": "sam@example.com",
        "role": "student"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Student);
    assert!(user.created_at.is_none());
}

#[test]
fn role_parse_matches_wire_values() {
    assert_eq!(Role::parse("student"), Some(Role::Student));
    assert_eq!(Role::parse("librarian"), Some(Role::Librarian));
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::Librarian.as_str(), "librarian");
}

// =============================================================
// Book
// =============================================================

#[test]
fn book_decodes_numbers() {
    let book: Book = serde_json::from_value(book_json()).unwrap();
    assert_eq!(book.published_year, 1965);
    assert_eq!(book.stock, 3);
    assert!(book.in_stock());
}

#[test]
fn book_accepts_whole_float_stock() {
    let mut raw = book_json();
    raw["stock"] = json!(0.0);
    let book: Book = serde_json::from_value(raw).unwrap();
    assert_eq!(book.stock, 0);
    assert!(!book.in_stock());
}

#[test]
fn book_rejects_fractional_year() {
    let mut raw = book_json();
    raw["publishedYear"] = json!(1965.5);
    assert!(serde_json::from_value::<Book>(raw).is_err());
}

// =============================================================
// Checkout refs
// =============================================================

#[test]
fn checkout_decodes_bare_id_refs() {
    let checkout: Checkout = serde_json::from_value(json!({
        "_id": "c1",
        "user": "u1",
        "book": "b1",
        "checkoutDate": "2024-03-01T00:00:00Z",
        "returnDate": null,
        "returned": false
    }))
    .unwrap();
    assert_eq!(checkout.user.id(), "u1");
    assert_eq!(checkout.book.id(), "b1");
    assert!(checkout.book.full().is_none());
    assert!(checkout.return_date.is_none());
}

#[test]
fn checkout_decodes_populated_refs() {
    let checkout: Checkout = serde_json::from_value(json!({
        "_id": "c2",
        "user": user_json(),
        "book": book_json(),
        "checkoutDate": "2024-03-01T00:00:00Z",
        "returnDate": "2024-03-10T00:00:00Z",
        "returned": true
    }))
    .unwrap();
    assert_eq!(checkout.user.id(), "u1");
    assert_eq!(checkout.book.full().map(|b| b.title.as_str()), Some("Dune"));
    assert!(checkout.returned);
}

// =============================================================
// Auth + payloads
// =============================================================

#[test]
fn auth_response_token_is_optional() {
    let resp: AuthResponse = serde_json::from_value(json!({ "user": user_json() })).unwrap();
    assert!(resp.token.is_none());
    let resp: AuthResponse = serde_json::from_value(json!({ "token": "t1", "user": user_json() })).unwrap();
    assert_eq!(resp.token.as_deref(), Some("t1"));
}

#[test]
fn register_request_omits_missing_role() {
    let req = RegisterRequest {
        first_name: "Sam".to_owned(),
        last_name: "Reader".to_owned(),
        email: "sam@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: None,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({ "firstName": "Sam", "lastName": "Reader", "email": "sam@example.com", "password": "secret1" })
    );
}

#[test]
fn return_request_uses_checkout_id_key() {
    let req = ReturnRequest { checkout_id: "c1".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "checkoutId": "c1" }));
}

#[test]
fn user_patch_serializes_only_set_fields() {
    let patch = UserPatch { role: Some(Role::Librarian), ..UserPatch::default() };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "role": "librarian" }));
}
