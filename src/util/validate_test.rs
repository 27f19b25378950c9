use super::*;

// =============================================================
// Email + login
// =============================================================

#[test]
fn email_shape_check() {
    assert!(is_valid_email("reader@library.org"));
    assert!(is_valid_email("  reader@library.org "));
    assert!(!is_valid_email("reader"));
    assert!(!is_valid_email("@library.org"));
    assert!(!is_valid_email("reader@library"));
    assert!(!is_valid_email("reader@@library.org"));
    assert!(!is_valid_email("rea der@library.org"));
    assert!(!is_valid_email("reader@library..org"));
}

#[test]
fn login_trims_email_and_requires_password_length() {
    assert_eq!(
        validate_login(" a@b.io ", "secret"),
        Ok(LoginRequest { email: "a@b.io".to_owned(), password: "secret".to_owned() })
    );
    assert_eq!(validate_login("a@b.io", "short"), Err("Password must be at least 6 characters"));
    assert_eq!(validate_login("nope", "secret"), Err("Please enter a valid email address"));
}

#[test]
fn register_requires_two_character_names() {
    assert_eq!(
        validate_register("A", "Lovelace", "a@b.io", "secret"),
        Err("First name must be at least 2 characters")
    );
    assert_eq!(
        validate_register("Ada", " L ", "a@b.io", "secret"),
        Err("Last name must be at least 2 characters")
    );
    let req = validate_register(" Ada ", "Lovelace", "a@b.io", "secret").unwrap();
    assert_eq!(req.first_name, "Ada");
    assert_eq!(req.role, None);
}

// =============================================================
// Book form
// =============================================================

#[test]
fn book_form_builds_input() {
    let input = validate_book(" Dune ", "Frank Herbert", "1965", "Science Fiction", "3", 2026).unwrap();
    assert_eq!(
        input,
        BookInput {
            title: "Dune".to_owned(),
            author: "Frank Herbert".to_owned(),
            published_year: 1965,
            genre: "Science Fiction".to_owned(),
            stock: 3,
        }
    );
}

#[test]
fn book_form_rejects_missing_fields() {
    assert_eq!(validate_book("", "A", "1965", "G", "1", 2026), Err("Title is required"));
    assert_eq!(validate_book("T", " ", "1965", "G", "1", 2026), Err("Author is required"));
    assert_eq!(validate_book("T", "A", "1965", "", "1", 2026), Err("Genre is required"));
}

#[test]
fn book_form_bounds_published_year() {
    assert_eq!(validate_book("T", "A", "0", "G", "1", 2026), Err("Published year is required"));
    assert_eq!(validate_book("T", "A", "2027", "G", "1", 2026), Err("Published year can't be in the future"));
    assert_eq!(validate_book("T", "A", "19x5", "G", "1", 2026), Err("Published year must be a number"));
    assert!(validate_book("T", "A", "2026", "G", "1", 2026).is_ok());
}

#[test]
fn book_form_rejects_negative_stock() {
    assert_eq!(validate_book("T", "A", "1965", "G", "-1", 2026), Err("Stock cannot be negative"));
    assert_eq!(validate_book("T", "A", "1965", "G", "1.5", 2026), Err("Stock must be a whole number"));
    assert_eq!(validate_book("T", "A", "1965", "G", "0", 2026).map(|b| b.stock), Ok(0));
}

// =============================================================
// User forms
// =============================================================

#[test]
fn new_user_requires_password_and_role() {
    assert_eq!(
        validate_new_user("Ada", "Lovelace", "a@b.io", "12345", "student"),
        Err("Password must be at least 6 characters")
    );
    assert_eq!(validate_new_user("Ada", "Lovelace", "a@b.io", "123456", ""), Err("Please select a role"));
    let input = validate_new_user("Ada", "Lovelace", "a@b.io", "123456", "librarian").unwrap();
    assert_eq!(input.role, Role::Librarian);
}

#[test]
fn user_edit_sets_every_field() {
    let patch = validate_user_edit("Ada", "Lovelace", "a@b.io", "", "student").unwrap();
    assert_eq!(patch.first_name.as_deref(), Some("Ada"));
    assert_eq!(patch.role, Some(Role::Student));
    assert_eq!(patch.password, None);
    assert_eq!(validate_user_edit("", "Lovelace", "a@b.io", "", "student"), Err("First name is required"));
    assert_eq!(validate_user_edit("Ada", "Lovelace", "bad", "", "student"), Err("Invalid email address"));
}

#[test]
fn user_edit_password_is_optional_but_checked() {
    assert_eq!(
        validate_user_edit("Ada", "Lovelace", "a@b.io", "abc", "student"),
        Err("Password must be at least 6 characters")
    );
    let patch = validate_user_edit("Ada", "Lovelace", "a@b.io", "new-secret", "student").unwrap();
    assert_eq!(patch.password.as_deref(), Some("new-secret"));
}

// =============================================================
// Server-side field labels
// =============================================================

#[test]
fn field_tables_use_wire_names_of_the_payloads() {
    let book = serde_json::to_value(BookInput {
        title: "Dune".to_owned(),
        author: "Frank Herbert".to_owned(),
        published_year: 1965,
        genre: "Science fiction".to_owned(),
        stock: 2,
    })
    .expect("serialize");
    for (field, _) in BOOK_FIELDS {
        assert!(book.get(field).is_some(), "book payload lacks {field}");
    }

    let user = serde_json::to_value(UserInput {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@library.org".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Librarian,
    })
    .expect("serialize");
    for (field, _) in USER_FIELDS {
        assert!(user.get(field).is_some(), "user payload lacks {field}");
    }

    let register = serde_json::to_value(RegisterRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@library.org".to_owned(),
        password: "secret1".to_owned(),
        role: None,
    })
    .expect("serialize");
    for (field, _) in REGISTER_FIELDS {
        assert!(register.get(field).is_some(), "register payload lacks {field}");
    }
}
