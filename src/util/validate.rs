//! Form input validation.
//!
//! Each validator trims raw input and either builds the request payload or
//! returns the message to show next to the form. Failures never leave the
//! page that produced them.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{BookInput, LoginRequest, RegisterRequest, Role, UserInput, UserPatch};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_REGISTER_NAME_LEN: usize = 2;

/// Wire field names and their labels, in the order each form shows them.
/// Used to surface server-side validation messages.
pub const REGISTER_FIELDS: &[(&str, &str)] = &[
    ("firstName", "First name"),
    ("lastName", "Last name"),
    ("email", "Email"),
    ("password", "Password"),
];
pub const BOOK_FIELDS: &[(&str, &str)] = &[
    ("title", "Title"),
    ("author", "Author"),
    ("publishedYear", "Published year"),
    ("genre", "Genre"),
    ("stock", "Copies in stock"),
];
pub const USER_FIELDS: &[(&str, &str)] = &[
    ("firstName", "First name"),
    ("lastName", "Last name"),
    ("email", "Email"),
    ("password", "Password"),
    ("role", "Role"),
];

/// Loose shape check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    if !is_valid_email(email) {
        return Err("Please enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(LoginRequest { email: email.trim().to_owned(), password: password.to_owned() })
}

pub fn validate_register(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    if first_name.trim().chars().count() < MIN_REGISTER_NAME_LEN {
        return Err("First name must be at least 2 characters");
    }
    if last_name.trim().chars().count() < MIN_REGISTER_NAME_LEN {
        return Err("Last name must be at least 2 characters");
    }
    let login = validate_login(email, password)?;
    Ok(RegisterRequest {
        first_name: first_name.trim().to_owned(),
        last_name: last_name.trim().to_owned(),
        email: login.email,
        password: login.password,
        role: None,
    })
}

/// Validate the book form. `current_year` bounds the published year.
pub fn validate_book(
    title: &str,
    author: &str,
    published_year: &str,
    genre: &str,
    stock: &str,
    current_year: i32,
) -> Result<BookInput, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required");
    }
    let author = author.trim();
    if author.is_empty() {
        return Err("Author is required");
    }
    let published_year = published_year
        .trim()
        .parse::<i32>()
        .map_err(|_| "Published year must be a number")?;
    if published_year < 1 {
        return Err("Published year is required");
    }
    if published_year > current_year {
        return Err("Published year can't be in the future");
    }
    let genre = genre.trim();
    if genre.is_empty() {
        return Err("Genre is required");
    }
    let stock = stock.trim().parse::<i32>().map_err(|_| "Stock must be a whole number")?;
    if stock < 0 {
        return Err("Stock cannot be negative");
    }
    Ok(BookInput {
        title: title.to_owned(),
        author: author.to_owned(),
        published_year,
        genre: genre.to_owned(),
        stock,
    })
}

fn validate_user_fields(first_name: &str, last_name: &str, email: &str) -> Result<(), &'static str> {
    if first_name.trim().is_empty() {
        return Err("First name is required");
    }
    if last_name.trim().is_empty() {
        return Err("Last name is required");
    }
    if !is_valid_email(email) {
        return Err("Invalid email address");
    }
    Ok(())
}

/// Validate the librarian "new user" form.
pub fn validate_new_user(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<UserInput, &'static str> {
    validate_user_fields(first_name, last_name, email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    let role = Role::parse(role).ok_or("Please select a role")?;
    Ok(UserInput {
        first_name: first_name.trim().to_owned(),
        last_name: last_name.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
        role,
    })
}

/// Validate the librarian "edit user" form. A blank password leaves the
/// current one unchanged.
pub fn validate_user_edit(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<UserPatch, &'static str> {
    validate_user_fields(first_name, last_name, email)?;
    let password = match password.trim() {
        "" => None,
        _ if password.chars().count() < MIN_PASSWORD_LEN => return Err("Password must be at least 6 characters"),
        _ => Some(password.to_owned()),
    };
    let role = Role::parse(role).ok_or("Please select a role")?;
    Ok(UserPatch {
        first_name: Some(first_name.trim().to_owned()),
        last_name: Some(last_name.trim().to_owned()),
        email: Some(email.trim().to_owned()),
        password,
        role: Some(role),
    })
}

/// Calendar year according to the browser clock.
pub fn current_year() -> i32 {
    #[cfg(feature = "csr")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }
    #[cfg(not(feature = "csr"))]
    {
        i32::MAX
    }
}
