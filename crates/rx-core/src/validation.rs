//! Client-side form validation.
//!
//! These checks run before anything is sent to the backend. The patterns and
//! messages are user-facing, so changes here show up verbatim in forms.

use crate::{Credentials, RegistrationForm};

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Field name (wire name, camelCase) to error message. Empty means valid.
pub type FieldErrors = BTreeMap<String, String>;

pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern is valid"));

static PINCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("pincode pattern is valid"));

static GSTIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("GSTIN pattern is valid")
});

static AADHAAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[2-9][0-9]{11}$").expect("Aadhaar pattern is valid"));

static PAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern is valid"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value.trim())
}

pub fn is_valid_pincode(value: &str) -> bool {
    PINCODE_PATTERN.is_match(value.trim())
}

/// Case-insensitive; the value is uppercased before matching
pub fn is_valid_gstin(value: &str) -> bool {
    GSTIN_PATTERN.is_match(&value.trim().to_uppercase())
}

pub fn is_valid_aadhaar(value: &str) -> bool {
    AADHAAR_PATTERN.is_match(value.trim())
}

/// Case-insensitive; the value is uppercased before matching
pub fn is_valid_pan(value: &str) -> bool {
    PAN_PATTERN.is_match(&value.trim().to_uppercase())
}

/// Password length in UTF-16 code units, matching how browser forms count
/// it. Characters outside the Basic Multilingual Plane count twice.
pub fn password_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate a registration form.
///
/// Every required field is checked for presence first; format rules only run
/// on fields that are present. Optional fields are never an error when empty.
pub fn validate_registration(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require(
        &mut errors,
        "establishmentName",
        &form.establishment_name,
        "Establishment name is required",
    );
    require(&mut errors, "ownerName", &form.owner_name, "Owner name is required");
    require(
        &mut errors,
        "designation",
        &form.designation,
        "Designation is required",
    );

    if require(&mut errors, "email", &form.email, "Email is required") && !is_valid_email(&form.email)
    {
        insert(&mut errors, "email", "Please enter a valid email address");
    }

    if require(
        &mut errors,
        "phoneNumber",
        &form.phone_number,
        "Phone number is required",
    ) && !is_valid_phone(&form.phone_number)
    {
        insert(
            &mut errors,
            "phoneNumber",
            "Please enter a valid 10-digit mobile number",
        );
    }

    if require(&mut errors, "password", &form.password, "Password is required")
        && password_length(&form.password) < MIN_PASSWORD_LENGTH
    {
        insert(
            &mut errors,
            "password",
            "Password must be at least 6 characters",
        );
    }

    if require(
        &mut errors,
        "confirmPassword",
        &form.confirm_password,
        "Please confirm your password",
    ) && form.confirm_password != form.password
    {
        insert(&mut errors, "confirmPassword", "Passwords do not match");
    }

    require(&mut errors, "street", &form.street, "Street is required");
    require(&mut errors, "city", &form.city, "City is required");
    require(&mut errors, "state", &form.state, "State is required");

    if require(&mut errors, "pincode", &form.pincode, "Pincode is required")
        && !is_valid_pincode(&form.pincode)
    {
        insert(
            &mut errors,
            "pincode",
            "Please enter a valid 6-digit pincode",
        );
    }

    if is_present(&form.gstin) && !is_valid_gstin(&form.gstin) {
        insert(&mut errors, "gstin", "Please enter a valid GSTIN");
    }

    if is_present(&form.aadhaar) && !is_valid_aadhaar(&form.aadhaar) {
        insert(
            &mut errors,
            "aadhaar",
            "Please enter a valid 12-digit Aadhaar number",
        );
    }

    if is_present(&form.pan) && !is_valid_pan(&form.pan) {
        insert(&mut errors, "pan", "Please enter a valid PAN");
    }

    errors
}

/// Validate the login form before it is submitted
pub fn validate_credentials(credentials: &Credentials) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if require(&mut errors, "email", &credentials.email, "Email is required")
        && !is_valid_email(&credentials.email)
    {
        insert(&mut errors, "email", "Please enter a valid email address");
    }

    require(
        &mut errors,
        "password",
        &credentials.password,
        "Password is required",
    );

    errors
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Records `message` when the value is blank. Returns whether it was present.
fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) -> bool {
    if is_present(value) {
        return true;
    }

    insert(errors, field, message);
    false
}

fn insert(errors: &mut FieldErrors, field: &str, message: &str) {
    errors.insert(field.to_string(), message.to_string());
}
