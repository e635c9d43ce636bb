//! Security Utilities
//!
//! Cryptographic primitives and anti-injection helpers: salted password
//! hashing, session token generation and validation, SQL-injection pattern
//! detection, and password strength scoring.

use base64::prelude::*;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Salt length in bytes before Base64 encoding
const SALT_LEN: usize = 16;

/// Session token length in bytes before Base64 encoding
const SESSION_TOKEN_LEN: usize = 32;

/// Generate a random salt for password hashing (Base64-encoded)
pub fn generate_salt() -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill(&mut salt);
    BASE64_STANDARD.encode(salt)
}

/// Hash a password with the given salt using SHA-256
///
/// The digest consumes the salt bytes first, then the password bytes,
/// and the result is Base64-encoded for storage.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    BASE64_STANDARD.encode(hasher.finalize())
}

/// Hash a password with a freshly generated salt
///
/// Returns a single `salt:hash` string suitable for storage in the
/// customer credential record. Two calls with the same password produce
/// different results because the salts differ.
pub fn hash_password_with_salt(password: &str) -> String {
    let salt = generate_salt();
    let hash = hash_password(password, &salt);
    format!("{}:{}", salt, hash)
}

/// Verify a password against a stored `salt:hash` value
///
/// Fails closed: an empty or malformed stored value (anything other than
/// exactly two colon-delimited parts) yields `false`, never an error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parts: Vec<&str> = stored_hash.split(':').collect();
    if parts.len() != 2 {
        return false;
    }

    let (salt, hash) = (parts[0], parts[1]);
    hash_password(password, salt) == hash
}

/// Generate a random 6-digit customer identifier
///
/// Uniqueness against existing records is the caller's responsibility;
/// this only guarantees the `[100000, 999999]` format.
pub fn generate_customer_id() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Mask a password for display (one `*` per character)
pub fn mask_password(password: &str) -> String {
    "*".repeat(password.chars().count())
}

/// Keywords scanned by [`contains_sql_injection_patterns`].
const SQL_INJECTION_KEYWORDS: &[&str] = &[
    "select",
    "insert",
    "update",
    "delete",
    "drop",
    "create",
    "alter",
    "union",
    "exec",
    "execute",
    "script",
    "javascript",
    "vbscript",
    "onload",
    "onerror",
    "onclick",
    "--",
    "/*",
    "*/",
    "xp_",
    "sp_",
];

/// Check whether input contains potential SQL injection patterns
///
/// Case-insensitive substring scan. Over-flags benign text containing one
/// of the keywords ("description" matches "script"); that precision/recall
/// tradeoff is intentional, since the primary injection defense is
/// parameterized queries at the data-store boundary.
pub fn contains_sql_injection_patterns(input: &str) -> bool {
    let lower = input.to_lowercase();
    SQL_INJECTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Escape input for safe inclusion in database text fields
///
/// Trims, doubles single quotes, and backslash-escapes double quotes and
/// backslashes. Defense-in-depth only; never a substitute for
/// parameterized queries.
pub fn sanitize_for_database(input: &str) -> String {
    let trimmed = input.trim();
    let mut escaped = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '\'' => escaped.push_str("''"),
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Validate session token format
///
/// Accepts Base64-encoded tokens whose decoded length is between 16 and
/// 64 bytes. Decode failures yield `false`.
pub fn is_valid_session_token(token: &str) -> bool {
    if token.trim().is_empty() {
        return false;
    }

    match BASE64_STANDARD.decode(token) {
        Ok(decoded) => (16..=64).contains(&decoded.len()),
        Err(_) => false,
    }
}

/// Generate a random session token (32 bytes, Base64-encoded)
pub fn generate_session_token() -> String {
    let mut token = [0u8; SESSION_TOKEN_LEN];
    rand::thread_rng().fill(&mut token);
    BASE64_STANDARD.encode(token)
}

/// Special characters counted toward password strength
const STRENGTH_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Score password strength on a 0-4 scale
///
/// Length and character-variety criteria each add a point; passwords
/// containing a well-known weak pattern (`password`, `123456`, `qwerty`)
/// lose two points, floored at zero. The final score is clamped to 4.
pub fn get_password_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let mut score: i32 = 0;

    // Length criteria count characters, not bytes
    let char_count = password.chars().count();
    if char_count >= 8 {
        score += 1;
    }
    if char_count >= 12 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| STRENGTH_SPECIAL_CHARS.contains(c)) {
        score += 1;
    }

    let lower = password.to_lowercase();
    if lower.contains("password") || lower.contains("123456") || lower.contains("qwerty") {
        score = (score - 2).max(0);
    }

    score.min(4) as u8
}

/// Human-readable description for a strength score
pub fn password_strength_description(strength: u8) -> &'static str {
    match strength {
        0 => "Very Weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        4 => "Strong",
        _ => "Unknown",
    }
}
