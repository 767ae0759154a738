//! Password rules applied at registration. Every rule runs, and all violations
//! are reported together.

use std::{collections::HashSet, sync::LazyLock};

use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Lowercase, one entry per line.
static COMMON_PASSWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("common_passwords.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordViolation {
    #[error("This password is too short. It must contain at least {0} characters.")]
    TooShort(usize),
    #[error("This password is too long. It must contain at most {0} characters.")]
    TooLong(usize),
    #[error("The password is too similar to the {0}.")]
    TooSimilar(&'static str),
    #[error("This password is too common.")]
    TooCommon,
    #[error("This password is entirely numeric.")]
    EntirelyNumeric,
}

/// Values the password is compared against.
#[derive(Debug, Clone, Copy)]
pub struct PasswordContext<'a> {
    pub username: &'a str,
    pub email: &'a str,
}

type Rule = fn(&str, &PasswordContext<'_>) -> Result<(), PasswordViolation>;

const RULES: &[Rule] = &[
    check_length,
    check_max_length,
    check_similarity,
    check_common,
    check_numeric,
];

pub fn validate_password(
    password: &str,
    context: &PasswordContext<'_>,
) -> Result<(), Vec<PasswordViolation>> {
    let violations: Vec<PasswordViolation> = RULES
        .iter()
        .filter_map(|rule| rule(password, context).err())
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_length(password: &str, _: &PasswordContext<'_>) -> Result<(), PasswordViolation> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordViolation::TooShort(MIN_PASSWORD_LENGTH));
    }
    Ok(())
}

fn check_max_length(password: &str, _: &PasswordContext<'_>) -> Result<(), PasswordViolation> {
    if is_too_long(password) {
        return Err(PasswordViolation::TooLong(MAX_PASSWORD_LENGTH));
    }
    Ok(())
}

fn is_too_long(password: &str) -> bool {
    password.chars().nth(MAX_PASSWORD_LENGTH).is_some()
}

fn check_similarity(password: &str, context: &PasswordContext<'_>) -> Result<(), PasswordViolation> {
    // Oversized input is already rejected by `check_max_length`.
    if is_too_long(password) {
        return Ok(());
    }

    let password = password.to_lowercase();
    let local_part = context.email.split('@').next().unwrap_or_default();

    let attributes = [
        ("username", context.username),
        ("email address", context.email),
        ("email address", local_part),
    ];

    for (name, value) in attributes {
        if is_similar(&password, &value.to_lowercase()) {
            return Err(PasswordViolation::TooSimilar(name));
        }
    }

    Ok(())
}

/// Attributes longer than this are not compared.
const MAX_ATTRIBUTE_LENGTH: usize = 320;

/// Similar when one string contains the other, or when they share a common
/// substring covering at least 70% of the longer one.
fn is_similar(password: &str, attribute: &str) -> bool {
    if attribute.chars().count() < 3
        || attribute.chars().nth(MAX_ATTRIBUTE_LENGTH).is_some()
        || password.is_empty()
    {
        return false;
    }

    if password.contains(attribute) || attribute.contains(password) {
        return true;
    }

    let longest = longest_common_substring(password, attribute);
    let longer = password.chars().count().max(attribute.chars().count());

    longest * 10 >= longer * 7
}

fn longest_common_substring(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut previous = vec![0usize; b.len() + 1];
    let mut best = 0;

    for ca in &a {
        let mut current = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                current[j + 1] = previous[j] + 1;
                best = best.max(current[j + 1]);
            }
        }
        previous = current;
    }

    best
}

fn check_common(password: &str, _: &PasswordContext<'_>) -> Result<(), PasswordViolation> {
    let lowered = password.trim().to_lowercase();
    if COMMON_PASSWORDS.contains(lowered.as_str()) {
        return Err(PasswordViolation::TooCommon);
    }
    Ok(())
}

fn check_numeric(password: &str, _: &PasswordContext<'_>) -> Result<(), PasswordViolation> {
    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        return Err(PasswordViolation::EntirelyNumeric);
    }
    Ok(())
}
