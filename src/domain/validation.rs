//! Field validation rules for the interactive init questions.
//!
//! Each validator returns `Ok(())` or the message to show inline under the
//! offending prompt. Validators see the raw user input; filters run after
//! acceptance.

use std::sync::LazyLock;

use regex::Regex;

static PROJECT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$").expect("invalid project name pattern")
});

static AWS_REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}-[a-z]+-[1-9]$").expect("invalid region pattern"));

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$")
        .expect("invalid domain pattern")
});

static CONTAINER_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[a-z0-9]+(?:[._-][a-z0-9]+)*/?)+(?::[\w][\w.-]{0,127})?(?:@[A-Za-z0-9+_.-]+:[A-Fa-f0-9]{32,})?$",
    )
    .expect("invalid container image pattern")
});

static HEALTH_CHECK_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[A-Za-z0-9._~/-]*$").expect("invalid path pattern"));

static DB_USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]{2,31}$").expect("invalid username pattern"));

/// DNS-label shape: lowercase alphanumeric and hyphens, 1-63 chars,
/// no leading/trailing hyphen.
pub fn project_name(input: &str) -> Result<(), String> {
    if PROJECT_NAME_RE.is_match(input) {
        Ok(())
    } else {
        Err("Project name must be a valid DNS-compatible name (lowercase alphanumeric and \
             hyphens, max 63 chars, starts/ends with alphanumeric)."
            .to_string())
    }
}

pub fn aws_region(input: &str) -> Result<(), String> {
    if AWS_REGION_RE.is_match(input) {
        Ok(())
    } else {
        Err("Please enter a valid AWS region (e.g., us-east-1).".to_string())
    }
}

/// Empty means "no custom domain". The stored value is lowercased by the
/// question filter, so matching happens against the lowercased input.
pub fn domain(input: &str) -> Result<(), String> {
    let lowered = input.to_lowercase();
    if lowered.is_empty() || DOMAIN_RE.is_match(&lowered) {
        Ok(())
    } else {
        Err("Please enter a valid domain name (e.g., example.com or sub.example.com).".to_string())
    }
}

pub fn container_image_url(input: &str) -> Result<(), String> {
    if CONTAINER_IMAGE_RE.is_match(input) {
        Ok(())
    } else {
        Err("Enter a valid container image reference (e.g., nginx:latest or \
             123456789012.dkr.ecr.us-east-1.amazonaws.com/my-app:1.0.0)."
            .to_string())
    }
}

pub fn container_port(input: &str) -> Result<(), String> {
    match input.trim().parse::<u32>() {
        Ok(port) if (1..=65535).contains(&port) => Ok(()),
        _ => Err("Enter a valid port between 1 and 65535.".to_string()),
    }
}

pub fn desired_count(input: &str) -> Result<(), String> {
    match input.trim().parse::<u32>() {
        Ok(count) if (1..=100).contains(&count) => Ok(()),
        _ => Err("Enter an integer between 1 and 100.".to_string()),
    }
}

pub fn health_check_path(input: &str) -> Result<(), String> {
    if HEALTH_CHECK_PATH_RE.is_match(input) {
        Ok(())
    } else {
        Err("Enter a valid URL path starting with / (e.g., /healthz).".to_string())
    }
}

pub fn db_username(input: &str) -> Result<(), String> {
    if DB_USERNAME_RE.is_match(input) {
        Ok(())
    } else {
        Err("Use 3-32 chars, start with a letter, letters/numbers/_/- allowed.".to_string())
    }
}

/// Complexity rule: at least 12 characters with lower, upper, digit, and a
/// non-alphanumeric character all present.
pub fn db_password(input: &str) -> Result<(), String> {
    let long_enough = input.chars().count() >= 12;
    let has_lower = input.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = input.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = input.chars().any(|c| c.is_ascii_digit());
    let has_symbol = input.chars().any(|c| !c.is_ascii_alphanumeric());

    if long_enough && has_lower && has_upper && has_digit && has_symbol {
        Ok(())
    } else {
        Err("Min 12 chars with upper, lower, number, and symbol.".to_string())
    }
}
