//! Serializes config records to `.tfvars` files and maintains the project
//! ignore file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::domain::{AppError, ConfigRecord};

pub const IGNORE_FILE: &str = ".gitignore";

/// Terraform artifacts that must never be committed.
const TERRAFORM_IGNORES: [&str; 8] = [
    ".terraform/",
    "*.tfstate",
    "*.tfstate.*",
    "crash.log",
    "crash.*.log",
    ".terraform.lock.hcl",
    "*.tfvars",
    "*.tfvars.json",
];

/// Create all missing parent directories for a target file path.
/// Idempotent; concurrent creation by racing generators is not an error.
pub fn ensure_parent_dir(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Serialize the record and overwrite any existing file at `path`.
pub fn write_record(path: &Path, record: &ConfigRecord) -> Result<(), AppError> {
    fs::write(path, record.render())?;
    Ok(())
}

/// Append the fixed Terraform ignore entries to `<directory>/.gitignore`,
/// preserving existing content. A read failure of any kind starts from
/// empty content; the write is skipped entirely when nothing is missing,
/// so a second invocation leaves the file byte-identical.
pub fn merge_ignore_entries(directory: &Path) -> Result<(), AppError> {
    let path = directory.join(IGNORE_FILE);
    let existing = fs::read_to_string(&path).unwrap_or_default();

    let existing_lines: HashSet<&str> = existing.lines().map(|line| line.trim_end()).collect();
    let missing: Vec<&str> = TERRAFORM_IGNORES
        .iter()
        .copied()
        .filter(|entry| !existing_lines.contains(entry))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&missing.join("\n"));
    content.push('\n');

    fs::write(&path, content)?;
    Ok(())
}
