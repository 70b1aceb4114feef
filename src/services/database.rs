//! Database (RDS) config generation.
//!
//! Credentials land in a separate secrets file so the non-sensitive record
//! can be shared freely; the caller is responsible for keeping the secrets
//! file out of version control (the ignore merge covers `*.tfvars`).

use std::path::Path;

use crate::domain::{AnswerSet, AppError, ConfigRecord, DbEngine, DbInstanceSize};
use crate::services::tfvars_writer;

pub const DB_TFVARS: &str = "db.tfvars";
pub const DB_SECRETS_TFVARS: &str = "secrets.db.tfvars";

const DEFAULT_DB_USERNAME: &str = "admin";

/// Write `<root>/<project>/db.tfvars` and `<root>/<project>/secrets.db.tfvars`.
pub fn generate(answers: &AnswerSet, output_root: &Path) -> Result<(), AppError> {
    let config_dir = output_root.join(&answers.project_name);
    let db_path = config_dir.join(DB_TFVARS);
    let secrets_path = config_dir.join(DB_SECRETS_TFVARS);

    let (non_sensitive, sensitive) = build_records(answers);

    tfvars_writer::ensure_parent_dir(&db_path)?;
    tfvars_writer::write_record(&db_path, &non_sensitive)?;
    tfvars_writer::write_record(&secrets_path, &sensitive)?;
    println!("Database configuration generated.");
    Ok(())
}

fn build_records(answers: &AnswerSet) -> (ConfigRecord, ConfigRecord) {
    let engine = answers.db_engine.unwrap_or(DbEngine::Postgresql);
    let size = answers.db_instance_size.unwrap_or(DbInstanceSize::Small);

    let mut non_sensitive = ConfigRecord::new();
    non_sensitive.push("project_name", answers.project_name.as_str());
    non_sensitive.push("aws_region", answers.aws_region.as_str());
    non_sensitive.push("db_engine", engine.name());
    non_sensitive.push("db_instance_class", size.instance_class());

    let mut sensitive = ConfigRecord::new();
    sensitive.push("db_username", answers.db_username.as_deref().unwrap_or(DEFAULT_DB_USERNAME));
    sensitive.push("db_password", answers.db_password.as_deref().unwrap_or(""));

    (non_sensitive, sensitive)
}
