//! Network (VPC) config generation.

use std::path::Path;

use crate::domain::{AnswerSet, AppError, ConfigRecord};
use crate::services::tfvars_writer;

pub const VPC_TFVARS: &str = "vpc.tfvars";

/// Write `<root>/<project>/vpc.tfvars` and merge the Terraform ignore
/// entries into the project directory. `domain_name` is emitted only when
/// the user chose a custom domain.
pub fn generate(answers: &AnswerSet, output_root: &Path) -> Result<(), AppError> {
    let config_dir = output_root.join(&answers.project_name);
    let path = config_dir.join(VPC_TFVARS);

    let record = build_record(answers);

    tfvars_writer::ensure_parent_dir(&path)?;
    tfvars_writer::write_record(&path, &record)?;
    tfvars_writer::merge_ignore_entries(&config_dir)?;
    println!("VPC configuration generated.");
    Ok(())
}

fn build_record(answers: &AnswerSet) -> ConfigRecord {
    let mut record = ConfigRecord::new();
    record.push("project_name", answers.project_name.as_str());
    record.push("aws_region", answers.aws_region.as_str());
    if let Some(domain) = &answers.domain {
        record.push("domain_name", domain.as_str());
    }
    record
}
