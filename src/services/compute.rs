//! Compute (ECS) config generation.

use std::path::Path;

use crate::domain::{AnswerSet, AppError, ConfigRecord, EcsTaskSize};
use crate::services::tfvars_writer;

pub const ECS_TFVARS: &str = "ecs.tfvars";

const DEFAULT_CONTAINER_PORT: u16 = 3000;
const DEFAULT_DESIRED_COUNT: u32 = 2;
const DEFAULT_HEALTH_CHECK_PATH: &str = "/healthz";

/// Write `<root>/<project>/ecs.tfvars`. Task CPU/memory come from the size
/// tier table; ports and counts are emitted as numbers.
pub fn generate(answers: &AnswerSet, output_root: &Path) -> Result<(), AppError> {
    let path = output_root.join(&answers.project_name).join(ECS_TFVARS);

    let record = build_record(answers);

    tfvars_writer::ensure_parent_dir(&path)?;
    tfvars_writer::write_record(&path, &record)?;
    println!("ECS configuration generated.");
    Ok(())
}

fn build_record(answers: &AnswerSet) -> ConfigRecord {
    let resources = answers.ecs_task_size.unwrap_or(EcsTaskSize::Small).resources();

    let mut record = ConfigRecord::new();
    record.push("project_name", answers.project_name.as_str());
    record.push("aws_region", answers.aws_region.as_str());
    record.push("container_image", answers.container_image_url.as_deref().unwrap_or(""));
    record.push("container_port", answers.container_port.unwrap_or(DEFAULT_CONTAINER_PORT));
    record.push("task_cpu", resources.cpu);
    record.push("task_memory", resources.memory);
    record.push("desired_count", answers.desired_count.unwrap_or(DEFAULT_DESIRED_COUNT));
    record.push(
        "health_check_path",
        answers.health_check_path.as_deref().unwrap_or(DEFAULT_HEALTH_CHECK_PATH),
    );
    record
}
