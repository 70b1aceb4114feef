//! The ordered question catalog for the interactive init flow.

use crate::domain::{DbEngine, DbInstanceSize, EcsTaskSize, fields, validation};
use crate::ports::{InputQuestion, PasswordQuestion, Question, SelectQuestion};
use crate::services::password;

fn lowercase(input: &str) -> String {
    input.to_lowercase()
}

/// Canonical decimal form, e.g. "08080" -> "8080". Falls through unchanged
/// when the input is not an integer (the validator already rejected that).
fn canonical_number(input: &str) -> String {
    input.trim().parse::<i64>().map_or_else(|_| input.to_string(), |n| n.to_string())
}

/// The init prompts in fixed order. Collection walks this list one prompt
/// at a time; each field's value has passed its validator before the set is
/// considered complete.
pub fn questions() -> Vec<Question> {
    vec![
        Question::Input(InputQuestion {
            name: fields::PROJECT_NAME,
            message: "Project name",
            default: Some("my-project"),
            allow_empty: false,
            validate: validation::project_name,
            filter: None,
        }),
        Question::Input(InputQuestion {
            name: fields::AWS_REGION,
            message: "AWS region",
            default: Some("us-east-1"),
            allow_empty: false,
            validate: validation::aws_region,
            filter: None,
        }),
        Question::Input(InputQuestion {
            name: fields::DOMAIN,
            message: "Domain to use (optional)",
            default: None,
            allow_empty: true,
            validate: validation::domain,
            filter: Some(lowercase),
        }),
        Question::Input(InputQuestion {
            name: fields::CONTAINER_IMAGE_URL,
            message: "Container image URL (Docker Hub or ECR)",
            default: None,
            allow_empty: false,
            validate: validation::container_image_url,
            filter: None,
        }),
        Question::Input(InputQuestion {
            name: fields::CONTAINER_PORT,
            message: "Container port to expose",
            default: Some("3000"),
            allow_empty: false,
            validate: validation::container_port,
            filter: Some(canonical_number),
        }),
        Question::Select(SelectQuestion {
            name: fields::ECS_TASK_SIZE,
            message: "ECS task size",
            choices: &EcsTaskSize::NAMES,
            default: 0,
        }),
        Question::Input(InputQuestion {
            name: fields::DESIRED_COUNT,
            message: "Desired number of container instances",
            default: Some("2"),
            allow_empty: false,
            validate: validation::desired_count,
            filter: Some(canonical_number),
        }),
        Question::Input(InputQuestion {
            name: fields::HEALTH_CHECK_PATH,
            message: "Application health check path",
            default: Some("/healthz"),
            allow_empty: false,
            validate: validation::health_check_path,
            filter: None,
        }),
        Question::Select(SelectQuestion {
            name: fields::DB_ENGINE,
            message: "Database engine",
            choices: &DbEngine::NAMES,
            default: 0,
        }),
        Question::Select(SelectQuestion {
            name: fields::DB_INSTANCE_SIZE,
            message: "Database instance size",
            choices: &DbInstanceSize::NAMES,
            // "small" is the second tier.
            default: 1,
        }),
        Question::Input(InputQuestion {
            name: fields::DB_USERNAME,
            message: "Database username",
            default: Some("admin"),
            allow_empty: false,
            validate: validation::db_username,
            filter: None,
        }),
        Question::Password(PasswordQuestion {
            name: fields::DB_PASSWORD,
            message: "Database password",
            validate: validation::db_password,
            generate_default: password::generate,
        }),
    ]
}
