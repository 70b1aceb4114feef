//! Shared fixtures for unit tests.

use crate::domain::{AnswerSet, DbEngine, DbInstanceSize, EcsTaskSize};

/// A fully populated answer set matching the documented end-to-end scenario.
pub fn sample_answer_set() -> AnswerSet {
    AnswerSet {
        project_name: "my-project".to_string(),
        aws_region: "us-east-1".to_string(),
        domain: Some("example.com".to_string()),
        container_image_url: Some("ghcr.io/example/image:latest".to_string()),
        container_port: Some(8080),
        ecs_task_size: Some(EcsTaskSize::Small),
        desired_count: Some(3),
        health_check_path: Some("/health".to_string()),
        db_engine: Some(DbEngine::Postgresql),
        db_instance_size: Some(DbInstanceSize::Small),
        db_username: Some("admin".to_string()),
        db_password: Some("Str0ng!Passw0rd".to_string()),
    }
}
