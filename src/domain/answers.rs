//! The typed answer set collected from one interactive run.

use std::collections::HashMap;

use crate::domain::AppError;

/// Field names shared between the question catalog and [`AnswerSet::from_values`].
pub mod fields {
    pub const PROJECT_NAME: &str = "project_name";
    pub const AWS_REGION: &str = "aws_region";
    pub const DOMAIN: &str = "domain";
    pub const CONTAINER_IMAGE_URL: &str = "container_image_url";
    pub const CONTAINER_PORT: &str = "container_port";
    pub const ECS_TASK_SIZE: &str = "ecs_task_size";
    pub const DESIRED_COUNT: &str = "desired_count";
    pub const HEALTH_CHECK_PATH: &str = "health_check_path";
    pub const DB_ENGINE: &str = "db_engine";
    pub const DB_INSTANCE_SIZE: &str = "db_instance_size";
    pub const DB_USERNAME: &str = "db_username";
    pub const DB_PASSWORD: &str = "db_password";
}

/// ECS task size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcsTaskSize {
    Small,
    Medium,
    Large,
}

/// CPU units and memory (MiB) for one task size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskResources {
    pub cpu: u32,
    pub memory: u32,
}

impl EcsTaskSize {
    /// All sizes in prompt order.
    pub const ALL: [EcsTaskSize; 3] = [EcsTaskSize::Small, EcsTaskSize::Medium, EcsTaskSize::Large];

    /// Choice labels in prompt order.
    pub const NAMES: [&'static str; 3] = ["small", "medium", "large"];

    pub fn name(&self) -> &'static str {
        match self {
            EcsTaskSize::Small => "small",
            EcsTaskSize::Medium => "medium",
            EcsTaskSize::Large => "large",
        }
    }

    pub fn from_name(name: &str) -> Option<EcsTaskSize> {
        match name {
            "small" => Some(EcsTaskSize::Small),
            "medium" => Some(EcsTaskSize::Medium),
            "large" => Some(EcsTaskSize::Large),
            _ => None,
        }
    }

    /// Task CPU/memory for this tier.
    pub fn resources(&self) -> TaskResources {
        match self {
            EcsTaskSize::Small => TaskResources { cpu: 512, memory: 1024 },
            EcsTaskSize::Medium => TaskResources { cpu: 1024, memory: 2048 },
            EcsTaskSize::Large => TaskResources { cpu: 2048, memory: 4096 },
        }
    }
}

/// Managed database engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbEngine {
    Postgresql,
    Mysql,
}

impl DbEngine {
    pub const NAMES: [&'static str; 2] = ["postgresql", "mysql"];

    pub fn name(&self) -> &'static str {
        match self {
            DbEngine::Postgresql => "postgresql",
            DbEngine::Mysql => "mysql",
        }
    }

    pub fn from_name(name: &str) -> Option<DbEngine> {
        match name {
            "postgresql" => Some(DbEngine::Postgresql),
            "mysql" => Some(DbEngine::Mysql),
            _ => None,
        }
    }
}

/// Database instance size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbInstanceSize {
    Micro,
    Small,
    Medium,
    Large,
    Xlarge,
}

impl DbInstanceSize {
    pub const NAMES: [&'static str; 5] = ["micro", "small", "medium", "large", "xlarge"];

    pub fn name(&self) -> &'static str {
        match self {
            DbInstanceSize::Micro => "micro",
            DbInstanceSize::Small => "small",
            DbInstanceSize::Medium => "medium",
            DbInstanceSize::Large => "large",
            DbInstanceSize::Xlarge => "xlarge",
        }
    }

    pub fn from_name(name: &str) -> Option<DbInstanceSize> {
        match name {
            "micro" => Some(DbInstanceSize::Micro),
            "small" => Some(DbInstanceSize::Small),
            "medium" => Some(DbInstanceSize::Medium),
            "large" => Some(DbInstanceSize::Large),
            "xlarge" => Some(DbInstanceSize::Xlarge),
            _ => None,
        }
    }

    /// RDS instance class for this tier.
    pub fn instance_class(&self) -> &'static str {
        match self {
            DbInstanceSize::Micro => "db.t4g.micro",
            DbInstanceSize::Small => "db.t4g.small",
            DbInstanceSize::Medium => "db.t4g.medium",
            DbInstanceSize::Large => "db.t4g.large",
            DbInstanceSize::Xlarge => "db.t4g.xlarge",
        }
    }
}

/// The complete, validated set of user-supplied configuration values for one
/// run. Built once after collection and read-only input to the generators;
/// optional fields keep their fallback handling in the generators.
#[derive(Debug, Clone)]
pub struct AnswerSet {
    pub project_name: String,
    pub aws_region: String,
    pub domain: Option<String>,
    pub container_image_url: Option<String>,
    pub container_port: Option<u16>,
    pub ecs_task_size: Option<EcsTaskSize>,
    pub desired_count: Option<u32>,
    pub health_check_path: Option<String>,
    pub db_engine: Option<DbEngine>,
    pub db_instance_size: Option<DbInstanceSize>,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
}

impl AnswerSet {
    /// Build the typed set from the collected `field name -> accepted value`
    /// map. Values have already passed their validators; empty optional
    /// values collapse to `None`.
    pub fn from_values(values: &HashMap<&'static str, String>) -> Result<AnswerSet, AppError> {
        Ok(AnswerSet {
            project_name: required(values, fields::PROJECT_NAME)?,
            aws_region: required(values, fields::AWS_REGION)?,
            domain: optional(values, fields::DOMAIN),
            container_image_url: optional(values, fields::CONTAINER_IMAGE_URL),
            container_port: parse_optional(values, fields::CONTAINER_PORT)?,
            ecs_task_size: optional(values, fields::ECS_TASK_SIZE)
                .map(|v| enum_value(fields::ECS_TASK_SIZE, &v, EcsTaskSize::from_name))
                .transpose()?,
            desired_count: parse_optional(values, fields::DESIRED_COUNT)?,
            health_check_path: optional(values, fields::HEALTH_CHECK_PATH),
            db_engine: optional(values, fields::DB_ENGINE)
                .map(|v| enum_value(fields::DB_ENGINE, &v, DbEngine::from_name))
                .transpose()?,
            db_instance_size: optional(values, fields::DB_INSTANCE_SIZE)
                .map(|v| enum_value(fields::DB_INSTANCE_SIZE, &v, DbInstanceSize::from_name))
                .transpose()?,
            db_username: optional(values, fields::DB_USERNAME),
            db_password: optional(values, fields::DB_PASSWORD),
        })
    }
}

fn required(values: &HashMap<&'static str, String>, name: &'static str) -> Result<String, AppError> {
    values
        .get(name)
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| AppError::config_error(format!("Missing required answer '{name}'")))
}

fn optional(values: &HashMap<&'static str, String>, name: &'static str) -> Option<String> {
    values.get(name).filter(|value| !value.is_empty()).cloned()
}

fn parse_optional<T: std::str::FromStr>(
    values: &HashMap<&'static str, String>,
    name: &'static str,
) -> Result<Option<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    optional(values, name)
        .map(|value| value.parse::<T>().map_err(|e| AppError::parse_error(name, e.to_string())))
        .transpose()
}

fn enum_value<T>(
    name: &'static str,
    value: &str,
    from_name: fn(&str) -> Option<T>,
) -> Result<T, AppError> {
    from_name(value)
        .ok_or_else(|| AppError::parse_error(name, format!("unknown choice '{value}'")))
}
