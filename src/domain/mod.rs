pub mod answers;
pub mod config_record;
pub mod error;
pub mod validation;

pub use answers::{
    AnswerSet, DbEngine, DbInstanceSize, EcsTaskSize, TaskResources, fields,
};
pub use config_record::{ConfigRecord, ConfigValue};
pub use error::AppError;
