//! Interactive init: collect one answer set, then fan the generators out.

use std::path::Path;
use std::thread;

use crate::app::AppContext;
use crate::domain::{AnswerSet, AppError};
use crate::ports::{PromptPort, collect_answers};
use crate::services::{compute, database, init_questions, network};

/// Execute the init command against `output_root` (normally the current
/// directory).
///
/// Collection is strictly sequential, one prompt at a time in fixed order;
/// a prompt failure aborts before any generator runs. Once the answer set
/// is complete the three generators run concurrently over disjoint files
/// and are all joined before reporting; the first failure is propagated,
/// and writes already performed by sibling generators stay in place.
pub fn execute<P: PromptPort>(ctx: &AppContext<P>, output_root: &Path) -> Result<(), AppError> {
    println!("\nWelcome to infragen!");
    println!(
        "This tool will guide you through creating infrastructure configuration for your project.\n"
    );

    let questions = init_questions::questions();
    let values = collect_answers(ctx.prompt(), &questions)?;
    let answers = AnswerSet::from_values(&values)?;

    println!("\nInitializing project {} in {}...", answers.project_name, answers.aws_region);

    let results = thread::scope(|scope| {
        let handles = [
            scope.spawn(|| network::generate(&answers, output_root)),
            scope.spawn(|| compute::generate(&answers, output_root)),
            scope.spawn(|| database::generate(&answers, output_root)),
        ];
        handles.map(|handle| handle.join())
    });

    for result in results {
        result.map_err(|_| AppError::config_error("config generation task panicked"))??;
    }

    Ok(())
}
