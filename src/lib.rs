//! infragen: interactive generator for Terraform variable files.
//!
//! Walks the user through a fixed series of questions about a project and
//! writes `.tfvars` files for the network, compute, and database components
//! under `./<project_name>/`, plus the Terraform ignore entries for the
//! project directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use adapters::TerminalPrompt;
use app::{AppContext, commands::init};

pub use domain::AppError;

/// Run the interactive init flow in the current directory.
pub fn init() -> Result<(), AppError> {
    let ctx = AppContext::new(TerminalPrompt::new());
    let output_root = std::env::current_dir()?;

    init::execute(&ctx, &output_root)?;
    println!("✅ Interactive initialization complete.");
    Ok(())
}
