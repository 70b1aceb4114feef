//! Scripted end-to-end runs through the library surface.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use infragen::adapters::ScriptedPrompt;
use infragen::app::{AppContext, commands::init};
use infragen::domain::fields;

fn full_scenario_prompt() -> ScriptedPrompt {
    ScriptedPrompt::new()
        .with_answer(fields::PROJECT_NAME, "my-project")
        .with_answer(fields::AWS_REGION, "us-east-1")
        .with_answer(fields::DOMAIN, "example.com")
        .with_answer(fields::CONTAINER_IMAGE_URL, "ghcr.io/example/image:latest")
        .with_answer(fields::CONTAINER_PORT, "8080")
        .with_answer(fields::ECS_TASK_SIZE, "small")
        .with_answer(fields::DESIRED_COUNT, "3")
        .with_answer(fields::HEALTH_CHECK_PATH, "/health")
        .with_answer(fields::DB_ENGINE, "postgresql")
        .with_answer(fields::DB_INSTANCE_SIZE, "small")
        .with_answer(fields::DB_USERNAME, "admin")
        .with_answer(fields::DB_PASSWORD, "Sup3r!Secret#Pass")
}

fn read(root: &Path, file: &str) -> String {
    fs::read_to_string(root.join("my-project").join(file)).unwrap()
}

#[test]
fn full_run_produces_the_documented_files() {
    let root = TempDir::new().unwrap();
    let ctx = AppContext::new(full_scenario_prompt());

    init::execute(&ctx, root.path()).unwrap();

    // The generated directory is exactly ./<project_name>.
    let entries: Vec<String> = fs::read_dir(root.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["my-project".to_string()]);

    assert_eq!(
        read(root.path(), "vpc.tfvars"),
        "project_name = \"my-project\"\naws_region = \"us-east-1\"\ndomain_name = \"example.com\""
    );

    let ecs = read(root.path(), "ecs.tfvars");
    assert!(ecs.contains("container_image = \"ghcr.io/example/image:latest\""));
    assert!(ecs.contains("container_port = 8080"));
    assert!(ecs.contains("task_cpu = 512"));
    assert!(ecs.contains("task_memory = 1024"));
    assert!(ecs.contains("desired_count = 3"));
    assert!(ecs.contains("health_check_path = \"/health\""));

    assert_eq!(
        read(root.path(), "db.tfvars"),
        "project_name = \"my-project\"\naws_region = \"us-east-1\"\n\
         db_engine = \"postgresql\"\ndb_instance_class = \"db.t4g.small\""
    );

    assert_eq!(
        read(root.path(), "secrets.db.tfvars"),
        "db_username = \"admin\"\ndb_password = \"Sup3r!Secret#Pass\""
    );
}

#[test]
fn ports_and_counts_are_numbers_even_when_collected_as_text() {
    let root = TempDir::new().unwrap();
    let ctx = AppContext::new(full_scenario_prompt());

    init::execute(&ctx, root.path()).unwrap();

    let ecs = read(root.path(), "ecs.tfvars");
    assert!(!ecs.contains("container_port = \"8080\""));
    assert!(!ecs.contains("desired_count = \"3\""));
}

#[test]
fn defaults_only_run_uses_documented_fallbacks() {
    let root = TempDir::new().unwrap();
    let prompt = ScriptedPrompt::new().with_answer(fields::CONTAINER_IMAGE_URL, "nginx:latest");
    let ctx = AppContext::new(prompt);

    init::execute(&ctx, root.path()).unwrap();

    let vpc = read(root.path(), "vpc.tfvars");
    assert_eq!(vpc, "project_name = \"my-project\"\naws_region = \"us-east-1\"");
    assert!(!vpc.contains("domain_name"));

    let ecs = read(root.path(), "ecs.tfvars");
    assert!(ecs.contains("container_image = \"nginx:latest\""));
    assert!(ecs.contains("container_port = 3000"));
    assert!(ecs.contains("task_cpu = 512"));
    assert!(ecs.contains("task_memory = 1024"));
    assert!(ecs.contains("desired_count = 2"));
    assert!(ecs.contains("health_check_path = \"/healthz\""));

    let db = read(root.path(), "db.tfvars");
    assert!(db.contains("db_engine = \"postgresql\""));
    assert!(db.contains("db_instance_class = \"db.t4g.small\""));

    // An unsupplied password gets a generated 20-character default.
    let secrets = read(root.path(), "secrets.db.tfvars");
    let password_line = secrets
        .lines()
        .find(|line| line.starts_with("db_password = "))
        .expect("password line present");
    let password = password_line
        .trim_start_matches("db_password = ")
        .trim_matches('"');
    assert_eq!(password.chars().count(), 20);
    assert!(secrets.contains("db_username = \"admin\""));
}

#[test]
fn rejected_region_aborts_the_run_before_generation() {
    let root = TempDir::new().unwrap();
    let prompt = full_scenario_prompt().with_answer(fields::AWS_REGION, "USEAST1");
    let ctx = AppContext::new(prompt);

    assert!(init::execute(&ctx, root.path()).is_err());
    assert!(fs::read_dir(root.path()).unwrap().next().is_none());
}

#[test]
fn repeated_runs_leave_the_ignore_file_byte_identical() {
    let root = TempDir::new().unwrap();

    init::execute(&AppContext::new(full_scenario_prompt()), root.path()).unwrap();
    let first = read(root.path(), ".gitignore");

    init::execute(&AppContext::new(full_scenario_prompt()), root.path()).unwrap();
    let second = read(root.path(), ".gitignore");

    assert_eq!(first, second);
    assert_eq!(first.matches("*.tfvars\n").count(), 1);
}

#[test]
fn existing_ignore_content_is_preserved() {
    let root = TempDir::new().unwrap();
    let config_dir = root.path().join("my-project");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join(".gitignore"), "node_modules/\n").unwrap();

    init::execute(&AppContext::new(full_scenario_prompt()), root.path()).unwrap();

    let ignore = read(root.path(), ".gitignore");
    assert!(ignore.starts_with("node_modules/\n"));
    assert!(ignore.contains(".terraform/\n"));
    assert!(ignore.ends_with("*.tfvars.json\n"));
}
