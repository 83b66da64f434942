//! CLI administration tool for course-api.
//!
//! Manages students and shows enrollment statistics directly against the
//! database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Add a student (prompts for missing values)
//! cargo run --bin admin -- student add --name "Student 0" --birth-date 1995-01-01
//!
//! # List students
//! cargo run --bin admin -- student list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or the `DB_*` components): PostgreSQL connection

use course_api::application::services::StudentService;
use course_api::config::{Config, StorageBackend};
use course_api::domain::enrollment::EnrollmentLimit;
use course_api::infrastructure::persistence::{PgCourseRepository, PgStudentRepository};
use course_api::server::connect_pool;
use course_api::state::AppState;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing course-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage students
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Student management subcommands.
#[derive(Subcommand)]
enum StudentAction {
    /// Add a new student
    Add {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,

        /// Birth date in YYYY-MM-DD format
        #[arg(short, long)]
        birth_date: Option<NaiveDate>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all students
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("admin works only with STORAGE_BACKEND=postgres");
    }
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Student { action } => {
            let state = build_state(&config, &pool).await?;
            handle_student_action(action, &state.student_service).await?
        }
        Commands::Stats => {
            let state = build_state(&config, &pool).await?;
            handle_stats(&state, &pool).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Applies migrations and wires the services over PostgreSQL.
async fn build_state(config: &Config, pool: &PgPool) -> Result<AppState> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool.clone());
    Ok(AppState::new(
        Arc::new(PgCourseRepository::new(pool.clone())),
        Arc::new(PgStudentRepository::new(pool)),
        EnrollmentLimit::new(config.max_students_per_course),
    ))
}

/// Dispatches student management commands.
async fn handle_student_action(action: StudentAction, service: &StudentService) -> Result<()> {
    match action {
        StudentAction::Add {
            name,
            birth_date,
            yes,
        } => add_student(service, name, birth_date, yes).await,
        StudentAction::List => list_students(service).await,
    }
}

/// Adds a student, prompting for any value not given on the command line.
async fn add_student(
    service: &StudentService,
    name: Option<String>,
    birth_date: Option<NaiveDate>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Add Student".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let birth_date = match birth_date {
        Some(d) => d,
        None => Input::<NaiveDate>::new()
            .with_prompt("Birth date (YYYY-MM-DD)")
            .interact_text()?,
    };

    if name.trim().is_empty() {
        anyhow::bail!("Name must not be empty");
    }

    println!("  Name:       {}", name.cyan());
    println!("  Birth date: {}", birth_date.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this student?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let student = service
        .create_student(name, birth_date)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create student: {}", e))?;

    println!(
        "{} {}",
        "Student created with id".green().bold(),
        student.id.to_string().bright_white().bold()
    );

    Ok(())
}

/// Lists students as a table.
async fn list_students(service: &StudentService) -> Result<()> {
    println!("{}", "Students".bright_blue().bold());
    println!();

    let students = service
        .list_students()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list students: {}", e))?;

    if students.is_empty() {
        println!("{}", "  No students found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<40} {:<12}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Born".bright_white().bold()
    );
    println!("  {}", "-".repeat(60).bright_black());

    for s in &students {
        println!(
            "  {:<6} {:<40} {}",
            s.id.to_string().bright_black(),
            s.name.cyan(),
            s.birth_date.to_string().bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        students.len().to_string().bright_white().bold()
    );

    Ok(())
}

/// Displays course, student and enrollment counts.
async fn handle_stats(state: &AppState, pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let courses = state
        .course_service
        .count_courses()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count courses: {}", e))?;

    let students = state
        .student_service
        .count_students()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count students: {}", e))?;

    let enrollments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM course_students")
        .fetch_one(pool)
        .await?;

    let largest: Option<i64> = sqlx::query_scalar(
        "SELECT MAX(n) FROM (SELECT COUNT(*) AS n FROM course_students GROUP BY course_id) t",
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Limit:          {}",
        state
            .course_service
            .enrollment_limit()
            .max()
            .to_string()
            .bright_white()
    );
    println!("  Courses:        {}", courses.to_string().bright_green().bold());
    println!("  Students:       {}", students.to_string().bright_green().bold());
    println!("  Enrollments:    {}", enrollments.to_string().bright_green().bold());
    println!(
        "  Largest course: {}",
        largest.unwrap_or(0).to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
