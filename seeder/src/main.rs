use anyhow::Result;
use clap::Parser;
use dialoguer::Input;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use seeder::{StudentSeedConfig, seed_admin, seed_courses, seed_enrollments, seed_instructors, seed_students};

/// Campus database seeder CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Database connection URL (required)
    #[arg(short, long)]
    db_url: Option<String>,

    /// Number of fake students to generate on top of the demo roster
    #[arg(short = 'n', long, default_value = "0")]
    extra_students: usize,

    /// Random seed for reproducibility (default: 0)
    #[arg(short, long, default_value = "0")]
    rng_seed: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let db_url = match &args.db_url {
        Some(url) => url.clone(),
        None => Input::new().with_prompt("Database URL").interact_text()?,
    };

    println!("Connecting to database...");
    let db = Database::connect(&db_url).await?;

    println!("Applying migrations...");
    Migrator::up(&db, None).await?;

    if let Some(password) = seed_admin(&db).await? {
        println!("Created admin user (username: admin, password: {password})");
    }

    let instructors = seed_instructors(&db).await?;
    println!("Seeded {} instructors", instructors.len());

    let courses = seed_courses(&db, &instructors).await?;
    println!("Seeded {} courses", courses.len());

    let students = seed_students(
        &db,
        &StudentSeedConfig {
            extra_students: args.extra_students,
            seed: args.rng_seed,
        },
    )
    .await?;

    let enrollment_count = seed_enrollments(&db, &students, &courses).await?;
    println!("Seeded {} enrollments", enrollment_count);

    println!("\nSeeding complete.");

    Ok(())
}
