use anyhow::Result;
use chrono::{NaiveDate, Utc};
use fake::{
    Fake,
    faker::internet::en::FreeEmailProvider,
    faker::name::en::{FirstName, LastName},
    rand::Rng,
    rand::SeedableRng,
    rand::seq::IndexedRandom,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use campus_backend::entities::sea_orm_active_enums::{Faculty, Role};
use campus_backend::entities::{skill, student};

/// Configuration for student seeding
pub struct StudentSeedConfig {
    /// Number of fake students generated on top of the fixed roster
    pub extra_students: usize,
    /// Random seed for reproducibility (default: 0)
    pub seed: u64,
}

const SKILLS: [(&str, i32); 10] = [
    ("Python", 8),
    ("Django", 7),
    ("JavaScript", 6),
    ("HTML/CSS", 9),
    ("SQL", 7),
    ("Git", 8),
    ("Docker", 5),
    ("React", 6),
    ("Алгоритмы", 8),
    ("Машинное обучение", 4),
];

/// Seed the fixed demo roster plus `extra_students` generated ones, each with
/// a slice of the skill catalog.
pub async fn seed_students(
    db: &DatabaseConnection,
    config: &StudentSeedConfig,
) -> Result<Vec<student::Model>> {
    let fixed: [(&str, &str, &str, (i32, u32, u32), Faculty, i32, Decimal); 5] = [
        (
            "Анна",
            "Иванова",
            "anna.ivanova@fefu.ru",
            (2000, 5, 15),
            Faculty::Cs,
            3,
            Decimal::new(47, 1),
        ),
        (
            "Дмитрий",
            "Смирнов",
            "dmitry.smirnov@fefu.ru",
            (1999, 8, 22),
            Faculty::Se,
            4,
            Decimal::new(42, 1),
        ),
        (
            "Екатерина",
            "Попова",
            "ekaterina.popova@fefu.ru",
            (2001, 3, 10),
            Faculty::It,
            2,
            Decimal::new(49, 1),
        ),
        (
            "Михаил",
            "Васильев",
            "mikhail.vasilyev@fefu.ru",
            (2000, 11, 5),
            Faculty::Ds,
            3,
            Decimal::new(40, 1),
        ),
        (
            "Ольга",
            "Новикова",
            "olga.novikova@fefu.ru",
            (1999, 12, 30),
            Faculty::Web,
            5,
            Decimal::new(45, 1),
        ),
    ];

    let now = Utc::now();
    let mut inserted = Vec::new();

    for (first_name, last_name, email, (y, m, d), faculty, year, gpa) in fixed {
        let model = student::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(None),
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            email: Set(email.to_string()),
            birth_date: Set(NaiveDate::from_ymd_opt(y, m, d)),
            faculty: Set(faculty),
            year: Set(year),
            gpa: Set(gpa),
            role: Set(Role::Student),
            phone: Set(String::new()),
            bio: Set(String::new()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        inserted.push(model.insert(db).await?);
    }

    // Generated padding beyond the fixed roster
    let mut rng = fake::rand::rngs::StdRng::seed_from_u64(config.seed);
    let faculties = [Faculty::Cs, Faculty::Se, Faculty::It, Faculty::Ds, Faculty::Web];

    for i in 0..config.extra_students {
        let first_name: String = FirstName().fake_with_rng(&mut rng);
        let last_name: String = LastName().fake_with_rng(&mut rng);
        let provider: String = FreeEmailProvider().fake_with_rng(&mut rng);
        let email = format!(
            "{}.{}{}@{}",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            i,
            provider
        );

        let birth_date = NaiveDate::from_ymd_opt(
            rng.random_range(1995..2007),
            rng.random_range(1..=12),
            rng.random_range(1..=28),
        );

        let model = student::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(None),
            first_name: Set(first_name),
            last_name: Set(last_name),
            email: Set(email),
            birth_date: Set(birth_date),
            faculty: Set(*faculties.choose(&mut rng).unwrap_or(&Faculty::Cs)),
            year: Set(rng.random_range(1..=6)),
            gpa: Set(Decimal::new(rng.random_range(200..=500), 2)),
            role: Set(Role::Student),
            phone: Set(String::new()),
            bio: Set(String::new()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        inserted.push(model.insert(db).await?);
    }

    // Every student gets a window of three skills from the shared catalog
    let mut skill_count = 0usize;
    for (i, student_record) in inserted.iter().enumerate() {
        for offset in 0..3 {
            let (name, level) = SKILLS[(i + offset) % SKILLS.len()];
            let model = skill::ActiveModel {
                id: Set(Uuid::new_v4()),
                student_id: Set(student_record.id),
                name: Set(name.to_string()),
                level: Set(level),
            };
            model.insert(db).await?;
            skill_count += 1;
        }
    }

    println!(
        "Seeded {} students with {} skills",
        inserted.len(),
        skill_count
    );

    Ok(inserted)
}
