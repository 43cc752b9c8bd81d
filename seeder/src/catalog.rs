use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use campus_backend::entities::sea_orm_active_enums::CourseLevel;
use campus_backend::entities::{course, instructor};

/// Demo instructor roster.
pub async fn seed_instructors(db: &DatabaseConnection) -> Result<Vec<instructor::Model>> {
    let data = [
        (
            "Иван",
            "Петров",
            "i.petrov@fefu.ru",
            "Кибербезопасность",
            "Кандидат технических наук",
            "Эксперт в области кибербезопасности с 10-летним опытом.",
        ),
        (
            "Мария",
            "Сидорова",
            "m.sidorova@fefu.ru",
            "Веб-разработка",
            "Доктор технических наук",
            "Специалист по современным веб-технологиям и фреймворкам.",
        ),
        (
            "Алексей",
            "Козлов",
            "a.kozlov@fefu.ru",
            "Сетевые технологии",
            "",
            "Инженер сетевой безопасности с практическим опытом.",
        ),
    ];

    let now = Utc::now();
    let mut inserted = Vec::with_capacity(data.len());

    for (first_name, last_name, email, specialization, degree, bio) in data {
        let model = instructor::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(None),
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            email: Set(email.to_string()),
            specialization: Set(specialization.to_string()),
            degree: Set(degree.to_string()),
            bio: Set(bio.to_string()),
            is_active: Set(true),
            created_at: Set(now),
        };
        inserted.push(model.insert(db).await?);
    }

    Ok(inserted)
}

/// Demo course catalog. `instructors` must come from `seed_instructors`.
pub async fn seed_courses(
    db: &DatabaseConnection,
    instructors: &[instructor::Model],
) -> Result<Vec<course::Model>> {
    let data = [
        (
            "Основы Python",
            "python-basics",
            "Базовый курс по программированию на языке Python. Изучение синтаксиса, структур данных и основ ООП.",
            36,
            0,
            CourseLevel::Beginner,
            25,
            0i64,
        ),
        (
            "Веб-безопасность",
            "web-security",
            "Продвинутый курс по защите веб-приложений. SQL-инъекции, XSS, CSRF и другие уязвимости.",
            48,
            0,
            CourseLevel::Advanced,
            20,
            15000,
        ),
        (
            "Современный JavaScript",
            "modern-javascript",
            "Изучение современных возможностей JavaScript: ES6+, асинхронное программирование, фреймворки.",
            42,
            1,
            CourseLevel::Intermediate,
            30,
            12000,
        ),
        (
            "Защита сетей",
            "network-defense",
            "Курс по защите компьютерных сетей. Firewalls, IDS/IPS, VPN и методы атак на сети.",
            40,
            2,
            CourseLevel::Advanced,
            15,
            18000,
        ),
        (
            "Веб-разработка на Django",
            "django-web-dev",
            "Полный курс по созданию веб-приложений на Django с нуля до deployment.",
            60,
            1,
            CourseLevel::Intermediate,
            20,
            20000,
        ),
    ];

    let now = Utc::now();
    let mut inserted = Vec::with_capacity(data.len());

    for (title, slug, description, duration, instructor_idx, level, max_students, price) in data {
        let model = course::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            slug: Set(slug.to_string()),
            description: Set(description.to_string()),
            duration: Set(duration),
            instructor_id: Set(instructors.get(instructor_idx).map(|i| i.id)),
            level: Set(level),
            max_students: Set(max_students),
            price: Set(Decimal::from(price)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        inserted.push(model.insert(db).await?);
    }

    Ok(inserted)
}
