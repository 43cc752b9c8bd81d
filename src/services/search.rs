use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::entities::prelude::Student;
use crate::entities::student;
use crate::errors::{AppError, internal_error};

/// Outcome of a student lookup: the first/best match plus a count of all
/// matches, or a not-found message echoing the query.
#[derive(Debug)]
pub struct SearchOutcome {
    pub success: bool,
    pub message: String,
    pub student: Option<student::Model>,
    pub matches: usize,
}

/// Exact-then-partial name search.
///
/// Matching happens in memory: the catalog is small, and SQLite's `LIKE` is
/// only case-insensitive for ASCII, which breaks on Cyrillic names.
pub fn search_students(students: &[student::Model], query: &str) -> SearchOutcome {
    let query_lower = query.trim().to_lowercase();

    let exact = |s: &student::Model| {
        let first_last = format!("{} {}", s.first_name, s.last_name).to_lowercase();
        let last_first = format!("{} {}", s.last_name, s.first_name).to_lowercase();
        first_last == query_lower || last_first == query_lower
    };

    let partial = |s: &student::Model| {
        s.first_name.to_lowercase().contains(&query_lower)
            || s.last_name.to_lowercase().contains(&query_lower)
            || s.email.to_lowercase().contains(&query_lower)
    };

    let matched: Vec<&student::Model> = students
        .iter()
        .filter(|s| exact(s) || partial(s))
        .collect();

    let best = matched
        .iter()
        .find(|s| exact(s))
        .copied()
        .or_else(|| matched.first().copied());

    match best {
        Some(found) => SearchOutcome {
            success: true,
            message: format!("Found student: {}", found.full_name()),
            student: Some(found.clone()),
            matches: matched.len(),
        },
        None => SearchOutcome {
            success: false,
            message: format!("Student \"{}\" not found", query.trim()),
            student: None,
            matches: 0,
        },
    }
}

pub async fn search_by_name(
    db: &DatabaseConnection,
    query: &str,
) -> Result<SearchOutcome, AppError> {
    let students = Student::find()
        .order_by_asc(student::Column::LastName)
        .order_by_asc(student::Column::FirstName)
        .all(db)
        .await
        .map_err(internal_error)?;

    Ok(search_students(&students, query))
}
