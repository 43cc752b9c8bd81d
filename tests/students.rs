#[allow(unused_imports)]
mod common;

use campus_backend::entities::sea_orm_active_enums::EnrollmentStatus;
use campus_backend::models::student::{StudentDetailResponse, StudentSummary};

use common::{
    TestContext, create_course, create_enrollment, create_skill, create_student, get_json, get_raw,
};

#[tokio::test]
async fn student_list_is_ordered_by_last_then_first_name() {
    let ctx = TestContext::new().await;
    create_student(&ctx.db, "Ольга", "Новикова", "olga@fefu.ru").await;
    create_student(&ctx.db, "Анна", "Иванова", "anna@fefu.ru").await;
    create_student(&ctx.db, "Екатерина", "Иванова", "ekaterina@fefu.ru").await;

    let app = ctx.app();

    let (status, body): (u16, Vec<StudentSummary>) = get_json(&app, "/students").await;

    assert_eq!(status, 200);
    assert_eq!(body.len(), 3);
    assert_eq!(body[0].full_name, "Анна Иванова");
    assert_eq!(body[1].full_name, "Екатерина Иванова");
    assert_eq!(body[2].full_name, "Ольга Новикова");
}

#[tokio::test]
async fn student_detail_includes_skills_and_enrollments() {
    let ctx = TestContext::new().await;
    let student = create_student(&ctx.db, "Анна", "Иванова", "anna@fefu.ru").await;
    create_skill(&ctx.db, student.id, "Python", 8).await;
    create_skill(&ctx.db, student.id, "Django", 7).await;

    let course = create_course(&ctx.db, "Rust Basics", "rust-basics", None, 20).await;
    create_enrollment(&ctx.db, student.id, course.id, EnrollmentStatus::Active).await;

    let app = ctx.app();

    let (status, body): (u16, StudentDetailResponse) =
        get_json(&app, &format!("/students/{}", student.id)).await;

    assert_eq!(status, 200);
    assert_eq!(body.student.full_name, "Анна Иванова");
    assert_eq!(body.skills.len(), 2);
    assert_eq!(body.enrollments.len(), 1);
    assert_eq!(body.enrollments[0].course_title, "Rust Basics");
}

#[tokio::test]
async fn student_detail_unknown_id_returns_404() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status, _) = get_raw(&app, &format!("/students/{}", uuid::Uuid::new_v4())).await;

    assert_eq!(status, 404);
}
