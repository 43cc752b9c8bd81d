#[allow(unused_imports)]
mod common;

use campus_backend::models::search::SearchResponse;

use common::{TestContext, create_student, get_json};

async fn seed_roster(ctx: &TestContext) {
    create_student(&ctx.db, "Анна", "Иванова", "anna.ivanova@fefu.ru").await;
    create_student(&ctx.db, "Дмитрий", "Смирнов", "dmitry.smirnov@fefu.ru").await;
    create_student(&ctx.db, "Екатерина", "Попова", "ekaterina.popova@fefu.ru").await;
}

#[tokio::test]
async fn exact_full_name_match_succeeds() {
    let ctx = TestContext::new().await;
    seed_roster(&ctx).await;

    let app = ctx.app();

    // "Last First" ordering, as the original UI searched
    let (status, body): (u16, SearchResponse) =
        get_json(&app, "/search?query=%D0%98%D0%B2%D0%B0%D0%BD%D0%BE%D0%B2%D0%B0%20%D0%90%D0%BD%D0%BD%D0%B0").await;

    assert_eq!(status, 200);
    assert!(body.success, "Expected a match, got: {}", body.message);
    let student = body.student.expect("student must be present on success");
    assert_eq!(student.first_name, "Анна");
    assert_eq!(student.last_name, "Иванова");
}

#[tokio::test]
async fn exact_match_is_case_insensitive() {
    let ctx = TestContext::new().await;
    create_student(&ctx.db, "John", "Doe", "john.doe@example.com").await;

    let app = ctx.app();

    let (status, body): (u16, SearchResponse) = get_json(&app, "/search?query=john%20doe").await;

    assert_eq!(status, 200);
    assert!(body.success);
    assert_eq!(body.matches, 1);
}

#[tokio::test]
async fn unknown_name_reports_not_found() {
    let ctx = TestContext::new().await;
    seed_roster(&ctx).await;

    let app = ctx.app();

    let (status, body): (u16, SearchResponse) = get_json(&app, "/search?query=nobody").await;

    assert_eq!(status, 200);
    assert!(!body.success);
    assert!(body.student.is_none());
    assert_eq!(body.matches, 0);
    assert!(
        body.message.contains("not found"),
        "Expected not-found message, got: {}",
        body.message
    );
    assert!(
        body.message.contains("nobody"),
        "Message should echo the query, got: {}",
        body.message
    );
}

#[tokio::test]
async fn email_substring_matches() {
    let ctx = TestContext::new().await;
    seed_roster(&ctx).await;

    let app = ctx.app();

    let (status, body): (u16, SearchResponse) =
        get_json(&app, "/search?query=dmitry.smirnov").await;

    assert_eq!(status, 200);
    assert!(body.success);
    assert_eq!(
        body.student.expect("student must be present").email,
        "dmitry.smirnov@fefu.ru"
    );
}

#[tokio::test]
async fn partial_match_counts_all_candidates() {
    let ctx = TestContext::new().await;
    create_student(&ctx.db, "Pat", "Smith", "pat.smith@example.com").await;
    create_student(&ctx.db, "Sam", "Smithson", "sam.smithson@example.com").await;
    create_student(&ctx.db, "Lee", "Jones", "lee.jones@example.com").await;

    let app = ctx.app();

    let (status, body): (u16, SearchResponse) = get_json(&app, "/search?query=smith").await;

    assert_eq!(status, 200);
    assert!(body.success);
    assert_eq!(body.matches, 2);
    assert!(body.student.is_some());
}

#[tokio::test]
async fn exact_match_wins_over_partial() {
    let ctx = TestContext::new().await;
    create_student(&ctx.db, "Ann", "Smith", "ann.smith@example.com").await;
    create_student(&ctx.db, "Ann", "Smithson", "ann.smithson@example.com").await;

    let app = ctx.app();

    let (status, body): (u16, SearchResponse) = get_json(&app, "/search?query=ann%20smithson").await;

    assert_eq!(status, 200);
    assert!(body.success);
    assert_eq!(
        body.student.expect("student must be present").last_name,
        "Smithson",
        "The exact full-name match must be preferred"
    );
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let ctx = TestContext::new().await;

    let app = ctx.app();

    let (status, _body): (u16, serde_json::Value) = get_json(&app, "/search?query=%20").await;

    assert_eq!(status, 400);
}
