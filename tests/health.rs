#[allow(unused_imports)]
mod common;

use common::{TestContext, get_json, get_raw};

use campus_backend::models::dashboard::HomeSummary;

#[tokio::test]
async fn health_returns_ok() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status, body) = get_raw(&app, "/health").await;

    assert_eq!(status, 200);
    assert_eq!(body, "everything OK");
}

#[tokio::test]
async fn home_reports_zero_counts_on_empty_database() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status, body): (u16, HomeSummary) = get_json(&app, "/").await;

    assert_eq!(status, 200);
    assert_eq!(body.total_students, 0);
    assert_eq!(body.total_courses, 0);
    assert_eq!(body.total_instructors, 0);
    assert!(body.recent_courses.is_empty());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status, _) = get_raw(&app, "/no-such-route").await;

    assert_eq!(status, 404);
}
