use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::sea_orm_active_enums::{CourseLevel, EnrollmentStatus, Faculty, Role};
use crate::handlers::{auth, courses, dashboard, enrollments, general, profile, search, students};
use crate::middleware::auth_middleware::auth_middleware;
use crate::models;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        general::health,
        general::home,
        auth::register,
        auth::login,
        auth::logout,
        auth::refresh,
        students::list_students,
        students::student_detail,
        courses::list_courses,
        courses::course_detail,
        search::search_student,
        profile::get_profile,
        profile::update_profile,
        dashboard::student_dashboard,
        dashboard::teacher_dashboard,
        dashboard::admin_dashboard,
        enrollments::create_enrollment,
        enrollments::update_enrollment,
    ),
    components(schemas(
        models::auth::RegisterRequest,
        models::auth::LoginRequest,
        models::auth::LogoutRequest,
        models::auth::RefreshRequest,
        models::auth::AuthTokens,
        models::auth::RegisterResponse,
        models::auth::LoginResponse,
        models::auth::LogoutResponse,
        models::auth::RefreshResponse,
        models::auth::MessageResponse<String>,
        models::student::StudentSummary,
        models::student::SkillInfo,
        models::student::EnrollmentInfo,
        models::student::StudentDetailResponse,
        models::course::InstructorSummary,
        models::course::CourseSummary,
        models::course::EnrolleeSummary,
        models::course::CourseDetailResponse,
        models::enrollment::EnrollRequest,
        models::enrollment::UpdateEnrollmentRequest,
        models::enrollment::EnrollmentResponse,
        models::profile::UserSummary,
        models::profile::ProfileResponse,
        models::profile::UpdateProfileRequest,
        models::search::SearchResponse,
        models::dashboard::HomeSummary,
        models::dashboard::StudentDashboard,
        models::dashboard::TeacherDashboard,
        models::dashboard::AdminDashboard,
        Role,
        Faculty,
        CourseLevel,
        EnrollmentStatus,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "general", description = "General endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "students", description = "Student listings"),
        (name = "courses", description = "Course catalog"),
        (name = "search", description = "Student search"),
        (name = "profile", description = "Self-service profile"),
        (name = "dashboard", description = "Role-gated dashboards"),
        (name = "enrollments", description = "Enrollment workflow"),
    ),
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

// Function to create the main application router
pub fn app_router(state: AppState) -> Router {
    // Routes behind the JWT middleware
    let protected = Router::new()
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/dashboard/student", get(dashboard::student_dashboard))
        .route("/dashboard/teacher", get(dashboard::teacher_dashboard))
        .route("/dashboard/admin", get(dashboard::admin_dashboard))
        .route("/enrollments", post(enrollments::create_enrollment))
        .route("/enrollments/{id}", patch(enrollments::update_enrollment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(general::home))
        .route("/health", get(general::health))
        // Auth routes
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/refresh", post(auth::refresh))
        // Catalog routes
        .route("/students", get(students::list_students))
        .route("/students/{id}", get(students::student_detail))
        .route("/courses", get(courses::list_courses))
        .route("/courses/{slug}", get(courses::course_detail))
        .route("/search", get(search::search_student))
        .merge(protected)
        .fallback(handler_404)
        .with_state(state)
        // Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

// Handler for 404 Not Found errors
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
