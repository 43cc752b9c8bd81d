use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::student::StudentSummary;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SearchQuery {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub message: String,
    pub student: Option<StudentSummary>,
    /// Total number of students matching the query
    pub matches: usize,
}
