//! User onboarding and lookup endpoints.

use crate::api::{ApiClient, ApiResponse};
use crate::model::{OnboardedUser, User, UserDetails, UserOnboardRequest};

/// Member onboarding and detail lookups.
#[derive(Debug, Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Register a new member; the backend also creates their first chit.
    pub async fn onboard_user(&self, request: &UserOnboardRequest) -> ApiResponse<OnboardedUser> {
        self.api.post("/onboard", Some(request)).await
    }

    /// List all members with their summary fields.
    pub async fn get_all_users(&self) -> ApiResponse<Vec<User>> {
        self.api.get("/users/details").await
    }

    /// Fetch one member with full chit payment and loan history.
    pub async fn get_user_details(&self, user_id: &str) -> ApiResponse<UserDetails> {
        self.api.get(&format!("/users/details/{user_id}")).await
    }
}
