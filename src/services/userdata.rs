use crate::models::UserProfile;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching from the user-data service
#[derive(Debug, Error)]
pub enum UserDataError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("user not found: {0}")]
    NotFound(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// The requester's profile plus the candidate pool, as one fetch
#[derive(Debug, Clone)]
pub struct UserBundle {
    pub requester: UserProfile,
    pub pool: Vec<UserProfile>,
}

/// Client for the external user-data service
///
/// The service returns the requesting user's own profile together with
/// every other user in one response:
/// `{ "success": bool, "data": { "myData": {...}, "usersData": [...] } }`
pub struct UserDataClient {
    base_url: String,
    client: Client,
}

impl UserDataClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch the requester's profile and the full candidate pool
    pub async fn fetch_user_bundle(&self, user_id: &str) -> Result<UserBundle, UserDataError> {
        let url = format!("{}{}", self.base_url, user_id);

        tracing::debug!("Fetching user bundle from: {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(UserDataError::NotFound(user_id.to_string()));
            }
            status if !status.is_success() => {
                return Err(UserDataError::Upstream(format!(
                    "user-data service returned {}",
                    status
                )));
            }
            _ => {}
        }

        let json: Value = response.json().await?;

        if !json.get("success").and_then(Value::as_bool).unwrap_or(false) {
            return Err(UserDataError::Upstream(
                "user-data service reported failure".to_string(),
            ));
        }

        let data = json
            .get("data")
            .ok_or_else(|| UserDataError::InvalidResponse("missing data object".into()))?;

        let my_data = data
            .get("myData")
            .ok_or_else(|| UserDataError::NotFound(user_id.to_string()))?;

        let requester: UserProfile = serde_json::from_value(my_data.clone())
            .map_err(|e| UserDataError::InvalidResponse(format!("failed to parse profile: {}", e)))?;

        // Skip pool entries that fail to parse rather than failing the
        // whole request; the upstream collection is loosely validated.
        let pool: Vec<UserProfile> = data
            .get("usersData")
            .and_then(Value::as_array)
            .map(|users| {
                users
                    .iter()
                    .filter_map(|doc| serde_json::from_value(doc.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        tracing::debug!("Fetched {} pool profiles for user {}", pool.len(), user_id);

        Ok(UserBundle { requester, pool })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = UserDataClient::new("https://users.test/api/users/".to_string());
        assert_eq!(client.base_url, "https://users.test/api/users/");
    }
}
