use serde::{Deserialize, Serialize};

/// A row of the user list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
}

/// Profile of a single user, flattened from the detail endpoint payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: i64,
    pub name: String,
    pub avatar_url: String,
    pub city: String,
    pub company: String,
    pub position: String,
}

impl UserDetail {
    /// Avatar URL, or None when the payload carried an empty string
    pub fn avatar(&self) -> Option<&str> {
        let url = self.avatar_url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}

// Wire format of the detail endpoint - internal only, use UserDetail in domain code
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserDetailResponse {
    id: i64,
    name: String,
    #[serde(default)]
    avatar: String,
    details: UserDetailFields,
}

#[derive(Debug, Clone, Deserialize)]
struct UserDetailFields {
    #[serde(default)]
    city: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    position: String,
}

impl UserDetailResponse {
    pub(crate) fn into_detail(self) -> UserDetail {
        UserDetail {
            id: self.id,
            name: self.name,
            avatar_url: self.avatar,
            city: self.details.city,
            company: self.details.company,
            position: self.details.position,
        }
    }
}
