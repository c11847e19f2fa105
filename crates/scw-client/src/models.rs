use serde::{Deserialize, Serialize};

/// The support agent assigned to the chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    /// Backend identifier; only used to derive the avatar path.
    pub id: i64,
    /// Display name shown in the chat header.
    pub name: String,
    /// Whether the representative can take the chat right now.
    pub is_available: bool,
}

impl Representative {
    /// Relative asset path of the representative's profile picture.
    ///
    /// Plain string templating over the id; nothing checks that the asset
    /// actually exists.
    pub fn profile_image_path(&self) -> String {
        format!("assets/profile-pictures/{}.jpeg", self.id)
    }
}
