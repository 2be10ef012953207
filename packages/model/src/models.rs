//! # Domain records exchanged with the Mesto API
//!
//! The server speaks JSON with Mongo-style `_id` keys and camelCase timestamps.
//! These types mirror that wire shape through `serde` attributes so the same
//! structs are used for decoding responses, holding UI state and encoding
//! request bodies.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Card`] | One photo card with its owner and likers. |
//! | [`UserRef`] | A user embedded in a card (owner or liker). |
//! | [`UserProfile`] | The signed-in user. |
//! | [`ProfileUpdate`], [`AvatarUpdate`], [`NewCard`] | Request bodies. |
//! | [`DeleteConfirmation`] | Body returned after a card is deleted. |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as embedded in a card record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            about: None,
            avatar: None,
        }
    }
}

/// A photo card as returned by `GET /cards`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Image URL.
    pub link: String,
    #[serde(rename = "createdAt", default = "epoch")]
    pub created_at: DateTime<Utc>,
    pub owner: Option<UserRef>,
    /// Users who liked the card, in server order.
    #[serde(default)]
    pub likes: Vec<UserRef>,
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl Card {
    /// Whether the given user appears among the likers.
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|user| user.id == user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner.as_ref().map(|owner| owner.id.as_str())
    }
}

/// The signed-in user, as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Short bio shown under the name.
    pub about: String,
    /// Avatar image URL.
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
}

impl UserProfile {
    /// The embedded form of this user, as it would appear in a card.
    pub fn to_ref(&self) -> UserRef {
        UserRef {
            id: self.id.clone(),
            name: self.name.clone(),
            about: Some(self.about.clone()),
            avatar: Some(self.avatar.clone()),
        }
    }
}

/// Body of `PATCH /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub about: String,
}

/// Body of `PATCH /users/me/avatar`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvatarUpdate {
    pub avatar: String,
}

/// Body of `POST /cards`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCard {
    pub name: String,
    pub link: String,
}

/// Body returned by `DELETE /cards/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_decodes_server_shape() {
        let json = r#"{
            "_id": "c1",
            "name": "Lake",
            "link": "https://example.com/lake.jpg",
            "createdAt": "2024-03-01T10:20:30.000Z",
            "owner": { "_id": "u1", "name": "Jacques", "about": "Explorer", "avatar": "a.png", "cohort": "x" },
            "likes": [{ "_id": "u2", "name": "Anna" }]
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, "c1");
        assert_eq!(card.owner_id(), Some("u1"));
        assert_eq!(card.like_count(), 1);
        assert!(card.is_liked_by("u2"));
        assert!(!card.is_liked_by("u1"));
        assert_eq!(card.created_at.to_rfc3339(), "2024-03-01T10:20:30+00:00");
    }

    #[test]
    fn test_card_tolerates_missing_optional_fields() {
        let card: Card =
            serde_json::from_str(r#"{ "_id": "1", "name": "Lake", "link": "u", "owner": null }"#)
                .unwrap();
        assert!(card.likes.is_empty());
        assert!(card.owner.is_none());
        assert_eq!(card.created_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_profile_roundtrip_uses_underscore_id() {
        let profile = UserProfile {
            id: "u1".to_string(),
            name: "Jacques".to_string(),
            about: "Explorer".to_string(),
            avatar: "a.png".to_string(),
            cohort: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["_id"], "u1");
        assert!(json.get("cohort").is_none());
        assert_eq!(profile.to_ref().id, "u1");
    }
}
