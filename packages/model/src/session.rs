use crate::models::UserProfile;

/// Per-page session context: who is signed in and which card awaits delete
/// confirmation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    user: Option<UserProfile>,
    pending_delete: Option<String>,
}

impl Session {
    /// `None` until the startup fetch resolves.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }

    pub fn sign_in(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    /// Remember the card the user asked to delete, replacing any earlier one.
    pub fn request_delete(&mut self, card_id: impl Into<String>) {
        self.pending_delete = Some(card_id.into());
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Clear the pending target once the deletion is confirmed.
    pub fn take_pending_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_delete_lifecycle() {
        let mut session = Session::default();
        assert!(session.user_id().is_none());

        session.request_delete("c1");
        session.request_delete("c2");
        assert_eq!(session.pending_delete(), Some("c2"));
        assert_eq!(session.take_pending_delete().as_deref(), Some("c2"));
        assert!(session.pending_delete().is_none());
    }

    #[test]
    fn test_sign_in_exposes_user_id() {
        let mut session = Session::default();
        session.sign_in(UserProfile {
            id: "u1".to_string(),
            name: "Jacques".to_string(),
            about: "Explorer".to_string(),
            avatar: "a.png".to_string(),
            cohort: None,
        });
        assert_eq!(session.user_id(), Some("u1"));
        assert_eq!(session.user().map(|user| user.name.as_str()), Some("Jacques"));
    }
}
