use std::sync::{Arc, Mutex};

use chrono::Utc;

use model::{Card, DeleteConfirmation, NewCard, ProfileUpdate, UserProfile, UserRef};

use crate::error::ApiError;
use crate::RemoteClient;

/// In-memory [`RemoteClient`] for tests and native builds.
///
/// Applies the same rules as the service: new cards go to the front, only the
/// owner may delete a card, likes are a set of users.
#[derive(Clone, Debug)]
pub struct MemoryClient {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug)]
struct MemoryState {
    user: UserProfile,
    cards: Vec<Card>,
    next_id: u64,
}

impl MemoryClient {
    pub const DEMO_USER_ID: &'static str = "demo-user";

    pub fn new(user: UserProfile, cards: Vec<Card>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                user,
                cards,
                next_id: 1,
            })),
        }
    }

    /// A signed-in explorer and the six starter places.
    pub fn demo() -> Self {
        let user = UserProfile {
            id: Self::DEMO_USER_ID.to_string(),
            name: "Jacques Cousteau".to_string(),
            about: "Sailor, researcher".to_string(),
            avatar: "https://pictures.s3.yandex.net/frontend-developer/common/ava.jpg".to_string(),
            cohort: None,
        };
        let other = UserRef::new("explorer-2", "Anna Karenina");

        let places = [
            ("Arkhyz", "arkhyz"),
            ("Chelyabinsk Oblast", "chelyabinsk-oblast"),
            ("Ivanovo", "ivanovo"),
            ("Kamchatka", "kamchatka"),
            ("Kholmogorsky District", "kholmogorsky-rayon"),
            ("Baikal", "baikal"),
        ];
        let cards = places
            .iter()
            .enumerate()
            .map(|(i, (name, slug))| Card {
                id: format!("place-{i}"),
                name: name.to_string(),
                link: format!(
                    "https://pictures.s3.yandex.net/frontend-developer/cards-compressed/{slug}.jpg"
                ),
                created_at: Utc::now(),
                owner: Some(if i % 2 == 0 { user.to_ref() } else { other.clone() }),
                likes: if i % 3 == 0 { vec![other.clone()] } else { Vec::new() },
            })
            .collect();

        Self::new(user, cards)
    }

    /// Snapshot of the stored cards.
    pub fn cards(&self) -> Vec<Card> {
        self.state.lock().unwrap().cards.clone()
    }
}

impl RemoteClient for MemoryClient {
    async fn get_user_info(&self) -> Result<UserProfile, ApiError> {
        Ok(self.state.lock().unwrap().user.clone())
    }

    async fn get_card_list(&self) -> Result<Vec<Card>, ApiError> {
        Ok(self.cards())
    }

    async fn set_user_info(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.user.name = update.name.clone();
        state.user.about = update.about.clone();
        Ok(state.user.clone())
    }

    async fn set_user_avatar(&self, avatar: &str) -> Result<UserProfile, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.user.avatar = avatar.to_string();
        Ok(state.user.clone())
    }

    async fn add_card(&self, card: &NewCard) -> Result<Card, ApiError> {
        let mut state = self.state.lock().unwrap();
        let id = format!("card-{}", state.next_id);
        state.next_id += 1;

        let created = Card {
            id,
            name: card.name.clone(),
            link: card.link.clone(),
            created_at: Utc::now(),
            owner: Some(state.user.to_ref()),
            likes: Vec::new(),
        };
        state.cards.insert(0, created.clone());
        Ok(created)
    }

    async fn delete_card(&self, card_id: &str) -> Result<DeleteConfirmation, ApiError> {
        let mut state = self.state.lock().unwrap();
        let index = state
            .cards
            .iter()
            .position(|card| card.id == card_id)
            .ok_or_else(|| ApiError::CardNotFound(card_id.to_string()))?;

        if state.cards[index].owner_id() != Some(state.user.id.as_str()) {
            return Err(ApiError::Forbidden(format!(
                "card `{card_id}` belongs to another user"
            )));
        }

        state.cards.remove(index);
        Ok(DeleteConfirmation {
            message: "Post deleted".to_string(),
        })
    }

    async fn change_like_card_status(&self, card_id: &str, is_liked: bool) -> Result<Card, ApiError> {
        let mut state = self.state.lock().unwrap();
        let me = state.user.to_ref();
        let card = state
            .cards
            .iter_mut()
            .find(|card| card.id == card_id)
            .ok_or_else(|| ApiError::CardNotFound(card_id.to_string()))?;

        if is_liked {
            card.likes.retain(|user| user.id != me.id);
        } else if !card.is_liked_by(&me.id) {
            card.likes.push(me);
        }
        Ok(card.clone())
    }
}
