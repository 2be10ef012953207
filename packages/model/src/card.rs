//! Card presentation: what a display unit shows for one record, the list of
//! displayed cards, and the details shown in the info popup.

use chrono::{DateTime, Utc};

use crate::models::{Card, UserProfile};

/// The content and control layout of one card display unit.
///
/// Built fresh from a record on every render; holds no state of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPresentation {
    pub id: String,
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    pub like_count: usize,
    /// The like control carries the active marker.
    pub like_active: bool,
    /// The delete control is part of the unit.
    pub delete_visible: bool,
}

impl CardPresentation {
    /// Lay out `card` for the user identified by `user_id`.
    ///
    /// Without a user id (profile not loaded yet) no like is marked active and
    /// the delete control is kept; the server decides whether deletion is
    /// allowed.
    pub fn new(card: &Card, user_id: Option<&str>) -> Self {
        let like_active = user_id.is_some_and(|user| card.is_liked_by(user));
        let delete_visible = match (card.owner_id(), user_id) {
            (Some(owner), Some(user)) => owner == user,
            _ => true,
        };

        Self {
            id: card.id.clone(),
            title: card.name.clone(),
            image_src: card.link.clone(),
            image_alt: card.name.clone(),
            like_count: card.like_count(),
            like_active,
            delete_visible,
        }
    }

    /// What the image popup needs when the picture is clicked.
    pub fn preview(&self) -> ImagePreview {
        ImagePreview {
            name: self.title.clone(),
            link: self.image_src.clone(),
        }
    }
}

/// Payload of the image popup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImagePreview {
    pub name: String,
    pub link: String,
}

/// The cards on the page, newest first, unique by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    /// Build from a server snapshot. Later duplicates of an id are dropped.
    pub fn from_snapshot(cards: Vec<Card>) -> Self {
        let mut list = Self::default();
        for card in cards {
            list.append(card);
        }
        list
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Add at the end unless the id is already displayed.
    pub fn append(&mut self, card: Card) {
        if self.get(&card.id).is_none() {
            self.cards.push(card);
        }
    }

    /// Add at the front, replacing any card with the same id.
    pub fn prepend(&mut self, card: Card) {
        self.remove(&card.id);
        self.cards.insert(0, card);
    }

    /// Swap in a fresh copy of a displayed card (e.g. after a like).
    /// Returns `false` if the card is no longer displayed.
    pub fn replace(&mut self, card: Card) -> bool {
        match self.cards.iter_mut().find(|c| c.id == card.id) {
            Some(slot) => {
                *slot = card;
                true
            }
            None => false,
        }
    }

    /// Detach a card from the list.
    pub fn remove(&mut self, id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Refresh the embedded owner/liker copies of the signed-in user after a
    /// profile edit.
    pub fn refresh_user(&mut self, profile: &UserProfile) {
        for card in &mut self.cards {
            if let Some(owner) = card.owner.as_mut().filter(|o| o.id == profile.id) {
                owner.name = profile.name.clone();
            }
            for liker in card.likes.iter_mut().filter(|l| l.id == profile.id) {
                liker.name = profile.name.clone();
            }
        }
    }
}

/// Remove the display unit of `id` from `list`.
pub fn delete_card(list: &mut CardList, id: &str) -> Option<Card> {
    list.remove(id)
}

/// Details shown by the card info popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardInfo {
    pub title: String,
    /// Term/description pairs.
    pub rows: Vec<(String, String)>,
    /// Heading above the liker list; empty when nobody liked the card.
    pub likers_heading: String,
    pub likers: Vec<String>,
}

impl CardInfo {
    pub fn new(card: &Card) -> Self {
        let author = card
            .owner
            .as_ref()
            .map(|owner| owner.name.clone())
            .unwrap_or_default();

        let rows = vec![
            ("Created:".to_string(), format_date(&card.created_at)),
            ("Author:".to_string(), author),
            ("Likes:".to_string(), card.like_count().to_string()),
        ];

        let likers: Vec<String> = card.likes.iter().map(|user| user.name.clone()).collect();
        let likers_heading = if likers.is_empty() {
            String::new()
        } else {
            "Liked by:".to_string()
        };

        Self {
            title: card.name.clone(),
            rows,
            likers_heading,
            likers,
        }
    }

    /// Look a card up by id in a fresh snapshot.
    pub fn find(cards: &[Card], id: &str) -> Option<Self> {
        cards.iter().find(|card| card.id == id).map(Self::new)
    }
}

/// Long date form, e.g. "March 1, 2024".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
