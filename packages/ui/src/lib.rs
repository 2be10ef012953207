//! Dioxus components for the Mesto page.
//!
//! Components render from the shared state in [`context`] and report user
//! actions through `EventHandler` props; the page decides what each action does.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const PAGE_CSS: Asset = asset!("/assets/styling/page.css");
pub const POPUP_CSS: Asset = asset!("/assets/styling/popup.css");
pub const CARD_CSS: Asset = asset!("/assets/styling/card.css");

mod client;
pub use client::{make_client, Client};

pub mod context;
pub use context::{
    use_cards, use_client, use_forms, use_modals, use_session, PageProvider, PageSetup, Popup,
};

mod escape;
pub use escape::use_escape_key;

pub mod forms;
pub use forms::{page_forms, SubmitButton, ValidatedForm, ValidatedInput};

mod card;
pub use card::{CardItem, LikeToggle};

mod profile;
pub use profile::ProfileHeader;

pub mod views;
