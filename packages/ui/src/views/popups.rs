//! The page's overlays. Form popups render a managed form and report submits;
//! the page performs the request and flips `busy` while it runs.

use dioxus::prelude::*;
use model::{CardInfo, ImagePreview};

use crate::context::Popup;
use crate::forms::{
    SubmitButton, ValidatedForm, ValidatedInput, ABOUT_INPUT, AVATAR_FORM, AVATAR_INPUT,
    CARD_FORM, LINK_INPUT, NAME_INPUT, PLACE_NAME_INPUT, PROFILE_FORM, REMOVE_FORM,
};
use crate::views::ModalOverlay;

const SAVING: &str = "Saving...";

#[component]
pub fn EditProfilePopup(busy: bool, on_submit: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay { popup: Popup::EditProfile,
            h3 { class: "popup__title", "Edit profile" }
            ValidatedForm { form: PROFILE_FORM, onsubmit: on_submit,
                ValidatedInput { form: PROFILE_FORM, field: NAME_INPUT, placeholder: "Name" }
                ValidatedInput { form: PROFILE_FORM, field: ABOUT_INPUT, placeholder: "About me" }
                SubmitButton { form: PROFILE_FORM, busy, busy_label: SAVING }
            }
        }
    }
}

#[component]
pub fn EditAvatarPopup(busy: bool, on_submit: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay { popup: Popup::EditAvatar,
            h3 { class: "popup__title", "Update avatar" }
            ValidatedForm { form: AVATAR_FORM, onsubmit: on_submit,
                ValidatedInput { form: AVATAR_FORM, field: AVATAR_INPUT, placeholder: "Link to picture" }
                SubmitButton { form: AVATAR_FORM, busy, busy_label: SAVING }
            }
        }
    }
}

#[component]
pub fn NewCardPopup(busy: bool, on_submit: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay { popup: Popup::NewCard,
            h3 { class: "popup__title", "New place" }
            ValidatedForm { form: CARD_FORM, onsubmit: on_submit,
                ValidatedInput { form: CARD_FORM, field: PLACE_NAME_INPUT, placeholder: "Title" }
                ValidatedInput { form: CARD_FORM, field: LINK_INPUT, placeholder: "Link to picture" }
                SubmitButton { form: CARD_FORM, busy, busy_label: "Creating..." }
            }
        }
    }
}

/// Confirmation step before a card is deleted.
#[component]
pub fn RemoveCardPopup(busy: bool, on_submit: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay { popup: Popup::RemoveCard,
            h3 { class: "popup__title", "Are you sure?" }
            ValidatedForm { form: REMOVE_FORM, onsubmit: on_submit,
                SubmitButton { form: REMOVE_FORM, busy, busy_label: "Deleting..." }
            }
        }
    }
}

#[component]
pub fn ImagePopup(preview: ImagePreview) -> Element {
    rsx! {
        ModalOverlay { popup: Popup::Image,
            img { class: "popup__image", src: "{preview.link}", alt: "{preview.name}" }
            p { class: "popup__caption", "{preview.name}" }
        }
    }
}

/// Details of one card: creation date, author, like count and who liked it.
#[component]
pub fn CardInfoPopup(info: Option<CardInfo>) -> Element {
    rsx! {
        ModalOverlay { popup: Popup::Info,
            if let Some(info) = info {
                h3 { class: "popup__title", "{info.title}" }
                dl { class: "popup__info",
                    for (term, description) in info.rows {
                        div { class: "popup__info-item",
                            dt { class: "popup__info-term", "{term}" }
                            dd { class: "popup__info-description", "{description}" }
                        }
                    }
                }
                if !info.likers.is_empty() {
                    h4 { class: "popup__text", "{info.likers_heading}" }
                    ul { class: "popup__list",
                        for liker in info.likers {
                            li { class: "popup__list-item", "{liker}" }
                        }
                    }
                }
            }
        }
    }
}
