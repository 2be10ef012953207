use dioxus::prelude::*;
use model::UserProfile;

use crate::icons::{FaPen, FaPlus};
use crate::Icon;

/// Avatar, name and description of the signed-in user, plus the buttons that
/// open the profile, avatar and new-card popups. Renders placeholders until the
/// profile has loaded.
#[component]
pub fn ProfileHeader(
    user: Option<UserProfile>,
    on_edit_profile: EventHandler<()>,
    on_edit_avatar: EventHandler<()>,
    on_add_card: EventHandler<()>,
) -> Element {
    let (name, about, avatar) = user
        .map(|user| (user.name, user.about, user.avatar))
        .unwrap_or_default();

    rsx! {
        section { class: "profile page__section",
            button {
                r#type: "button",
                class: "profile__image",
                style: "background-image: url('{avatar}')",
                aria_label: "Update avatar",
                onclick: move |_| on_edit_avatar.call(()),
            }
            div { class: "profile__info",
                h1 { class: "profile__title", "{name}" }
                button {
                    r#type: "button",
                    class: "profile__edit-button",
                    aria_label: "Edit profile",
                    onclick: move |_| on_edit_profile.call(()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                p { class: "profile__description", "{about}" }
            }
            button {
                r#type: "button",
                class: "profile__add-button",
                aria_label: "New place",
                onclick: move |_| on_add_card.call(()),
                Icon { icon: FaPlus, width: 20, height: 20 }
            }
        }
    }
}
