use dioxus::prelude::*;
use model::{Card, CardPresentation, ImagePreview};

use crate::icons::{FaCircleInfo, FaHeart, FaTrash};
use crate::Icon;

/// A like click: the card and whether the current user had liked it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeToggle {
    pub card_id: String,
    pub is_liked: bool,
}

/// One card display unit.
///
/// Renders from the record alone; every interaction is reported through the
/// optional handlers and the page decides what happens. A handler left unset
/// makes its control inert.
#[component]
pub fn CardItem(
    card: Card,
    user_id: Option<String>,
    on_preview_picture: Option<EventHandler<ImagePreview>>,
    on_like_icon: Option<EventHandler<LikeToggle>>,
    on_delete_card: Option<EventHandler<String>>,
    on_info_click: Option<EventHandler<String>>,
) -> Element {
    let unit = CardPresentation::new(&card, user_id.as_deref());
    let preview = unit.preview();
    let toggle = LikeToggle {
        card_id: unit.id.clone(),
        is_liked: unit.like_active,
    };
    let delete_id = unit.id.clone();
    let info_id = unit.id.clone();

    let like_class = if unit.like_active {
        "card__like-button card__like-button_is-active"
    } else {
        "card__like-button"
    };

    rsx! {
        li { class: "places__item card",
            img {
                class: "card__image",
                src: "{unit.image_src}",
                alt: "{unit.image_alt}",
                onclick: move |_| {
                    if let Some(handler) = on_preview_picture {
                        handler.call(preview.clone());
                    }
                },
            }
            div { class: "card__controls",
                if unit.delete_visible {
                    button {
                        r#type: "button",
                        class: "card__control-button card__control-button_type_delete",
                        aria_label: "Delete",
                        onclick: move |_| {
                            if let Some(handler) = on_delete_card {
                                handler.call(delete_id.clone());
                            }
                        },
                        Icon { icon: FaTrash, width: 16, height: 16 }
                    }
                }
                button {
                    r#type: "button",
                    class: "card__control-button card__control-button_type_info",
                    aria_label: "Details",
                    onclick: move |_| {
                        if let Some(handler) = on_info_click {
                            handler.call(info_id.clone());
                        }
                    },
                    Icon { icon: FaCircleInfo, width: 16, height: 16 }
                }
            }
            div { class: "card__description",
                h2 { class: "card__title", "{unit.title}" }
                div { class: "card__likes",
                    button {
                        r#type: "button",
                        class: like_class,
                        aria_label: "Like",
                        onclick: move |_| {
                            if let Some(handler) = on_like_icon {
                                handler.call(toggle.clone());
                            }
                        },
                        Icon { icon: FaHeart, width: 18, height: 18 }
                    }
                    p { class: "card__like-count", "{unit.like_count}" }
                }
            }
        }
    }
}
