use dioxus::prelude::*;
use model::ClickTarget;

use crate::context::{use_modals, Popup};
use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay around a content panel, shown while `popup` is open.
/// Clicking the backdrop or the close button dismisses it; clicks inside the
/// panel stay there.
#[component]
pub fn ModalOverlay(popup: Popup, children: Element) -> Element {
    let mut modals = use_modals();
    let type_class = popup.type_class();
    let classes = modals.read().classes(popup);

    rsx! {
        div {
            class: "popup {type_class} {classes}",
            onclick: move |_| {
                modals.write().handle_click(popup, ClickTarget::Backdrop);
            },
            div {
                class: "popup__content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    r#type: "button",
                    class: "popup__close",
                    aria_label: "Close",
                    onclick: move |_| {
                        modals.write().handle_click(popup, ClickTarget::CloseButton);
                    },
                    Icon { icon: FaXmark, width: 20, height: 20 }
                }
                {children}
            }
        }
    }
}
