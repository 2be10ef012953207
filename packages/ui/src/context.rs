//! Page-wide state shared through Dioxus context.
//!
//! [`PageProvider`] owns one signal per concern (session, displayed cards,
//! overlays, validated forms) plus the service client. Components reach them
//! through the `use_*` hooks below.

use dioxus::prelude::*;
use model::{AppConfig, CardList, ModalController, Session, ValidationEngine};

use crate::client::{make_client, Client};
use crate::escape::use_escape_key;

/// The overlays of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Popup {
    EditProfile,
    EditAvatar,
    NewCard,
    RemoveCard,
    Image,
    Info,
}

impl Popup {
    pub const ALL: [Popup; 6] = [
        Popup::EditProfile,
        Popup::EditAvatar,
        Popup::NewCard,
        Popup::RemoveCard,
        Popup::Image,
        Popup::Info,
    ];

    /// Modifier class selecting the overlay's layout.
    pub fn type_class(self) -> &'static str {
        match self {
            Popup::EditProfile => "popup_type_edit",
            Popup::EditAvatar => "popup_type_edit-avatar",
            Popup::NewCard => "popup_type_new-card",
            Popup::RemoveCard => "popup_type_remove-card",
            Popup::Image => "popup_type_image",
            Popup::Info => "popup_type_info",
        }
    }
}

/// Everything the page needs before the first render.
///
/// Built in `main` and handed to the launcher as root context; binding the
/// forms there lets malformed markup fail before anything is mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSetup {
    pub config: AppConfig,
    pub forms: ValidationEngine,
}

pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

pub fn use_cards() -> Signal<CardList> {
    use_context::<Signal<CardList>>()
}

pub fn use_modals() -> Signal<ModalController<Popup>> {
    use_context::<Signal<ModalController<Popup>>>()
}

pub fn use_forms() -> Signal<ValidationEngine> {
    use_context::<Signal<ValidationEngine>>()
}

pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Provider component for the page state.
/// Requires a [`PageSetup`] in context; wrap the router with it.
#[component]
pub fn PageProvider(children: Element) -> Element {
    let setup = use_context::<PageSetup>();

    use_context_provider(|| make_client(&setup.config.api));
    use_context_provider(|| Signal::new(Session::default()));
    use_context_provider(|| Signal::new(CardList::default()));
    use_context_provider(|| Signal::new(setup.forms.clone()));

    let modals = use_context_provider(|| {
        let mut modals = ModalController::new(setup.config.modal.clone());
        for popup in Popup::ALL {
            modals.set_close_modal_window_event_listeners(popup);
        }
        Signal::new(modals)
    });
    use_escape_key(modals);

    rsx! {
        {children}
    }
}
