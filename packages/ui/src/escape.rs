use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use model::ModalController;

use crate::context::Popup;

/// Forward window `keydown` events to the overlay controller.
///
/// The browser listener only queues key names; the coroutine applies them so
/// signal writes happen inside the Dioxus runtime. The controller itself only
/// reacts while it holds a key subscription for an open overlay.
pub fn use_escape_key(mut modals: Signal<ModalController<Popup>>) {
    let keys = use_coroutine(move |mut rx: UnboundedReceiver<String>| async move {
        while let Some(key) = rx.next().await {
            let closed = modals.write().handle_key(&key);
            if !closed.is_empty() {
                tracing::debug!(?closed, "overlays closed from keyboard");
            }
        }
    });

    // The listener lives as long as the hook, i.e. the provider component.
    #[cfg(target_arch = "wasm32")]
    {
        let tx = keys.tx();
        use_hook(move || {
            use wasm_bindgen::JsCast;

            web_sys::window().map(|window| {
                std::rc::Rc::new(gloo::events::EventListener::new(
                    &window,
                    "keydown",
                    move |event| {
                        if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                            let _ = tx.unbounded_send(event.key());
                        }
                    },
                ))
            })
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = keys;
}
