//! The Mesto page: profile header, card grid and every popup.

use std::collections::BTreeMap;

use api::{ApiError, RemoteClient};
use dioxus::prelude::*;
use model::{
    delete_card, CardInfo, CardList, FormError, ImagePreview, NewCard, ProfileUpdate,
    SubmitGuard, ValidationEngine,
};
use ui::forms::{
    ABOUT_INPUT, AVATAR_FORM, AVATAR_INPUT, CARD_FORM, LINK_INPUT, NAME_INPUT, PLACE_NAME_INPUT,
    PROFILE_FORM, REMOVE_FORM,
};
use ui::views::{
    CardInfoPopup, EditAvatarPopup, EditProfilePopup, ImagePopup, NewCardPopup, RemoveCardPopup,
};
use ui::{
    use_cards, use_client, use_forms, use_modals, use_session, CardItem, LikeToggle, Popup,
    ProfileHeader,
};

fn log_form_error(result: Result<(), FormError>) {
    if let Err(e) = result {
        tracing::error!("Form update failed: {}", e);
    }
}

/// Log a failed request along with the HTTP status, when there is one.
fn log_request_error(action: &str, e: &ApiError) {
    tracing::error!(status = ?e.status(), "Failed to {}: {}", action, e);
}

/// Values of `form` if it may be submitted.
fn submitted_values(forms: Signal<ValidationEngine>, form: &str) -> Option<BTreeMap<String, String>> {
    let values = forms
        .read()
        .form(form)
        .filter(|managed| managed.is_valid())
        .map(|managed| managed.values());
    values
}

#[component]
pub fn Home() -> Element {
    let client = use_client();
    let mut session = use_session();
    let mut cards = use_cards();
    let mut modals = use_modals();
    let mut forms = use_forms();

    let mut preview = use_signal(ImagePreview::default);
    let mut info = use_signal(|| Option::<CardInfo>::None);
    let mut submits = use_signal(SubmitGuard::<&'static str>::default);

    // Profile and cards are fetched together; the grid renders once both arrive.
    let startup_client = client.clone();
    let _ = use_resource(move || {
        let client = startup_client.clone();
        async move {
            match api::load_initial(&client).await {
                Ok((user, list)) => {
                    tracing::info!(user = %user.id, cards = list.len(), "page data loaded");
                    session.write().sign_in(user);
                    cards.set(CardList::from_snapshot(list));
                }
                Err(e) => log_request_error("load profile and cards", &e),
            }
        }
    });

    // --- Opening the form popups ---

    let open_profile = move |_: ()| {
        let (name, about) = session
            .read()
            .user()
            .map(|user| (user.name.clone(), user.about.clone()))
            .unwrap_or_default();
        {
            let mut forms = forms.write();
            log_form_error(forms.set_value(PROFILE_FORM, NAME_INPUT, &name));
            log_form_error(forms.set_value(PROFILE_FORM, ABOUT_INPUT, &about));
            log_form_error(forms.clear_validation(PROFILE_FORM));
        }
        modals.write().open_modal_window(Popup::EditProfile);
    };

    let open_avatar = move |_: ()| {
        {
            let mut forms = forms.write();
            log_form_error(forms.reset(AVATAR_FORM));
            log_form_error(forms.clear_validation(AVATAR_FORM));
        }
        modals.write().open_modal_window(Popup::EditAvatar);
    };

    let open_new_card = move |_: ()| {
        {
            let mut forms = forms.write();
            log_form_error(forms.reset(CARD_FORM));
            log_form_error(forms.clear_validation(CARD_FORM));
        }
        modals.write().open_modal_window(Popup::NewCard);
    };

    // --- Card interactions ---

    let handle_preview = use_callback(move |picture: ImagePreview| {
        preview.set(picture);
        modals.write().open_modal_window(Popup::Image);
    });

    let like_client = client.clone();
    let handle_like = use_callback(move |toggle: LikeToggle| {
        let client = like_client.clone();
        spawn(async move {
            match client
                .change_like_card_status(&toggle.card_id, toggle.is_liked)
                .await
            {
                Ok(card) => {
                    if !cards.write().replace(card) {
                        tracing::debug!(card = %toggle.card_id, "liked card is no longer displayed");
                    }
                }
                Err(e) => log_request_error(&format!("update like on {}", toggle.card_id), &e),
            }
        });
    });

    let handle_delete = use_callback(move |card_id: String| {
        session.write().request_delete(card_id);
        modals.write().open_modal_window(Popup::RemoveCard);
    });

    let info_client = client.clone();
    let handle_info = use_callback(move |card_id: String| {
        let client = info_client.clone();
        spawn(async move {
            match client.get_card_list().await {
                Ok(list) => match CardInfo::find(&list, &card_id) {
                    Some(details) => {
                        info.set(Some(details));
                        modals.write().open_modal_window(Popup::Info);
                    }
                    None => tracing::warn!(card = %card_id, "card no longer exists on the server"),
                },
                Err(e) => log_request_error(&format!("load details of {card_id}"), &e),
            }
        });
    });

    // --- Form submissions ---

    let profile_client = client.clone();
    let submit_profile = move |_: ()| {
        let Some(mut values) = submitted_values(forms, PROFILE_FORM) else {
            return;
        };
        let update = ProfileUpdate {
            name: values.remove(NAME_INPUT).unwrap_or_default(),
            about: values.remove(ABOUT_INPUT).unwrap_or_default(),
        };

        if !submits.write().begin(PROFILE_FORM) {
            return;
        }
        let client = profile_client.clone();
        spawn(async move {
            let result = client.set_user_info(&update).await;
            let result = submits.write().complete(PROFILE_FORM, result);
            match result {
                Ok(user) => {
                    cards.write().refresh_user(&user);
                    session.write().sign_in(user);
                    modals.write().close_modal_window(Popup::EditProfile);
                }
                Err(e) => log_request_error("update profile", &e),
            }
        });
    };

    let avatar_client = client.clone();
    let submit_avatar = move |_: ()| {
        let Some(avatar) =
            submitted_values(forms, AVATAR_FORM).and_then(|mut values| values.remove(AVATAR_INPUT))
        else {
            return;
        };

        if !submits.write().begin(AVATAR_FORM) {
            return;
        }
        let client = avatar_client.clone();
        spawn(async move {
            let result = client.set_user_avatar(&avatar).await;
            let result = submits.write().complete(AVATAR_FORM, result);
            match result {
                Ok(user) => {
                    session.write().sign_in(user);
                    log_form_error(forms.write().reset(AVATAR_FORM));
                    modals.write().close_modal_window(Popup::EditAvatar);
                }
                Err(e) => log_request_error("update avatar", &e),
            }
        });
    };

    let card_client = client.clone();
    let submit_card = move |_: ()| {
        let Some(mut values) = submitted_values(forms, CARD_FORM) else {
            return;
        };
        let new_card = NewCard {
            name: values.remove(PLACE_NAME_INPUT).unwrap_or_default(),
            link: values.remove(LINK_INPUT).unwrap_or_default(),
        };

        if !submits.write().begin(CARD_FORM) {
            return;
        }
        let client = card_client.clone();
        spawn(async move {
            let result = client.add_card(&new_card).await;
            let result = submits.write().complete(CARD_FORM, result);
            match result {
                Ok(card) => {
                    tracing::info!(card = %card.id, "card added");
                    cards.write().prepend(card);
                    log_form_error(forms.write().reset(CARD_FORM));
                    modals.write().close_modal_window(Popup::NewCard);
                }
                Err(e) => log_request_error("add card", &e),
            }
        });
    };

    let remove_client = client.clone();
    let submit_remove = move |_: ()| {
        let Some(card_id) = session.read().pending_delete().map(str::to_string) else {
            return;
        };

        if !submits.write().begin(REMOVE_FORM) {
            return;
        }
        let client = remove_client.clone();
        spawn(async move {
            let result = client.delete_card(&card_id).await;
            let result = submits.write().complete(REMOVE_FORM, result);
            match result {
                Ok(confirmation) => {
                    tracing::info!(card = %card_id, "{}", confirmation.message);
                    delete_card(&mut cards.write(), &card_id);
                    session.write().take_pending_delete();
                    modals.write().close_modal_window(Popup::RemoveCard);
                }
                Err(e) => log_request_error(&format!("delete card {card_id}"), &e),
            }
        });
    };

    let user = session.read().user().cloned();
    let user_id = user.as_ref().map(|user| user.id.clone());
    let list = cards.read().cards().to_vec();

    rsx! {
        div { class: "page",
            div { class: "page__content",
                ProfileHeader {
                    user,
                    on_edit_profile: open_profile,
                    on_edit_avatar: open_avatar,
                    on_add_card: open_new_card,
                }
                section { class: "places page__section",
                    ul { class: "places__list",
                        for card in list {
                            CardItem {
                                key: "{card.id}",
                                card: card.clone(),
                                user_id: user_id.clone(),
                                on_preview_picture: handle_preview,
                                on_like_icon: handle_like,
                                on_delete_card: handle_delete,
                                on_info_click: handle_info,
                            }
                        }
                    }
                }
                footer { class: "footer",
                    p { class: "footer__copyright", "© Mesto" }
                }
            }

            EditProfilePopup { busy: submits.read().is_busy(PROFILE_FORM), on_submit: submit_profile }
            EditAvatarPopup { busy: submits.read().is_busy(AVATAR_FORM), on_submit: submit_avatar }
            NewCardPopup { busy: submits.read().is_busy(CARD_FORM), on_submit: submit_card }
            RemoveCardPopup { busy: submits.read().is_busy(REMOVE_FORM), on_submit: submit_remove }
            ImagePopup { preview: preview() }
            CardInfoPopup { info: info() }
        }
    }
}
