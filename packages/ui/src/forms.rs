//! The page's validated forms: their markup, and the components that render a
//! [`ManagedForm`](model::ManagedForm) out of the shared [`ValidationEngine`].

use dioxus::prelude::*;
use model::{Constraints, FormMarkup, InputKind, InputMarkup, Pattern, ValidationConfig};

use crate::context::use_forms;

pub const PROFILE_FORM: &str = "edit-profile";
pub const NAME_INPUT: &str = "name-input";
pub const ABOUT_INPUT: &str = "about-input";

pub const AVATAR_FORM: &str = "edit-avatar";
pub const AVATAR_INPUT: &str = "avatar-input";

pub const CARD_FORM: &str = "new-place";
pub const PLACE_NAME_INPUT: &str = "place-name-input";
pub const LINK_INPUT: &str = "link-input";

pub const REMOVE_FORM: &str = "remove-card";

const NAME_PATTERN_MESSAGE: &str =
    "Only Latin and Cyrillic letters, hyphens and spaces are allowed";

/// Markup of every form on the page, classed so that `config`'s selectors
/// pick them up.
pub fn page_forms(config: &ValidationConfig) -> Vec<FormMarkup> {
    let form = format!(
        "popup__form {}",
        config.form_selector.class_name().unwrap_or_default()
    );
    let input = |modifier: &str| {
        format!(
            "popup__input popup__input_type_{modifier} {}",
            config.input_selector.class_name().unwrap_or_default()
        )
    };
    let button = format!(
        "popup__button {}",
        config.submit_button_selector.class_name().unwrap_or_default()
    );
    let error = "popup__error";

    let profile = FormMarkup::new(PROFILE_FORM, &form)
        .field(
            InputMarkup::new(
                NAME_INPUT,
                &input("name"),
                Constraints::text()
                    .required()
                    .min_length(2)
                    .max_length(40)
                    .pattern(Pattern::name_like()),
            )
            .error_message(NAME_PATTERN_MESSAGE),
            error,
        )
        .field(
            InputMarkup::new(
                ABOUT_INPUT,
                &input("description"),
                Constraints::text().required().min_length(2).max_length(200),
            ),
            error,
        )
        .button(&button, "Save");

    let avatar = FormMarkup::new(AVATAR_FORM, &form)
        .field(
            InputMarkup::new(AVATAR_INPUT, &input("url"), Constraints::url().required()),
            error,
        )
        .button(&button, "Save");

    let card = FormMarkup::new(CARD_FORM, &form)
        .field(
            InputMarkup::new(
                PLACE_NAME_INPUT,
                &input("card-name"),
                Constraints::text()
                    .required()
                    .min_length(2)
                    .max_length(30)
                    .pattern(Pattern::name_like()),
            )
            .error_message(NAME_PATTERN_MESSAGE),
            error,
        )
        .field(
            InputMarkup::new(LINK_INPUT, &input("url"), Constraints::url().required()),
            error,
        )
        .button(&button, "Save");

    let remove = FormMarkup::new(REMOVE_FORM, &form).button(&button, "Yes");

    vec![profile, avatar, card, remove]
}

/// A `<form>` bound to one managed form. Native validation is off; submits
/// are reported through `onsubmit`.
#[component]
pub fn ValidatedForm(form: &'static str, onsubmit: EventHandler<()>, children: Element) -> Element {
    let forms = use_forms();
    let class = forms
        .read()
        .form(form)
        .map(|managed| managed.classes().to_string())
        .unwrap_or_default();

    rsx! {
        form {
            class,
            name: form,
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                onsubmit.call(());
            },
            {children}
        }
    }
}

/// One managed input and its error slot.
#[component]
pub fn ValidatedInput(form: &'static str, field: &'static str, placeholder: &'static str) -> Element {
    let mut forms = use_forms();

    let engine = forms.read();
    let Some(input) = engine.form(form).and_then(|managed| managed.input(field)) else {
        tracing::error!(form, field, "input is not part of any bound form");
        return rsx! {};
    };
    let slot = engine.form(form).and_then(|managed| managed.error_slot(field));

    let class = input.classes().to_string();
    let value = input.value().to_string();
    let constraints = input.constraints().clone();
    let error_message = input.custom_error_message().map(str::to_string);
    let (slot_id, slot_class, slot_text) = slot
        .map(|slot| (slot.id.clone(), slot.classes.to_string(), slot.text.clone()))
        .unwrap_or_else(|| (format!("{field}-error"), String::new(), String::new()));
    drop(engine);

    let input_type = match constraints.kind {
        InputKind::Text => "text",
        InputKind::Url => "url",
    };

    rsx! {
        input {
            id: field,
            name: field,
            class,
            r#type: input_type,
            placeholder,
            value,
            required: constraints.required,
            minlength: constraints.min_length.map(|n| n.to_string()),
            maxlength: constraints.max_length.map(|n| n.to_string()),
            pattern: constraints.pattern.as_ref().map(|p| p.source().to_string()),
            "data-error-message": error_message,
            oninput: move |evt: FormEvent| {
                if let Err(e) = forms.write().handle_input(form, field, &evt.value()) {
                    tracing::error!("Failed to validate {}: {}", field, e);
                }
            },
        }
        span { id: slot_id, class: slot_class, "{slot_text}" }
    }
}

/// The submit control of a managed form. While `busy` it shows `busy_label`
/// and ignores clicks.
#[component]
pub fn SubmitButton(form: &'static str, busy: bool, busy_label: &'static str) -> Element {
    let forms = use_forms();
    let (class, disabled, label) = forms
        .read()
        .form(form)
        .map(|managed| {
            let submit = managed.submit();
            (submit.classes.to_string(), submit.disabled, submit.label.clone())
        })
        .unwrap_or_default();

    rsx! {
        button {
            r#type: "submit",
            class,
            disabled: disabled || busy,
            if busy {
                "{busy_label}"
            } else {
                "{label}"
            }
        }
    }
}
