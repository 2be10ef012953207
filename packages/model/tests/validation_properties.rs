//! Property tests for submit-button enablement.

use model::{Constraints, FormMarkup, InputMarkup, Pattern, ValidationConfig, ValidationEngine};
use proptest::prelude::*;

const FIELDS: [&str; 3] = ["name", "about", "link"];

fn constraints_for(field: &str) -> Constraints {
    match field {
        "name" => Constraints::text()
            .required()
            .min_length(2)
            .max_length(12)
            .pattern(Pattern::name_like()),
        "about" => Constraints::text().required().min_length(2).max_length(20),
        _ => Constraints::url().required(),
    }
}

fn markup() -> FormMarkup {
    FIELDS.iter().fold(
        FormMarkup::new("card", "popup__form"),
        |form, field| {
            form.field(
                InputMarkup::new(*field, "popup__input", constraints_for(field))
                    .error_message("Only letters, hyphens and spaces"),
                "popup__error",
            )
        },
    )
    .button("popup__button", "Save")
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z -]{0,16}",
        "[a-z0-9]{1,8}",
        "https://[a-z]{1,8}\\.com/[a-z]{0,6}",
        "[а-яё]{1,6}",
    ]
}

proptest! {
    #[test]
    fn submit_enabled_iff_every_field_valid(
        edits in proptest::collection::vec((0usize..FIELDS.len(), value_strategy()), 0..24)
    ) {
        let mut engine = ValidationEngine::enable_validation(ValidationConfig::default(), [markup()]).unwrap();
        let mut edited = [false; 3];
        let mut values = [String::new(), String::new(), String::new()];

        for (field, value) in &edits {
            engine.handle_input("card", FIELDS[*field], value).unwrap();
            edited[*field] = true;
            values[*field] = value.clone();

            let all_valid = (0..FIELDS.len()).all(|i| {
                constraints_for(FIELDS[i]).evaluate(&values[i], edited[i], "").valid()
            });

            let form = engine.form("card").unwrap();
            prop_assert_eq!(form.submit().disabled, !all_valid);
            prop_assert_eq!(
                form.submit().classes.contains("popup__button_disabled"),
                !all_valid
            );
        }
    }

    #[test]
    fn clear_validation_always_empties_errors(
        edits in proptest::collection::vec((0usize..FIELDS.len(), value_strategy()), 0..12)
    ) {
        let mut engine = ValidationEngine::enable_validation(ValidationConfig::default(), [markup()]).unwrap();
        for (field, value) in &edits {
            engine.handle_input("card", FIELDS[*field], value).unwrap();
        }

        engine.clear_validation("card").unwrap();

        let form = engine.form("card").unwrap();
        for field in FIELDS {
            let slot = form.error_slot(field).unwrap();
            prop_assert!(slot.text.is_empty());
            prop_assert!(!slot.classes.contains("popup__error_visible"));
            prop_assert!(!form.input(field).unwrap().classes().contains("popup__input_type_error"));
        }
        prop_assert!(form.submit().disabled);
    }
}
