//! # Form validation engine
//!
//! Live, constraint-based validation attached to any number of forms through a
//! single [`ValidationConfig`].
//!
//! Forms are described as [`FormMarkup`]: a named form with class markers and
//! an ordered list of elements (inputs, error-message slots, buttons), the same
//! information the HTML carries. [`ValidationEngine::enable_validation`] picks
//! every form matching the form selector, discovers its inputs and submit
//! control through the configured selectors, and binds them into a
//! [`ManagedForm`]. Binding fails fast with a [`BindError`] when a structural
//! assumption does not hold (an input without its `<id>-error` slot, a form
//! without a submit control), instead of faulting later at event time.
//!
//! ## Per-field reaction
//!
//! [`ValidationEngine::handle_input`] is what an `input` event triggers:
//!
//! 1. Native constraints are evaluated. On a pattern mismatch the field's
//!    custom error message (if it has one) becomes the custom-validity override;
//!    otherwise the override is cleared.
//! 2. An invalid field gets `input_error_class` and its slot shows the
//!    validation message with `error_class`; a valid field has both cleared.
//! 3. The submit control is disabled (with `inactive_button_class`) if any
//!    managed field is invalid, enabled otherwise.
//!
//! [`ValidationEngine::clear_validation`] resets error displays and overrides
//! and force-disables the submit control; the page calls it when opening a form.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::classes::ClassList;
use crate::config::{ConfigError, ValidationConfig};
use crate::constraints::{Constraints, ValidityState};

/// Structural problems found while binding forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("form `{form}`: input `{input}` has no `#{input}-error` element")]
    MissingErrorSlot { form: String, input: String },
    #[error("form `{form}` has no element matching `{selector}`")]
    MissingSubmit { form: String, selector: String },
    #[error("form `{0}` is declared more than once")]
    DuplicateForm(String),
    #[error("form `{form}`: input id `{input}` is used more than once")]
    DuplicateInput { form: String, input: String },
    #[error("`{key}` must be a class selector, got `{selector}`")]
    ClassSelectorRequired { key: &'static str, selector: String },
}

/// Dispatch to a form or field the engine does not manage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("no validated form named `{0}`")]
    UnknownForm(String),
    #[error("form `{form}` has no input `{field}`")]
    UnknownField { form: String, field: String },
}

/// Declarative description of one input element.
#[derive(Clone, Debug, PartialEq)]
pub struct InputMarkup {
    pub id: String,
    pub classes: ClassList,
    pub constraints: Constraints,
    /// The `data-error-message` attribute: replaces the pattern-mismatch message.
    pub error_message: Option<String>,
    /// Initial (and reset) value.
    pub value: String,
}

impl InputMarkup {
    pub fn new(id: impl Into<String>, classes: &str, constraints: Constraints) -> Self {
        Self {
            id: id.into(),
            classes: ClassList::parse(classes),
            constraints,
            error_message: None,
            value: String::new(),
        }
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// One element inside a form.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementMarkup {
    Input(InputMarkup),
    ErrorSlot { id: String, classes: ClassList },
    Button { classes: ClassList, label: String },
}

/// Declarative description of a form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormMarkup {
    pub name: String,
    pub classes: ClassList,
    pub elements: Vec<ElementMarkup>,
}

impl FormMarkup {
    pub fn new(name: impl Into<String>, classes: &str) -> Self {
        Self {
            name: name.into(),
            classes: ClassList::parse(classes),
            elements: Vec::new(),
        }
    }

    pub fn input(mut self, input: InputMarkup) -> Self {
        self.elements.push(ElementMarkup::Input(input));
        self
    }

    pub fn error_slot(mut self, id: impl Into<String>, classes: &str) -> Self {
        self.elements.push(ElementMarkup::ErrorSlot {
            id: id.into(),
            classes: ClassList::parse(classes),
        });
        self
    }

    /// An input followed by its `<id>-error` slot.
    pub fn field(self, input: InputMarkup, error_classes: &str) -> Self {
        let slot_id = error_slot_id(&input.id);
        self.input(input).error_slot(slot_id, error_classes)
    }

    pub fn button(mut self, classes: &str, label: impl Into<String>) -> Self {
        self.elements.push(ElementMarkup::Button {
            classes: ClassList::parse(classes),
            label: label.into(),
        });
        self
    }
}

fn error_slot_id(input_id: &str) -> String {
    format!("{input_id}-error")
}

/// A bound input with its live state.
#[derive(Clone, Debug, PartialEq)]
pub struct InputElement {
    id: String,
    classes: ClassList,
    constraints: Constraints,
    error_message: Option<String>,
    initial_value: String,
    value: String,
    user_edited: bool,
    custom_validity: String,
    /// Index into the form's error slots; `None` for unmanaged inputs.
    slot: Option<usize>,
}

impl InputElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn custom_error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the validation engine watches this input.
    pub fn is_managed(&self) -> bool {
        self.slot.is_some()
    }

    pub fn validity(&self) -> ValidityState {
        self.constraints
            .evaluate(&self.value, self.user_edited, &self.custom_validity)
    }

    pub fn validation_message(&self) -> String {
        self.constraints
            .validation_message(&self.validity(), &self.value, &self.custom_validity)
    }

    pub fn set_custom_validity(&mut self, message: impl Into<String>) {
        self.custom_validity = message.into();
    }
}

/// The element that shows a field's validation message.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorSlot {
    pub id: String,
    pub classes: ClassList,
    pub text: String,
}

/// A form's submit button.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitControl {
    pub classes: ClassList,
    pub label: String,
    pub disabled: bool,
}

/// Outcome of a per-field reaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValidity {
    pub valid: bool,
    pub message: String,
}

/// A form bound to the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ManagedForm {
    name: String,
    classes: ClassList,
    inputs: Vec<InputElement>,
    error_slots: Vec<ErrorSlot>,
    submit: SubmitControl,
    config: Arc<ValidationConfig>,
}

impl ManagedForm {
    fn bind(markup: FormMarkup, config: Arc<ValidationConfig>) -> Result<Self, BindError> {
        let FormMarkup {
            name,
            classes,
            elements,
        } = markup;

        let mut inputs = Vec::new();
        let mut error_slots = Vec::new();
        let mut submit = None;

        for element in elements {
            match element {
                ElementMarkup::Input(input) => inputs.push(input),
                ElementMarkup::ErrorSlot { id, classes } => error_slots.push(ErrorSlot {
                    id,
                    classes,
                    text: String::new(),
                }),
                ElementMarkup::Button { classes, label } => {
                    if submit.is_none() && config.submit_button_selector.matches(None, &classes) {
                        submit = Some(SubmitControl {
                            classes,
                            label,
                            disabled: false,
                        });
                    }
                }
            }
        }

        let submit = submit.ok_or_else(|| BindError::MissingSubmit {
            form: name.clone(),
            selector: config.submit_button_selector.to_string(),
        })?;

        let mut bound = Vec::with_capacity(inputs.len());
        for input in inputs {
            if bound.iter().any(|b: &InputElement| b.id == input.id) {
                return Err(BindError::DuplicateInput {
                    form: name.clone(),
                    input: input.id,
                });
            }

            let slot = if config.input_selector.matches(Some(input.id.as_str()), &input.classes) {
                let slot_id = error_slot_id(&input.id);
                let index = error_slots
                    .iter()
                    .position(|slot| slot.id == slot_id)
                    .ok_or_else(|| BindError::MissingErrorSlot {
                        form: name.clone(),
                        input: input.id.clone(),
                    })?;
                Some(index)
            } else {
                tracing::debug!(form = %name, input = %input.id, "input does not match input selector");
                None
            };

            bound.push(InputElement {
                id: input.id,
                classes: input.classes,
                constraints: input.constraints,
                error_message: input.error_message,
                initial_value: input.value.clone(),
                value: input.value,
                user_edited: false,
                custom_validity: String::new(),
                slot,
            });
        }

        let mut form = Self {
            name,
            classes,
            inputs: bound,
            error_slots,
            submit,
            config,
        };
        form.toggle_button_state();
        Ok(form)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn inputs(&self) -> &[InputElement] {
        &self.inputs
    }

    pub fn input(&self, id: &str) -> Option<&InputElement> {
        self.inputs.iter().find(|input| input.id == id)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.input(id).map(InputElement::value)
    }

    /// Current values keyed by input id.
    pub fn values(&self) -> BTreeMap<String, String> {
        self.inputs
            .iter()
            .map(|input| (input.id.clone(), input.value.clone()))
            .collect()
    }

    /// The `#<id>-error` slot of an input.
    pub fn error_slot(&self, input_id: &str) -> Option<&ErrorSlot> {
        let slot_id = error_slot_id(input_id);
        self.error_slots.iter().find(|slot| slot.id == slot_id)
    }

    pub fn submit(&self) -> &SubmitControl {
        &self.submit
    }

    /// Whether every managed input currently reports valid.
    pub fn is_valid(&self) -> bool {
        !self.has_invalid_input()
    }

    fn position(&self, field: &str) -> Result<usize, FormError> {
        self.inputs
            .iter()
            .position(|input| input.id == field)
            .ok_or_else(|| FormError::UnknownField {
                form: self.name.clone(),
                field: field.to_string(),
            })
    }

    /// React to a user edit of `field`.
    pub fn handle_input(&mut self, field: &str, value: &str) -> Result<FieldValidity, FormError> {
        let index = self.position(field)?;
        let input = &mut self.inputs[index];
        input.value = value.to_string();
        input.user_edited = true;

        if !input.is_managed() {
            return Ok(FieldValidity {
                valid: true,
                message: String::new(),
            });
        }

        self.check_input_validity(index);
        self.toggle_button_state();

        let input = &self.inputs[index];
        Ok(FieldValidity {
            valid: input.validity().valid(),
            message: input.validation_message(),
        })
    }

    /// Programmatic value assignment: no reaction runs and the value does not
    /// count as a user edit.
    pub fn set_value(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        let index = self.position(field)?;
        let input = &mut self.inputs[index];
        input.value = value.to_string();
        input.user_edited = false;
        Ok(())
    }

    /// Restore every input to its initial value, like `HTMLFormElement.reset()`.
    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.value = input.initial_value.clone();
            input.user_edited = false;
        }
    }

    /// Hide all errors, drop custom-validity overrides and disable submit.
    pub fn clear_validation(&mut self) {
        for index in 0..self.inputs.len() {
            if self.inputs[index].is_managed() {
                self.hide_input_error(index);
                self.inputs[index].set_custom_validity("");
            }
        }
        self.disable_submit_button();
    }

    fn check_input_validity(&mut self, index: usize) {
        let input = &mut self.inputs[index];
        if input.validity().pattern_mismatch {
            let custom = input.error_message.clone().unwrap_or_default();
            input.set_custom_validity(custom);
        } else {
            input.set_custom_validity("");
        }

        if input.validity().valid() {
            self.hide_input_error(index);
        } else {
            let message = input.validation_message();
            self.show_input_error(index, message);
        }
    }

    fn show_input_error(&mut self, index: usize, message: String) {
        let input = &mut self.inputs[index];
        input.classes.add(&self.config.input_error_class);
        if let Some(slot) = input.slot {
            let slot = &mut self.error_slots[slot];
            slot.text = message;
            slot.classes.add(&self.config.error_class);
        }
    }

    fn hide_input_error(&mut self, index: usize) {
        let input = &mut self.inputs[index];
        input.classes.remove(&self.config.input_error_class);
        if let Some(slot) = input.slot {
            let slot = &mut self.error_slots[slot];
            slot.classes.remove(&self.config.error_class);
            slot.text.clear();
        }
    }

    fn has_invalid_input(&self) -> bool {
        self.inputs
            .iter()
            .filter(|input| input.is_managed())
            .any(|input| !input.validity().valid())
    }

    fn toggle_button_state(&mut self) {
        if self.has_invalid_input() {
            self.disable_submit_button();
        } else {
            self.enable_submit_button();
        }
    }

    fn disable_submit_button(&mut self) {
        self.submit.classes.add(&self.config.inactive_button_class);
        self.submit.disabled = true;
    }

    fn enable_submit_button(&mut self) {
        self.submit.classes.remove(&self.config.inactive_button_class);
        self.submit.disabled = false;
    }
}

/// Every validated form of a page, sharing one immutable configuration.
///
/// The default engine manages no forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationEngine {
    config: Arc<ValidationConfig>,
    forms: Vec<ManagedForm>,
}

impl ValidationEngine {
    /// Bind every form matching `config.form_selector` and compute the initial
    /// submit state of each.
    pub fn enable_validation(
        config: ValidationConfig,
        forms: impl IntoIterator<Item = FormMarkup>,
    ) -> Result<Self, BindError> {
        if let Err(ConfigError::ClassSelectorRequired { key, selector }) = config.check() {
            return Err(BindError::ClassSelectorRequired { key, selector });
        }
        let config = Arc::new(config);
        let mut managed: Vec<ManagedForm> = Vec::new();

        for markup in forms {
            if !config.form_selector.matches(None, &markup.classes) {
                tracing::debug!(form = %markup.name, "skipping form that does not match form selector");
                continue;
            }
            if managed.iter().any(|form| form.name == markup.name) {
                return Err(BindError::DuplicateForm(markup.name));
            }
            managed.push(ManagedForm::bind(markup, Arc::clone(&config))?);
        }

        tracing::debug!(count = managed.len(), "validation enabled");
        Ok(Self {
            config,
            forms: managed,
        })
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn forms(&self) -> &[ManagedForm] {
        &self.forms
    }

    pub fn form(&self, name: &str) -> Option<&ManagedForm> {
        self.forms.iter().find(|form| form.name == name)
    }

    fn form_mut(&mut self, name: &str) -> Result<&mut ManagedForm, FormError> {
        self.forms
            .iter_mut()
            .find(|form| form.name == name)
            .ok_or_else(|| FormError::UnknownForm(name.to_string()))
    }

    pub fn handle_input(
        &mut self,
        form: &str,
        field: &str,
        value: &str,
    ) -> Result<FieldValidity, FormError> {
        self.form_mut(form)?.handle_input(field, value)
    }

    pub fn clear_validation(&mut self, form: &str) -> Result<(), FormError> {
        self.form_mut(form)?.clear_validation();
        Ok(())
    }

    pub fn set_value(&mut self, form: &str, field: &str, value: &str) -> Result<(), FormError> {
        self.form_mut(form)?.set_value(field, value)
    }

    pub fn reset(&mut self, form: &str) -> Result<(), FormError> {
        self.form_mut(form)?.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Selector};
    use crate::constraints::Pattern;

    fn short_config() -> ValidationConfig {
        AppConfig::from_toml(
            r#"
            [validation]
            formSelector = ".f"
            inputSelector = ".i"
            submitButtonSelector = ".b"
            inactiveButtonClass = "off"
            inputErrorClass = "err"
            errorClass = "show"
            "#,
        )
        .unwrap()
        .validation
    }

    fn profile_form() -> FormMarkup {
        FormMarkup::new("profile", "f")
            .field(
                InputMarkup::new(
                    "name",
                    "i",
                    Constraints::text()
                        .required()
                        .min_length(2)
                        .max_length(40)
                        .pattern(Pattern::name_like()),
                )
                .error_message("Only letters, hyphens and spaces"),
                "",
            )
            .field(
                InputMarkup::new("about", "i", Constraints::text().required().min_length(2)),
                "",
            )
            .button("b", "Save")
    }

    #[test]
    fn test_required_field_scenario() {
        let form = FormMarkup::new("single", "f")
            .field(InputMarkup::new("title", "i", Constraints::text().required()), "")
            .button("b", "Save");
        let mut engine = ValidationEngine::enable_validation(short_config(), [form]).unwrap();

        let submit = engine.form("single").unwrap().submit();
        assert!(submit.disabled);
        assert!(submit.classes.contains("off"));

        let result = engine.handle_input("single", "title", "Lake").unwrap();
        assert!(result.valid);
        let submit = engine.form("single").unwrap().submit();
        assert!(!submit.disabled);
        assert!(!submit.classes.contains("off"));
    }

    #[test]
    fn test_invalid_field_shows_error_in_its_slot() {
        let mut engine = ValidationEngine::enable_validation(short_config(), [profile_form()]).unwrap();

        let result = engine.handle_input("profile", "about", "x").unwrap();
        assert!(!result.valid);

        let form = engine.form("profile").unwrap();
        let about = form.input("about").unwrap();
        assert!(about.classes().contains("err"));
        let slot = form.error_slot("about").unwrap();
        assert_eq!(slot.id, "about-error");
        assert!(slot.classes.contains("show"));
        assert_eq!(slot.text, result.message);
        assert!(slot.text.starts_with("Please lengthen this text"));

        engine.handle_input("profile", "about", "Explorer").unwrap();
        let form = engine.form("profile").unwrap();
        assert!(!form.input("about").unwrap().classes().contains("err"));
        assert!(form.error_slot("about").unwrap().text.is_empty());
        assert!(!form.error_slot("about").unwrap().classes.contains("show"));
    }

    #[test]
    fn test_pattern_mismatch_uses_custom_message() {
        let mut engine = ValidationEngine::enable_validation(short_config(), [profile_form()]).unwrap();

        let result = engine.handle_input("profile", "name", "R2-D2").unwrap();
        assert!(!result.valid);
        assert_eq!(result.message, "Only letters, hyphens and spaces");
        assert_eq!(
            engine.form("profile").unwrap().error_slot("name").unwrap().text,
            "Only letters, hyphens and spaces"
        );

        // A later non-pattern failure falls back to the native message.
        let result = engine.handle_input("profile", "name", "J").unwrap();
        assert!(result.message.starts_with("Please lengthen this text"));
    }

    #[test]
    fn test_pattern_mismatch_without_custom_message_uses_native_text() {
        let form = FormMarkup::new("plain", "f")
            .field(
                InputMarkup::new("name", "i", Constraints::text().pattern(Pattern::name_like())),
                "",
            )
            .button("b", "Save");
        let mut engine = ValidationEngine::enable_validation(short_config(), [form]).unwrap();
        let result = engine.handle_input("plain", "name", "42").unwrap();
        assert_eq!(result.message, "Please match the requested format.");
    }

    #[test]
    fn test_submit_enabled_only_when_all_fields_valid() {
        let mut engine = ValidationEngine::enable_validation(short_config(), [profile_form()]).unwrap();

        engine.handle_input("profile", "name", "Jacques").unwrap();
        assert!(engine.form("profile").unwrap().submit().disabled);

        engine.handle_input("profile", "about", "Explorer").unwrap();
        assert!(!engine.form("profile").unwrap().submit().disabled);

        engine.handle_input("profile", "name", "").unwrap();
        assert!(engine.form("profile").unwrap().submit().disabled);
    }

    #[test]
    fn test_clear_validation_resets_errors_and_disables_submit() {
        let mut engine = ValidationEngine::enable_validation(short_config(), [profile_form()]).unwrap();
        engine.handle_input("profile", "name", "R2").unwrap();
        engine.handle_input("profile", "about", "Explorer").unwrap();

        engine.clear_validation("profile").unwrap();

        let form = engine.form("profile").unwrap();
        for input in form.inputs() {
            assert!(!input.classes().contains("err"));
            let slot = form.error_slot(input.id()).unwrap();
            assert!(slot.text.is_empty());
            assert!(!slot.classes.contains("show"));
        }
        assert!(form.submit().disabled);
        assert!(form.submit().classes.contains("off"));
    }

    #[test]
    fn test_prefill_then_clear_keeps_submit_disabled_until_edit() {
        let mut engine = ValidationEngine::enable_validation(short_config(), [profile_form()]).unwrap();
        engine.set_value("profile", "name", "Jacques").unwrap();
        engine.set_value("profile", "about", "Explorer").unwrap();
        engine.clear_validation("profile").unwrap();
        assert!(engine.form("profile").unwrap().submit().disabled);

        engine.handle_input("profile", "about", "Explorer of the sea").unwrap();
        assert!(!engine.form("profile").unwrap().submit().disabled);
        assert_eq!(engine.form("profile").unwrap().value("name"), Some("Jacques"));
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let form = FormMarkup::new("avatar", "f")
            .field(InputMarkup::new("link", "i", Constraints::url().required()), "")
            .button("b", "Save");
        let mut engine = ValidationEngine::enable_validation(short_config(), [form]).unwrap();
        engine.handle_input("avatar", "link", "https://example.com/a.png").unwrap();
        assert_eq!(
            engine.form("avatar").unwrap().values(),
            BTreeMap::from([("link".to_string(), "https://example.com/a.png".to_string())])
        );

        engine.reset("avatar").unwrap();
        assert_eq!(engine.form("avatar").unwrap().value("link"), Some(""));
    }

    #[test]
    fn test_missing_error_slot_fails_binding() {
        let form = FormMarkup::new("broken", "f")
            .input(InputMarkup::new("title", "i", Constraints::text().required()))
            .button("b", "Save");
        let err = ValidationEngine::enable_validation(short_config(), [form]).unwrap_err();
        assert_eq!(
            err,
            BindError::MissingErrorSlot {
                form: "broken".to_string(),
                input: "title".to_string()
            }
        );
    }

    #[test]
    fn test_missing_submit_fails_binding() {
        let form = FormMarkup::new("nobutton", "f")
            .field(InputMarkup::new("title", "i", Constraints::text()), "")
            .button("other", "Cancel");
        let err = ValidationEngine::enable_validation(short_config(), [form]).unwrap_err();
        assert!(matches!(err, BindError::MissingSubmit { .. }));
    }

    #[test]
    fn test_id_selector_for_forms_or_buttons_fails_binding() {
        let config = ValidationConfig {
            form_selector: Selector::Id("profile".to_string()),
            ..short_config()
        };
        let err = ValidationEngine::enable_validation(config, [profile_form()]).unwrap_err();
        assert_eq!(
            err,
            BindError::ClassSelectorRequired {
                key: "form_selector",
                selector: "#profile".to_string()
            }
        );

        let config = ValidationConfig {
            submit_button_selector: Selector::Id("save".to_string()),
            ..short_config()
        };
        let err = ValidationEngine::enable_validation(config, [profile_form()]).unwrap_err();
        assert!(matches!(
            err,
            BindError::ClassSelectorRequired { key: "submit_button_selector", .. }
        ));
    }

    #[test]
    fn test_duplicate_forms_and_inputs_fail_binding() {
        let err = ValidationEngine::enable_validation(short_config(), [profile_form(), profile_form()])
            .unwrap_err();
        assert_eq!(err, BindError::DuplicateForm("profile".to_string()));

        let form = FormMarkup::new("dup", "f")
            .field(InputMarkup::new("x", "i", Constraints::text()), "")
            .field(InputMarkup::new("x", "i", Constraints::text()), "")
            .button("b", "Save");
        let err = ValidationEngine::enable_validation(short_config(), [form]).unwrap_err();
        assert!(matches!(err, BindError::DuplicateInput { .. }));
    }

    #[test]
    fn test_forms_and_inputs_outside_selectors_are_not_managed() {
        let search = FormMarkup::new("search", "search-form")
            .input(InputMarkup::new("q", "i", Constraints::text().required()));
        let mixed = FormMarkup::new("mixed", "f")
            .input(InputMarkup::new("note", "plain", Constraints::text().required()))
            .button("b", "Send");

        let mut engine = ValidationEngine::enable_validation(short_config(), [search, mixed]).unwrap();
        assert!(engine.form("search").is_none());

        let mixed = engine.form("mixed").unwrap();
        assert!(!mixed.input("note").unwrap().is_managed());
        assert!(!mixed.submit().disabled);

        assert!(engine.handle_input("mixed", "note", "").unwrap().valid);
    }

    #[test]
    fn test_form_without_inputs_has_enabled_submit() {
        let form = FormMarkup::new("confirm", "f").button("b", "Yes");
        let engine = ValidationEngine::enable_validation(short_config(), [form]).unwrap();
        assert!(!engine.form("confirm").unwrap().submit().disabled);
    }

    #[test]
    fn test_unknown_form_or_field_is_an_error() {
        let mut engine = ValidationEngine::enable_validation(short_config(), [profile_form()]).unwrap();
        assert_eq!(
            engine.handle_input("nope", "name", "x").unwrap_err(),
            FormError::UnknownForm("nope".to_string())
        );
        assert!(matches!(
            engine.handle_input("profile", "nope", "x").unwrap_err(),
            FormError::UnknownField { .. }
        ));
        assert!(engine.clear_validation("nope").is_err());
    }
}
