use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use model::{AppConfig, ValidationConfig, ValidationEngine};
use ui::{PageProvider, PageSetup};
use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// `mesto.toml`, compiled in.
const CONFIG: &str = include_str!("../mesto.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");

    let setup = load_setup();
    tracing::info!(endpoint = %setup.config.api.endpoint(), "starting Mesto");

    dioxus::LaunchBuilder::new().with_context(setup).launch(App);
}

/// Read the bundled configuration and bind the page forms to it.
fn load_setup() -> PageSetup {
    let setup = setup_from(CONFIG);
    match option_env!("MESTO_TOKEN") {
        Some(token) => PageSetup {
            config: setup.config.with_token(token),
            forms: setup.forms,
        },
        None => setup,
    }
}

/// Neither step is fatal: a config that does not load falls back to the
/// defaults, and forms that fail to bind are bound again with the default
/// selectors, so the fields stay on the page either way.
fn setup_from(text: &str) -> PageSetup {
    let config = AppConfig::from_toml(text).unwrap_or_else(|e| {
        tracing::error!("Failed to load {}: {}", AppConfig::filename(), e);
        AppConfig::default()
    });

    let forms = ValidationEngine::enable_validation(
        config.validation.clone(),
        ui::page_forms(&config.validation),
    )
    .or_else(|e| {
        tracing::error!("Failed to enable form validation: {}", e);
        let defaults = ValidationConfig::default();
        let markup = ui::page_forms(&defaults);
        ValidationEngine::enable_validation(defaults, markup)
    })
    .unwrap_or_else(|e| {
        tracing::error!("Page forms do not bind with the default selectors: {}", e);
        ValidationEngine::default()
    });

    PageSetup { config, forms }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::PAGE_CSS }
        document::Link { rel: "stylesheet", href: ui::CARD_CSS }
        document::Link { rel: "stylesheet", href: ui::POPUP_CSS }

        PageProvider {
            Router::<Route> {}
        }
    }
}

/// Unknown paths go back to the page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "unknown route");
    nav.replace(Route::Home {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_binds_every_form() {
        let setup = load_setup();
        assert_eq!(setup.config.validation, ValidationConfig::default());
        assert_eq!(setup.config.modal.opened_class, "popup_is-opened");
        assert_eq!(setup.forms.forms().len(), 4);
    }

    #[test]
    fn test_id_form_selector_falls_back_to_default_config() {
        let setup = setup_from("[validation]\nformSelector = \"#edit-profile\"\n");
        assert_eq!(setup.config, AppConfig::default());
        assert_eq!(setup.forms.forms().len(), 4);
        assert!(setup.forms.form(ui::forms::PROFILE_FORM).is_some());
    }
}
