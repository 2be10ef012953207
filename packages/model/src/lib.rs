//! Framework-free state for the Mesto front-end.
//!
//! Everything in this crate is plain Rust with no DOM or Dioxus dependency, so
//! the behaviour the UI relies on (form validation, overlay lifecycle, card
//! presentation) can be unit-tested natively. The `ui` crate holds these types
//! in signals and renders them.

pub mod card;
pub mod classes;
pub mod config;
pub mod constraints;
pub mod modal;
pub mod models;
pub mod session;
pub mod submit;
pub mod validation;

pub use card::{delete_card, format_date, CardInfo, CardList, CardPresentation, ImagePreview};
pub use classes::ClassList;
pub use config::{ApiConfig, AppConfig, ConfigError, ModalConfig, Selector, ValidationConfig};
pub use constraints::{Constraints, InputKind, Pattern, ValidityState};
pub use modal::{ClickTarget, ModalController, ModalState, Subscription};
pub use models::{
    AvatarUpdate, Card, DeleteConfirmation, NewCard, ProfileUpdate, UserProfile, UserRef,
};
pub use session::Session;
pub use submit::SubmitGuard;
pub use validation::{
    BindError, ElementMarkup, ErrorSlot, FieldValidity, FormError, FormMarkup, InputElement,
    InputMarkup, ManagedForm, SubmitControl, ValidationEngine,
};
