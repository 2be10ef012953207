mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod popups;
pub use popups::{
    CardInfoPopup, EditAvatarPopup, EditProfilePopup, ImagePopup, NewCardPopup, RemoveCardPopup,
};
