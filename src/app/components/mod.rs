pub mod common;
pub mod icons;
pub mod language_toggle;
pub mod menu;

pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use icons::MenuIconView;
pub use language_toggle::LanguageToggle;
pub use menu::Menu;
