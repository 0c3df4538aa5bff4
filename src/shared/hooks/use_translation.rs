use dioxus::prelude::*;

use crate::shared::i18n::{Language, Translator};

/// Provide the UI language to the component tree.
/// Call once near the root; loads the saved language from localStorage on mount.
pub fn use_language_provider() -> Signal<Language> {
    let language = use_context_provider(|| Signal::new(Language::default()));

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let mut language = language;
        if let Some(saved) = load_language() {
            if saved != *language.peek() {
                language.set(saved);
            }
        }
    });

    language
}

/// Current language signal (English when no provider is mounted)
pub fn use_language() -> Signal<Language> {
    let fallback = use_signal(Language::default);
    try_use_context::<Signal<Language>>().unwrap_or(fallback)
}

/// Translator for the current language; re-renders when the language changes
pub fn use_translation() -> Translator {
    let language = use_language();
    Translator::new(language())
}

#[cfg(target_arch = "wasm32")]
fn load_language() -> Option<Language> {
    use crate::shared::constants::LANGUAGE_STORAGE_KEY;

    let storage = web_sys::window()?.local_storage().ok()??;
    let saved = storage.get_item(LANGUAGE_STORAGE_KEY).ok()??;
    saved.parse::<Language>().ok()
}

/// Save language to localStorage
#[cfg(target_arch = "wasm32")]
pub fn save_language(language: Language) {
    use crate::shared::constants::LANGUAGE_STORAGE_KEY;

    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_language(_language: Language) {
    // No-op on server
}
