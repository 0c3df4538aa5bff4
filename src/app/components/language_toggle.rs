use dioxus::prelude::*;
use crate::shared::hooks::{save_language, use_language};

/// Switches the UI between English and Chinese and remembers the choice
#[component]
pub fn LanguageToggle() -> Element {
    let mut language = use_language();
    let label = language().toggle().display_name();

    rsx! {
        button {
            class: "c-navbar__lang",
            r#type: "button",
            title: "{label}",
            onclick: move |_| {
                let next = language().toggle();
                language.set(next);
                save_language(next);
            },
            "{label}"
        }
    }
}
