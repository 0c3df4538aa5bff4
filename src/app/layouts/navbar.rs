use dioxus::prelude::*;

use crate::app::components::LanguageToggle;
use crate::app::pages::knowledge_routes::Route;
use crate::shared::hooks::use_translation;

/// Global navbar with logo and language toggle
#[component]
pub fn AppNavbar() -> Element {
    let t = use_translation();
    let title = t.t("common.home");

    rsx! {
        nav { class: "c-navbar",
            Link {
                to: Route::Home {},
                class: "c-navbar__logo",
                "📚 {title}"
            }
            div { class: "c-navbar__actions",
                LanguageToggle {}
            }
        }
    }
}
