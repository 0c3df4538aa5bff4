use crate::app::layouts::{AppNavbar, KnowledgeSidebar};
use crate::app::pages::{Configuration, Dataset, Home, NotFound, Retrievability, Testing};
use crate::domain::models::KnowledgeRouteKey;
use crate::shared::hooks::use_language_provider;

use dioxus::prelude::*;
use dioxus::document;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Knowledge base list
    #[route("/")]
    Home {},

    // Pages with the knowledge sidebar
    #[layout(KnowledgeLayout)]
        #[route("/knowledge/dataset?:id")]
        Dataset { id: String },
        #[route("/knowledge/configuration?:id")]
        Configuration { id: String },
        #[route("/knowledge/testing?:id")]
        Testing { id: String },
        #[route("/retrievability/testing?:id")]
        Retrievability { id: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Section page `key` of knowledge base `id`
    pub fn knowledge(key: KnowledgeRouteKey, id: impl Into<String>) -> Self {
        let id = id.into();
        match key {
            KnowledgeRouteKey::Dataset => Route::Dataset { id },
            KnowledgeRouteKey::Configuration => Route::Configuration { id },
            KnowledgeRouteKey::Testing => Route::Testing { id },
        }
    }

    /// Knowledge base id carried by the route, if any
    pub fn knowledge_id(&self) -> Option<&str> {
        match self {
            Route::Dataset { id }
            | Route::Configuration { id }
            | Route::Testing { id }
            | Route::Retrievability { id } => Some(id.as_str()),
            Route::Home {} | Route::NotFound { .. } => None,
        }
    }
}

#[component]
pub fn App() -> Element {
    use_language_provider();

    use_effect(|| {
        tracing::info!("Knowledge console initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            AppNavbar {}
            div { class: "c-layout__body",
                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Knowledge sidebar next to the selected section
#[component]
fn KnowledgeLayout() -> Element {
    rsx! {
        div { class: "c-knowledge-layout",
            KnowledgeSidebar {}
            section { class: "c-knowledge-layout__content",
                Outlet::<Route> {}
            }
        }
    }
}
