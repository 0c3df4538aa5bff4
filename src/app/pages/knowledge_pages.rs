use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText};
use crate::app::pages::knowledge_routes::Route;
use crate::domain::models::KnowledgeRouteKey;
use crate::server_fns::{list_knowledge_bases, KnowledgeBaseResponse};
use crate::shared::constants::KNOWLEDGE_DETAILS_NAMESPACE;
use crate::shared::hooks::{use_knowledge_summary, use_translation};

/// Knowledge base list
#[component]
pub fn Home() -> Element {
    let t = use_translation();
    let title = t.t("knowledgeList.title");

    let knowledge_resource = use_server_future(move || async move {
        list_knowledge_bases().await
    })?;

    let body = match &*knowledge_resource.read() {
        Some(Ok(knowledge_bases)) if knowledge_bases.is_empty() => rsx! {
            EmptyState { message: t.t("knowledgeList.empty") }
        },
        Some(Ok(knowledge_bases)) => rsx! {
            div { class: "c-knowledge-list",
                for knowledge in knowledge_bases.iter().cloned() {
                    KnowledgeCard { key: "{knowledge.id}", knowledge: knowledge.clone() }
                }
            }
        },
        Some(Err(e)) => rsx! {
            ErrorMessage { message: e.to_string() }
        },
        None => rsx! {
            LoadingText { message: t.t("common.loading") }
        },
    };

    rsx! {
        h1 { class: "c-section__title", "{title}" }
        {body}
    }
}

#[component]
fn KnowledgeCard(knowledge: KnowledgeBaseResponse) -> Element {
    let t = use_translation();
    let documents = t.t("knowledgeList.documents");
    let count = knowledge.document_count;

    rsx! {
        Link {
            to: Route::Dataset { id: knowledge.id.clone() },
            class: "c-knowledge-card",
            h3 { class: "c-knowledge-card__name", "{knowledge.name}" }
            p { class: "c-knowledge-card__description", "{knowledge.description}" }
            span { class: "c-knowledge-card__meta", "{count} {documents}" }
        }
    }
}

/// Header shared by the section pages
#[component]
fn SectionPage(section: KnowledgeRouteKey, id: String) -> Element {
    let t = use_translation();
    let summary = use_knowledge_summary(id);

    let title = t.t(&format!("{}.{}", KNOWLEDGE_DETAILS_NAMESPACE, section.as_str()));
    let description = t.t(&format!("{}.{}Description", KNOWLEDGE_DETAILS_NAMESPACE, section.as_str()));

    rsx! {
        div { class: "c-section",
            h1 { class: "c-section__title", "{title}" }
            p { class: "c-section__subtitle", "{summary.name}" }
            p { class: "c-section__description", "{description}" }
        }
    }
}

#[component]
pub fn Dataset(id: String) -> Element {
    rsx! { SectionPage { section: KnowledgeRouteKey::Dataset, id } }
}

#[component]
pub fn Configuration(id: String) -> Element {
    rsx! { SectionPage { section: KnowledgeRouteKey::Configuration, id } }
}

#[component]
pub fn Testing(id: String) -> Element {
    rsx! { SectionPage { section: KnowledgeRouteKey::Testing, id } }
}

/// Retrieval testing reached outside the `/knowledge` pages
#[component]
pub fn Retrievability(id: String) -> Element {
    rsx! { SectionPage { section: KnowledgeRouteKey::Testing, id } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let t = use_translation();
    let message = t.t("common.notFound");
    let path = segments.join("/");

    rsx! {
        div { class: "c-empty",
            h1 { "{message}" }
            p { class: "c-empty__text", "/{path}" }
            Link { to: Route::Home {}, "←" }
        }
    }
}
