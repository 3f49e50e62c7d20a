//! Detail overlay content for one card

use crate::components::icons::{ExternalLinkIcon, XIcon};
use crate::components::{Button, ButtonVariant};
use dioxus::prelude::*;
use pokesearch_common::details::{
    attack_line, detail_rows, market_links, price_rows, set_logo, DetailRow,
};
use pokesearch_common::Card;

/// Card details. Sections whose fields are absent are not rendered.
#[component]
pub fn CardDetail(card: Card, on_close: EventHandler<()>) -> Element {
    let rows = detail_rows(&card);
    let prices = price_rows(&card);
    let links = market_links(&card);
    let attacks: Option<Vec<String>> = card
        .attacks
        .as_ref()
        .map(|attacks| attacks.iter().map(attack_line).collect());
    let logo = set_logo(&card).map(str::to_string);
    let set_name = card.set.as_ref().and_then(|s| s.name.clone()).unwrap_or_default();

    rsx! {
        div { class: "text-gray-200",
            div { class: "flex justify-between items-start",
                h2 { class: "text-xl font-bold text-white mb-2", "{card.name}" }
                button {
                    class: "text-gray-400 hover:text-white transition-colors",
                    aria_label: "Fermer",
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-5 h-5" }
                }
            }
            img {
                src: "{card.images.large}",
                alt: "{card.name}",
                class: "w-full h-auto mb-4 rounded-lg",
            }
            if let Some(flavor) = &card.flavor_text {
                p { class: "italic text-gray-400 mb-4", "{flavor}" }
            }
            if !rows.is_empty() {
                RowSection { title: "Détails :", rows }
            }
            if let Some(lines) = attacks {
                div { class: "mb-4",
                    h3 { class: "text-lg font-semibold text-white", "Attaques :" }
                    ul { class: "list-disc list-inside",
                        for line in lines {
                            li { class: "mb-2", "{line}" }
                        }
                    }
                }
            }
            if let Some(logo) = logo {
                div { class: "mb-4",
                    h3 { class: "text-lg font-semibold text-white", "Set :" }
                    img {
                        src: "{logo}",
                        alt: "{set_name} logo",
                        class: "w-32 h-auto",
                    }
                }
            }
            if !prices.is_empty() {
                RowSection { title: "Prix Cardmarket :", rows: prices }
            }
            if !links.is_empty() {
                div { class: "flex gap-4 mb-4",
                    for (label, url) in links {
                        a {
                            class: "inline-flex items-center gap-1 text-indigo-400 hover:text-indigo-300",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{label}"
                            ExternalLinkIcon {}
                        }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Secondary,
                class: "mt-4".to_string(),
                onclick: move |_| on_close.call(()),
                "Fermer"
            }
        }
    }
}

#[component]
fn RowSection(title: &'static str, rows: Vec<DetailRow>) -> Element {
    rsx! {
        div { class: "mb-4",
            h3 { class: "text-lg font-semibold text-white", "{title}" }
            ul { class: "list-disc list-inside",
                for row in rows {
                    li {
                        strong { "{row.label}: " }
                        "{row.value}"
                    }
                }
            }
        }
    }
}
