//! Result tile - pure view with callbacks
//!
//! The front shows the card art. Hovering flips the tile to a back face
//! with the name and attacks (flip styles live in the app's `main.css`).

use dioxus::prelude::*;
use pokesearch_common::details::tile_attack_line;
use pokesearch_common::Card;

#[component]
pub fn CardTile(card: Card, on_click: EventHandler<Card>) -> Element {
    let name = card.name.clone();
    let image = card.images.large.clone();
    let attack_lines: Option<Vec<String>> = card
        .attacks
        .as_ref()
        .map(|attacks| attacks.iter().map(tile_attack_line).collect());

    rsx! {
        div {
            class: "card-perspective relative cursor-pointer",
            "data-testid": "card-tile",
            onclick: move |_| on_click.call(card.clone()),
            div { class: "card-flip-inner relative w-full h-[400px]",
                div { class: "card-face",
                    img {
                        src: "{image}",
                        alt: "{name}",
                        loading: "lazy",
                        class: "w-full h-full object-cover rounded-lg",
                    }
                }
                div { class: "card-face card-face-back bg-gray-800 text-white p-4 rounded-lg overflow-y-auto",
                    h2 { class: "text-lg font-bold mb-2", "{name}" }
                    h3 { class: "font-semibold", "Attaques :" }
                    ul { class: "list-disc list-inside text-sm text-gray-300",
                        match attack_lines {
                            Some(lines) => rsx! {
                                for line in lines {
                                    li { "{line}" }
                                }
                            },
                            None => rsx! {
                                li { "Aucune attaque disponible." }
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Grid of result tiles
#[component]
pub fn CardGrid(cards: Vec<Card>, on_card_click: EventHandler<Card>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-4",
            for card in cards {
                CardTile { key: "{card.id}", card: card.clone(), on_click: on_card_click }
            }
        }
    }
}
