use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SearchError;

/// One card as returned by the Pokémon TCG API.
///
/// Only `id`, `name` and `images` are guaranteed. Everything else may be
/// missing from the payload and is modelled as `Option` so that absence
/// stays distinguishable from an empty value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub images: CardImages,
    pub supertype: Option<String>,
    pub subtypes: Option<Vec<String>>,
    pub level: Option<String>,
    pub hp: Option<String>,
    pub types: Option<Vec<String>>,
    pub evolves_to: Option<Vec<String>>,
    pub attacks: Option<Vec<Attack>>,
    pub weaknesses: Option<Vec<Weakness>>,
    pub retreat_cost: Option<Vec<String>>,
    pub converted_retreat_cost: Option<u32>,
    pub set: Option<CardSet>,
    pub number: Option<String>,
    pub artist: Option<String>,
    pub rarity: Option<String>,
    pub flavor_text: Option<String>,
    pub national_pokedex_numbers: Option<Vec<u32>>,
    pub legalities: Option<Legalities>,
    pub tcgplayer: Option<TcgPlayer>,
    pub cardmarket: Option<CardMarket>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardImages {
    pub small: String,
    pub large: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cost: Vec<String>,
    pub converted_energy_cost: Option<u32>,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Weakness {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: String,
}

/// Format name (`unlimited`, `standard`, ...) to legality status.
pub type Legalities = BTreeMap<String, String>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub id: Option<String>,
    pub name: Option<String>,
    pub series: Option<String>,
    pub printed_total: Option<u32>,
    pub total: Option<u32>,
    pub legalities: Option<Legalities>,
    pub ptcgo_code: Option<String>,
    pub release_date: Option<String>,
    pub updated_at: Option<String>,
    pub images: Option<SetImages>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetImages {
    pub symbol: Option<String>,
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TcgPlayer {
    pub url: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardMarket {
    pub url: Option<String>,
    pub updated_at: Option<String>,
    pub prices: Option<CardMarketPrices>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardMarketPrices {
    pub average_sell_price: Option<f64>,
    pub low_price: Option<f64>,
    pub trend_price: Option<f64>,
}

/// Response envelope of `GET /cards`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardPage {
    pub data: Vec<Card>,
    pub total_count: u32,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub count: Option<u32>,
}

impl CardPage {
    /// Decode a `/cards` response body.
    pub fn from_json(body: &[u8]) -> Result<Self, SearchError> {
        serde_json::from_slice(body).map_err(|e| SearchError::Decode(e.to_string()))
    }
}
