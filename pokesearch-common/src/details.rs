//! Display rows derived from a card's optional fields.
//!
//! A row exists only when its source field is present on the card.

use crate::card::{Attack, Card};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

fn joined(items: &[String]) -> String {
    items.join(", ")
}

/// Rows of the "Détails" section, in display order.
pub fn detail_rows(card: &Card) -> Vec<DetailRow> {
    let mut rows = Vec::new();

    if let Some(hp) = &card.hp {
        rows.push(DetailRow::new("HP", hp.clone()));
    }
    if let Some(types) = &card.types {
        rows.push(DetailRow::new("Types", joined(types)));
    }
    if let Some(supertype) = &card.supertype {
        rows.push(DetailRow::new("Supertype", supertype.clone()));
    }
    if let Some(subtypes) = &card.subtypes {
        rows.push(DetailRow::new("Subtypes", joined(subtypes)));
    }
    if let Some(level) = &card.level {
        rows.push(DetailRow::new("Niveau", level.clone()));
    }
    if let Some(weaknesses) = &card.weaknesses {
        let value = weaknesses
            .iter()
            .map(|w| match (w.kind.as_str(), w.value.as_str()) {
                (kind, "") => kind.to_string(),
                ("", value) => value.to_string(),
                (kind, value) => format!("{kind} ({value})"),
            })
            .collect::<Vec<_>>()
            .join(", ");
        rows.push(DetailRow::new("Faiblesses", value));
    }
    if let Some(retreat) = &card.retreat_cost {
        let value = match card.converted_retreat_cost {
            Some(converted) => format!("{} ({converted})", joined(retreat)),
            None => joined(retreat),
        };
        rows.push(DetailRow::new("Coût de retraite", value));
    }
    if let Some(evolves_to) = &card.evolves_to {
        rows.push(DetailRow::new("Évolue en", joined(evolves_to)));
    }
    if let Some(set_name) = card.set.as_ref().and_then(|s| s.name.as_ref()) {
        let release = card.set.as_ref().and_then(|s| s.release_date.as_ref());
        let value = match release {
            Some(date) => format!("{set_name} ({date})"),
            None => set_name.clone(),
        };
        rows.push(DetailRow::new("Set", value));
    }
    if let Some(number) = &card.number {
        let printed_total = card.set.as_ref().and_then(|s| s.printed_total);
        let value = match printed_total {
            Some(total) => format!("{number}/{total}"),
            None => number.clone(),
        };
        rows.push(DetailRow::new("Numéro", value));
    }
    if let Some(rarity) = &card.rarity {
        rows.push(DetailRow::new("Rareté", rarity.clone()));
    }
    if let Some(artist) = &card.artist {
        rows.push(DetailRow::new("Artiste", artist.clone()));
    }
    if let Some(numbers) = &card.national_pokedex_numbers {
        let value = numbers
            .iter()
            .map(|n| format!("#{n}"))
            .collect::<Vec<_>>()
            .join(", ");
        rows.push(DetailRow::new("N° Pokédex", value));
    }

    rows
}

/// Attack line for the detail overlay, e.g. `Gnaw (Colorless - 1 CC) : Flip a coin. (10 dmg)`
pub fn attack_line(attack: &Attack) -> String {
    let converted = attack
        .converted_energy_cost
        .unwrap_or(attack.cost.len() as u32);
    let mut line = format!(
        "{} ({} - {converted} CC) : {}",
        attack.name,
        joined(&attack.cost),
        attack.text
    );
    let trimmed_len = line.trim_end().len();
    line.truncate(trimmed_len);
    if !attack.damage.is_empty() {
        line.push_str(&format!(" ({} dmg)", attack.damage));
    }
    line
}

/// Shorter attack line for the back of a result tile
pub fn tile_attack_line(attack: &Attack) -> String {
    let damage = if attack.damage.is_empty() {
        "Aucun dégât".to_string()
    } else {
        format!("{} dmg", attack.damage)
    };
    if attack.text.is_empty() {
        format!("{} ({damage})", attack.name)
    } else {
        format!("{} : {} ({damage})", attack.name, attack.text)
    }
}

/// Cardmarket price rows that are present
pub fn price_rows(card: &Card) -> Vec<DetailRow> {
    let Some(prices) = card.cardmarket.as_ref().and_then(|m| m.prices.as_ref()) else {
        return Vec::new();
    };
    [
        ("Prix moyen de vente", prices.average_sell_price),
        ("Prix bas", prices.low_price),
        ("Tendance des prix", prices.trend_price),
    ]
    .into_iter()
    .filter_map(|(label, price)| price.map(|p| DetailRow::new(label, format!("${p:.2}"))))
    .collect()
}

pub fn set_logo(card: &Card) -> Option<&str> {
    card.set
        .as_ref()
        .and_then(|s| s.images.as_ref())
        .and_then(|i| i.logo.as_deref())
}

/// (label, url) for each marketplace the card links to
pub fn market_links(card: &Card) -> Vec<(&'static str, String)> {
    let mut links = Vec::new();
    if let Some(url) = card.cardmarket.as_ref().and_then(|m| m.url.clone()) {
        links.push(("Cardmarket", url));
    }
    if let Some(url) = card.tcgplayer.as_ref().and_then(|t| t.url.clone()) {
        links.push(("TCGplayer", url));
    }
    links
}
