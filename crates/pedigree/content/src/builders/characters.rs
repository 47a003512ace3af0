//! Character name table builder.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Text category holding the full card (costume) names.
pub const CARD_NAME_CATEGORY: u32 = 4;

/// Row of the localized text dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub category: u32,
    pub index: u32,
    pub text: String,
}

/// Row of the card (costume variant) dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Variant id, e.g. `100101`.
    pub id: u32,
    /// Base character id, e.g. `1001`.
    pub chara_id: u32,
}

/// One costume variant and the character family it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub chara_id: u32,
    pub chara_name: String,
    pub chara_id_base: u32,
}

/// Joins card names with their base character ids.
///
/// Only text rows in [`CARD_NAME_CATEGORY`] whose index is a known card id are
/// kept. Output is sorted by variant id.
pub fn build_character_table(texts: &[TextRecord], cards: &[CardRecord]) -> Vec<CharacterEntry> {
    let bases: HashMap<u32, u32> = cards.iter().map(|card| (card.id, card.chara_id)).collect();

    let mut entries: Vec<CharacterEntry> = texts
        .iter()
        .filter(|text| text.category == CARD_NAME_CATEGORY)
        .filter_map(|text| {
            let base = bases.get(&text.index)?;
            Some(CharacterEntry {
                chara_id: text.index,
                chara_name: text.text.clone(),
                chara_id_base: *base,
            })
        })
        .collect();

    entries.sort_by_key(|entry| entry.chara_id);
    entries.dedup_by_key(|entry| entry.chara_id);

    tracing::info!(
        cards = cards.len(),
        characters = entries.len(),
        "built character table"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(category: u32, index: u32, text: &str) -> TextRecord {
        TextRecord {
            category,
            index,
            text: text.to_string(),
        }
    }

    fn card(id: u32, chara_id: u32) -> CardRecord {
        CardRecord { id, chara_id }
    }

    #[test]
    fn keeps_card_names_of_known_cards() {
        let texts = vec![
            text(CARD_NAME_CATEGORY, 100201, "[Silent Innocence] Silence Suzuka"),
            text(CARD_NAME_CATEGORY, 100101, "[Special Dreamer] Special Week"),
            text(CARD_NAME_CATEGORY, 999901, "[Unreleased] Nobody"),
            text(6, 1001, "Special Week"),
        ];
        let cards = vec![card(100101, 1001), card(100201, 1002)];

        let table = build_character_table(&texts, &cards);

        assert_eq!(
            table,
            [
                CharacterEntry {
                    chara_id: 100101,
                    chara_name: "[Special Dreamer] Special Week".to_string(),
                    chara_id_base: 1001,
                },
                CharacterEntry {
                    chara_id: 100201,
                    chara_name: "[Silent Innocence] Silence Suzuka".to_string(),
                    chara_id_base: 1002,
                },
            ]
        );
    }
}
