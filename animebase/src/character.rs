use crate::power;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub power_level: f64,
    #[serde(default)]
    pub abilities: Vec<String>,
    /// The title of the series the character belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

impl Character {
    pub fn ranking(&self) -> power::Level {
        power::ranking(self.power_level)
    }

    pub fn has_ability(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.abilities
            .iter()
            .any(|ability| ability.to_lowercase().contains(&query))
    }

    pub fn belongs_to(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.series
            .as_deref()
            .is_some_and(|series| series.to_lowercase().contains(&query))
    }
}

pub fn total_power(characters: &[Character]) -> f64 {
    characters
        .iter()
        .fold(0.0, |total, character| total + character.power_level)
}

/// Returns the first character holding the highest power level.
pub fn most_powerful(characters: &[Character]) -> Option<&Character> {
    characters.iter().reduce(|strongest, current| {
        if current.power_level > strongest.power_level {
            current
        } else {
            strongest
        }
    })
}

/// Sorts by descending power level, keeping the input order among equals.
pub fn sort_by_power(characters: &[Character]) -> Vec<&Character> {
    let mut sorted: Vec<_> = characters.iter().collect();
    sorted.sort_by(|a, b| b.power_level.total_cmp(&a.power_level));
    sorted
}

pub fn by_series<'a>(characters: &'a [Character], series: &str) -> Vec<&'a Character> {
    characters
        .iter()
        .filter(|character| character.belongs_to(series))
        .collect()
}

/// Lists every distinct series in the order it first appears.
pub fn unique_series(characters: &[Character]) -> Vec<&str> {
    let mut seen = BTreeSet::new();

    characters
        .iter()
        .filter_map(|character| character.series.as_deref())
        .filter(|series| seen.insert(*series))
        .collect()
}

pub fn average_power(characters: &[Character]) -> f64 {
    if characters.is_empty() {
        return 0.0;
    }

    (total_power(characters) / characters.len() as f64).round()
}

pub fn with_ability<'a>(characters: &'a [Character], ability: &str) -> Vec<&'a Character> {
    characters
        .iter()
        .filter(|character| character.has_ability(ability))
        .collect()
}
