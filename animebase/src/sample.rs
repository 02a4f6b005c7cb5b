//! The built-in sample dataset.
use crate::{Character, Series};

use std::sync::LazyLock;

pub fn characters() -> &'static [Character] {
    static CHARACTERS: LazyLock<Vec<Character>> = LazyLock::new(|| {
        vec![
            new_character(
                "Son Goku",
                30,
                9000.0,
                ["Kamehameha", "Super Saiyan", "Instant Transmission"],
                "Dragon Ball",
            ),
            new_character(
                "Vegeta",
                32,
                8500.0,
                ["Final Flash", "Super Saiyan", "Galick Gun"],
                "Dragon Ball",
            ),
            new_character(
                "Naruto Uzumaki",
                17,
                7500.0,
                ["Rasengan", "Shadow Clone Jutsu", "Sage Mode"],
                "Naruto",
            ),
            new_character(
                "Sasuke Uchiha",
                17,
                8000.0,
                ["Chidori", "Sharingan", "Rinnegan"],
                "Naruto",
            ),
        ]
    });

    &CHARACTERS
}

pub fn series() -> &'static [Series] {
    static SERIES: LazyLock<Vec<Series>> = LazyLock::new(|| {
        vec![
            new_series("Dragon Ball", "Action", 153, true, 1986),
            new_series("Naruto", "Action", 220, true, 2002),
            new_series("One Piece", "Adventure", 1100, false, 1999),
        ]
    });

    &SERIES
}

fn new_character<const N: usize>(
    name: &str,
    age: u32,
    power_level: f64,
    abilities: [&str; N],
    series: &str,
) -> Character {
    Character {
        name: name.to_owned(),
        age: Some(age),
        power_level,
        abilities: abilities.into_iter().map(str::to_owned).collect(),
        series: Some(series.to_owned()),
    }
}

fn new_series(
    title: &str,
    genre: &str,
    episodes: u32,
    completed: bool,
    release_year: i32,
) -> Series {
    Series {
        title: title.to_owned(),
        genre: genre.to_owned(),
        episodes,
        completed,
        release_year: Some(release_year),
    }
}
