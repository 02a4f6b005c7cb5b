use animebase::{Character, Series};

pub fn characters<'a>(characters: impl IntoIterator<Item = &'a Character>) {
    let mut characters = characters.into_iter().peekable();

    if characters.peek().is_none() {
        println!("none");
        return;
    }

    for character in characters {
        println!("{}", format_character(character));
    }
}

pub fn character(character: Option<&Character>) {
    characters(character);
}

pub fn series<'a>(series: impl IntoIterator<Item = &'a Series>) {
    let mut series = series.into_iter().peekable();

    if series.peek().is_none() {
        println!("none");
        return;
    }

    for series in series {
        println!("{}", format_series(series));
    }
}

pub fn single_series(series: Option<&Series>) {
    self::series(series);
}

fn format_character(character: &Character) -> String {
    let mut line = format!(
        "{name} ({power}, {ranking})",
        name = character.name,
        power = character.power_level,
        ranking = character.ranking(),
    );

    if let Some(series) = &character.series {
        line.push_str(&format!(" [{series}]"));
    }

    if !character.abilities.is_empty() {
        line.push_str(&format!(": {}", character.abilities.join(", ")));
    }

    line
}

fn format_series(series: &Series) -> String {
    format!(
        "{title} ({genre}, {episodes} episodes, {status}{year})",
        title = series.title,
        genre = series.genre,
        episodes = series.episodes,
        status = if series.completed {
            "completed"
        } else {
            "ongoing"
        },
        year = series
            .release_year
            .map(|year| format!(", {year}"))
            .unwrap_or_default(),
    )
}
