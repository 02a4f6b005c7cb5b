use crate::sample;
use crate::series;
use crate::{Character, Error, Result, Series};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct Database {
    pub characters: Arc<[Character]>,
    pub series: series::Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Json,
}

impl Format {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        match path.extension().and_then(|extension| extension.to_str()) {
            Some("ron") => Ok(Self::Ron),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    characters: Vec<Character>,
    #[serde(default)]
    series: Vec<Series>,
}

impl Database {
    pub fn new(characters: impl Into<Arc<[Character]>>, series: Vec<Series>) -> Self {
        Self {
            characters: characters.into(),
            series: series::Map::new(series, |series| series.title.clone()),
        }
    }

    pub fn sample() -> Self {
        Self::new(sample::characters(), sample::series().to_vec())
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        use tokio::fs;

        let path = path.as_ref();
        let format = Format::from_path(path)?;

        log::info!("Loading dataset: {}", path.display());
        let contents = fs::read_to_string(path).await?;

        let database = Self::parse(format, &contents)?;

        log::info!(
            "Loaded dataset with {} characters and {} series",
            database.characters.len(),
            database.series.len()
        );

        Ok(database)
    }

    pub fn parse(format: Format, contents: &str) -> Result<Self> {
        let document: Document = match format {
            Format::Ron => ron::from_str(contents)?,
            Format::Json => serde_json::from_str(contents)?,
        };

        Ok(Self::new(document.characters, document.series))
    }

    /// Resolves the series a character belongs to by its exact title.
    pub fn series_of(&self, character: &Character) -> Option<&Series> {
        let title = character.series.as_deref()?;
        let series = self.series.get(title);

        if series.is_none() {
            log::warn!("{} belongs to an unknown series: {title}", character.name);
        }

        series
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("characters", &self.characters.len())
            .field("series", &self.series.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(Format::from_path("data/anime.ron").unwrap(), Format::Ron);
        assert_eq!(Format::from_path("anime.json").unwrap(), Format::Json);
        assert!(matches!(
            Format::from_path("anime.yaml"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            Format::from_path("anime"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn sample_resolves_every_series() {
        let database = Database::sample();

        for character in database.characters.iter() {
            let series = database.series_of(character).expect("series is known");

            assert_eq!(Some(series.title.as_str()), character.series.as_deref());
        }
    }

    #[test]
    fn dangling_series_resolve_to_nothing() {
        let database = Database::sample();
        let character = Character {
            name: "Ichigo Kurosaki".to_owned(),
            age: Some(15),
            power_level: 8800.5,
            abilities: vec!["Getsuga Tenshou".to_owned()],
            series: Some("Bleach".to_owned()),
        };

        assert_eq!(database.series_of(&character), None);
    }

    #[test]
    fn parses_json_documents() {
        let database = Database::parse(
            Format::Json,
            r#"{
                "characters": [
                    { "name": "Luffy", "age": 19, "powerLevel": 9500.75, "abilities": ["Gear Fifth"], "series": "One Piece" }
                ],
                "series": [
                    { "title": "One Piece", "genre": "Adventure", "episodes": 1100, "completed": false, "releaseYear": 1999 }
                ]
            }"#,
        )
        .unwrap();

        let luffy = &database.characters[0];

        assert_eq!(luffy.power_level, 9500.75);
        assert_eq!(
            database.series_of(luffy).and_then(|series| series.release_year),
            Some(1999)
        );
    }

    #[test]
    fn parses_ron_documents() {
        let database = Database::parse(
            Format::Ron,
            r#"(
                characters: [
                    (name: "Saitama", powerLevel: 100000.0),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(database.characters.len(), 1);
        assert!(database.series.is_empty());
        assert_eq!(database.characters[0].series, None);
    }

    #[test]
    fn parses_fractional_power_levels() {
        let database = Database::parse(
            Format::Json,
            r#"{ "characters": [{ "name": "Krillin", "powerLevel": 1999.5, "abilities": [] }] }"#,
        )
        .unwrap();

        let krillin = &database.characters[0];

        assert_eq!(krillin.power_level, 1999.5);
        assert_eq!(krillin.ranking(), crate::power::Level::Weak);

        let database = Database::parse(
            Format::Ron,
            r#"(characters: [(name: "Tien Shinhan", powerLevel: 2000.0)])"#,
        )
        .unwrap();

        assert_eq!(
            database.characters[0].ranking(),
            crate::power::Level::Moderate
        );
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            Database::parse(Format::Json, "{ \"characters\": 3 }"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            Database::parse(Format::Ron, "(characters: ["),
            Err(Error::Ron(_))
        ));
    }
}
