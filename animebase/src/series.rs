use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub title: String,
    pub genre: String,
    pub episodes: u32,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
}

pub type Map = crate::Map<String, Series>;

pub fn completed(series: &[Series]) -> Vec<&Series> {
    series.iter().filter(|series| series.completed).collect()
}

pub fn average_episodes(series: &[Series]) -> u32 {
    if series.is_empty() {
        return 0;
    }

    let total: u64 = series.iter().map(|series| u64::from(series.episodes)).sum();

    (total as f64 / series.len() as f64).round() as u32
}

pub fn by_genre<'a>(series: &'a [Series], genre: &str) -> Vec<&'a Series> {
    let genre = genre.to_lowercase();

    series
        .iter()
        .filter(|series| series.genre.to_lowercase().contains(&genre))
        .collect()
}

/// Returns the first series with the most episodes.
pub fn longest(series: &[Series]) -> Option<&Series> {
    series.iter().reduce(|longest, current| {
        if current.episodes > longest.episodes {
            current
        } else {
            longest
        }
    })
}
