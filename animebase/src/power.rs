use serde::{Deserialize, Serialize};

use std::fmt;

/// The qualitative band of a power level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Weak,
    Moderate,
    Strong,
    Legendary,
    Godlike,
}

impl Level {
    pub const ALL: [Self; 5] = [
        Self::Weak,
        Self::Moderate,
        Self::Strong,
        Self::Legendary,
        Self::Godlike,
    ];

    /// Bands are inclusive on their lower bound.
    pub fn from_power(power: f64) -> Self {
        if power >= 10_000.0 {
            Self::Godlike
        } else if power >= 8_000.0 {
            Self::Legendary
        } else if power >= 5_000.0 {
            Self::Strong
        } else if power >= 2_000.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::Legendary => "legendary",
            Self::Godlike => "godlike",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn ranking(power: f64) -> Level {
    Level::from_power(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(ranking(0.0), Level::Weak);
        assert_eq!(ranking(1_999.0), Level::Weak);
        assert_eq!(ranking(2_000.0), Level::Moderate);
        assert_eq!(ranking(4_999.0), Level::Moderate);
        assert_eq!(ranking(5_000.0), Level::Strong);
        assert_eq!(ranking(7_999.0), Level::Strong);
        assert_eq!(ranking(8_000.0), Level::Legendary);
        assert_eq!(ranking(9_999.0), Level::Legendary);
        assert_eq!(ranking(10_000.0), Level::Godlike);
        assert_eq!(ranking(f64::MAX), Level::Godlike);
    }

    #[test]
    fn fractional_powers_stay_below_the_boundary() {
        assert_eq!(ranking(1_999.5), Level::Weak);
        assert_eq!(ranking(1_999.999), Level::Weak);
        assert_eq!(ranking(2_000.0), Level::Moderate);
        assert_eq!(ranking(9_999.9), Level::Legendary);
        assert_eq!(ranking(10_000.1), Level::Godlike);
    }

    #[test]
    fn ranking_is_monotonic() {
        let mut previous = Level::Weak;

        for step in 0_u32..=480 {
            let power = f64::from(step) * 25.5;
            let level = ranking(power);

            assert!(level >= previous, "{power} ranked below {previous}");
            previous = level;
        }
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Level::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn display_uses_lowercase_names() {
        let names: Vec<String> = Level::ALL.iter().map(ToString::to_string).collect();

        assert_eq!(
            names,
            ["weak", "moderate", "strong", "legendary", "godlike"]
        );
    }

    #[test]
    fn serializes_as_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Level::Legendary).unwrap(),
            "\"legendary\""
        );
        assert_eq!(
            serde_json::from_str::<Level>("\"godlike\"").unwrap(),
            Level::Godlike
        );
    }
}
