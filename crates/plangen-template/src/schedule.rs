//! The weekly-plan grid: five days crossed with five content categories
//!
//! Both sets are closed enums rather than free-form strings, so the
//! invariant "all 25 grid keys exist in the flattened output" is enforced
//! by construction, not by convention.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A weekday of the plan grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    Pazartesi,
    Sali,
    Carsamba,
    Persembe,
    Cuma,
}

impl Day {
    /// All days, in grid order
    pub const ALL: [Day; 5] = [
        Day::Pazartesi,
        Day::Sali,
        Day::Carsamba,
        Day::Persembe,
        Day::Cuma,
    ];

    /// Wire name of the day (lowercase, ASCII)
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Day::Pazartesi => "pazartesi",
            Day::Sali => "sali",
            Day::Carsamba => "carsamba",
            Day::Persembe => "persembe",
            Day::Cuma => "cuma",
        }
    }

    /// Template variable key for a (day, category) grid cell
    ///
    /// Total over both closed sets, so the full 25-key namespace is
    /// derivable without any caller input.
    #[inline]
    #[must_use]
    pub fn key(self, category: Category) -> String {
        format!("{}.{}", self.as_str(), category.as_str())
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// A content category within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Genel,
    Kuran,
    DiniBilgiler,
    DegerlerEgitimi,
    TamamlayiciKazanim,
}

impl Category {
    /// All categories, in grid order
    pub const ALL: [Category; 5] = [
        Category::Genel,
        Category::Kuran,
        Category::DiniBilgiler,
        Category::DegerlerEgitimi,
        Category::TamamlayiciKazanim,
    ];

    /// Wire name of the category
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Genel => "genel",
            Category::Kuran => "kuran",
            Category::DiniBilgiler => "dini_bilgiler",
            Category::DegerlerEgitimi => "degerler_egitimi",
            Category::TamamlayiciKazanim => "tamamlayici_kazanim",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Name outside the closed day/category sets
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown schedule name: '{0}'")]
pub struct UnknownName(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_exactly_25_cells() {
        let mut keys = Vec::new();
        for day in Day::ALL {
            for category in Category::ALL {
                keys.push(day.key(category));
            }
        }
        assert_eq!(keys.len(), 25);
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 25, "grid keys must be distinct");
    }

    #[test]
    fn key_is_dot_joined_wire_names() {
        assert_eq!(Day::Pazartesi.key(Category::Genel), "pazartesi.genel");
        assert_eq!(
            Day::Cuma.key(Category::TamamlayiciKazanim),
            "cuma.tamamlayici_kazanim"
        );
    }

    #[test]
    fn round_trips_through_wire_names() {
        for day in Day::ALL {
            assert_eq!(day.as_str().parse::<Day>().unwrap(), day);
        }
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("cumartesi".parse::<Day>().is_err());
    }
}
