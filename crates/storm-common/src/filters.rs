//! Storm catalogue filtering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::category::Basin;
use crate::storm::Storm;

/// User-selected storm filters. Unset fields match every storm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StormFilters {
    /// Case-insensitive substring of the storm name.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub basin: Option<Basin>,
}

impl StormFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_basin(mut self, basin: Basin) -> Self {
        self.basin = Some(basin);
        self
    }

    /// No filter is set.
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty) && self.year.is_none() && self.basin.is_none()
    }

    /// Check a storm against every set filter.
    pub fn matches(&self, storm: &Storm) -> bool {
        if let Some(year) = self.year {
            if storm.year() != year {
                return false;
            }
        }
        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() && !contains_ignore_case(storm.name(), name) {
                return false;
            }
        }
        if let Some(basin) = &self.basin {
            if storm.basin() != basin {
                return false;
            }
        }
        true
    }

    /// Storms that pass the filters, in input order.
    pub fn apply<'a>(&self, storms: &'a [Storm]) -> Vec<&'a Storm> {
        storms.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Unique storm names, sorted ascending.
pub fn unique_storm_names(storms: &[Storm]) -> Vec<String> {
    storms
        .iter()
        .map(|s| s.name().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Unique storm years, newest first.
pub fn unique_years(storms: &[Storm]) -> Vec<i32> {
    storms
        .iter()
        .map(Storm::year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Names containing `term`, ignoring case. An empty term keeps every name.
pub fn filter_storm_names<'a>(names: &'a [String], term: &str) -> Vec<&'a str> {
    names
        .iter()
        .map(String::as_str)
        .filter(|name| term.is_empty() || contains_ignore_case(name, term))
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storm::{StormMetadata, TrackPoint};

    fn storm(name: &str, year: i32, basin: Basin) -> Storm {
        Storm::new(
            StormMetadata::new(name, year, basin),
            vec![TrackPoint::at(20.0, -70.0)],
        )
    }

    fn catalogue() -> Vec<Storm> {
        vec![
            storm("KATRINA", 2005, Basin::NorthAtlantic),
            storm("ANDREW", 1992, Basin::NorthAtlantic),
            storm("HAIYAN", 2013, Basin::WestPacific),
            storm("KATRINA", 1981, Basin::EastPacific),
        ]
    }

    #[test]
    fn test_unique_names_sorted() {
        assert_eq!(
            unique_storm_names(&catalogue()),
            vec!["ANDREW", "HAIYAN", "KATRINA"]
        );
    }

    #[test]
    fn test_unique_years_newest_first() {
        assert_eq!(unique_years(&catalogue()), vec![2013, 2005, 1992, 1981]);
    }

    #[test]
    fn test_filter_names() {
        let names = unique_storm_names(&catalogue());
        assert_eq!(filter_storm_names(&names, "kat"), vec!["KATRINA"]);
        assert_eq!(filter_storm_names(&names, "").len(), 3);
        assert!(filter_storm_names(&names, "zeta").is_empty());
    }

    #[test]
    fn test_empty_filters_match_all() {
        let filters = StormFilters::new();
        assert!(filters.is_empty());
        assert_eq!(filters.apply(&catalogue()).len(), 4);
        assert!(StormFilters::new().with_name("").is_empty());
    }

    #[test]
    fn test_combined_filters() {
        let storms = catalogue();
        let by_name = StormFilters::new().with_name("katrina");
        assert_eq!(by_name.apply(&storms).len(), 2);

        let by_name_and_basin = by_name.clone().with_basin(Basin::NorthAtlantic);
        let hits = by_name_and_basin.apply(&storms);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].year(), 2005);

        let by_year = StormFilters::new().with_year(2013);
        assert_eq!(by_year.apply(&storms)[0].name(), "HAIYAN");
    }
}
