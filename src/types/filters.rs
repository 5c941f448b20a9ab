// src/types/filters.rs
//! Search filters collected from the user, plus the option catalogs for the constrained fields

use serde::{Deserialize, Serialize};

/// One selectable value of a constrained filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

pub const EDUCATION_OPTIONS: &[FilterOption] = &[
    opt("", "Other"),
    opt("be", "BE"),
    opt("btech", "BTech"),
    opt("me", "ME"),
    opt("mba", "MBA"),
    opt("bba", "BBA"),
    opt("bsc", "BSc"),
    opt("msc", "MSc"),
];

pub const MODE_OPTIONS: &[FilterOption] = &[
    opt("", "Hybrid"),
    opt("full_time", "Full Time"),
    opt("part_time", "Part Time"),
];

pub const DURATION_OPTIONS: &[FilterOption] = &[
    opt("", "No Preference"),
    opt("1 month", "1 Month"),
    opt("2 months", "2 Months"),
    opt("3 months", "3 Months"),
    opt("6 months", "6 Months"),
];

pub const SECTOR_OPTIONS: &[FilterOption] = &[
    opt("", "Select sector"),
    opt("it", "Information Technology"),
    opt("marketing", "Marketing"),
    opt("finance", "Finance"),
    opt("design", "Design / UI-UX"),
    opt("data", "Data & Analytics"),
    opt("management", "Management"),
    opt("education", "Education"),
    opt("engineering", "Engineering"),
];

/// Addressable slots of a [`FilterSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Query,
    Location,
    Education,
    Skills,
    Stipend,
    Mode,
    Duration,
    Sector,
}

impl FilterField {
    pub const ALL: [FilterField; 8] = [
        FilterField::Query,
        FilterField::Location,
        FilterField::Education,
        FilterField::Skills,
        FilterField::Stipend,
        FilterField::Mode,
        FilterField::Duration,
        FilterField::Sector,
    ];

    /// Form label shown next to the field
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Query => "Search",
            FilterField::Location => "Location",
            FilterField::Education => "Qualification",
            FilterField::Skills => "Skills",
            FilterField::Stipend => "Stipend",
            FilterField::Mode => "Mode of Work",
            FilterField::Duration => "Internship Duration",
            FilterField::Sector => "Sector of Interest",
        }
    }

    /// Fixed value domain, or `None` for free-text fields
    pub fn options(self) -> Option<&'static [FilterOption]> {
        match self {
            FilterField::Education => Some(EDUCATION_OPTIONS),
            FilterField::Mode => Some(MODE_OPTIONS),
            FilterField::Duration => Some(DURATION_OPTIONS),
            FilterField::Sector => Some(SECTOR_OPTIONS),
            _ => None,
        }
    }

    /// Check a value against the field's catalog. Free-text fields accept anything.
    pub fn accepts(self, value: &str) -> bool {
        match self.options() {
            Some(options) => options.iter().any(|o| o.value == value),
            None => true,
        }
    }
}

/// Current values of every filter. An empty string means "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub query: String,
    pub location: String,
    pub education: String,
    pub skills: String,
    pub stipend: String,
    pub mode: String,
    pub duration: String,
    pub sector: String,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Query => &self.query,
            FilterField::Location => &self.location,
            FilterField::Education => &self.education,
            FilterField::Skills => &self.skills,
            FilterField::Stipend => &self.stipend,
            FilterField::Mode => &self.mode,
            FilterField::Duration => &self.duration,
            FilterField::Sector => &self.sector,
        }
    }

    /// Overwrite a single slot. No validation, no effect on other fields.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Query => &mut self.query,
            FilterField::Location => &mut self.location,
            FilterField::Education => &mut self.education,
            FilterField::Skills => &mut self.skills,
            FilterField::Stipend => &mut self.stipend,
            FilterField::Mode => &mut self.mode,
            FilterField::Duration => &mut self.duration,
            FilterField::Sector => &mut self.sector,
        };
        *slot = value.into();
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = education.into();
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = skills.into();
        self
    }

    pub fn with_stipend(mut self, stipend: impl Into<String>) -> Self {
        self.stipend = stipend.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    /// Fields whose value is outside their catalog
    pub fn invalid_fields(&self) -> Vec<FilterField> {
        FilterField::ALL
            .into_iter()
            .filter(|field| !field.accepts(self.get(*field)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_touches_only_one_field() {
        let mut filters = FilterSet::new();
        filters.set(FilterField::Location, "Chennai");

        assert_eq!(filters.get(FilterField::Location), "Chennai");
        for field in FilterField::ALL {
            if field != FilterField::Location {
                assert_eq!(filters.get(field), "", "{:?} should stay empty", field);
            }
        }
    }

    #[test]
    fn test_set_accepts_anything() {
        let mut filters = FilterSet::new();
        filters.set(FilterField::Education, "phd");
        assert_eq!(filters.education, "phd");
        assert_eq!(filters.invalid_fields(), vec![FilterField::Education]);
    }

    #[test]
    fn test_builders_match_get() {
        let filters = FilterSet::new()
            .with_query("software intern")
            .with_mode("full_time")
            .with_sector("it");

        assert_eq!(filters.get(FilterField::Query), "software intern");
        assert_eq!(filters.get(FilterField::Mode), "full_time");
        assert_eq!(filters.get(FilterField::Sector), "it");
        assert!(filters.invalid_fields().is_empty());
    }

    #[test]
    fn test_catalogs_allow_empty() {
        for field in FilterField::ALL {
            assert!(field.accepts(""), "{:?} must accept the empty value", field);
        }
        assert!(FilterField::Duration.accepts("3 months"));
        assert!(!FilterField::Mode.accepts("remote"));
        assert!(FilterField::Skills.accepts("React, Python"));
    }
}
