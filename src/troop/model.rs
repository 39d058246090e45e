use serde::{Deserialize, Serialize};
use std::fmt;

/// A species counts as endangered below this population.
pub const ENDANGERED_THRESHOLD: u32 = 5000;

/// Band edges for [`ConservationStatus`]. These are a separate policy from
/// `ENDANGERED_THRESHOLD`: a population of 7000 classifies as Vulnerable
/// while `is_endangered()` is false. Both constants are inherited from the
/// upstream dataset and must not be unified.
pub const CRITICAL_BAND: u32 = 500;
pub const ENDANGERED_BAND: u32 = 2000;
pub const VULNERABLE_BAND: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConservationStatus {
    LeastConcern,
    Vulnerable,
    Endangered,
    CriticallyEndangered,
}

impl fmt::Display for ConservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConservationStatus::LeastConcern => "Least Concern",
            ConservationStatus::Vulnerable => "Vulnerable",
            ConservationStatus::Endangered => "Endangered",
            ConservationStatus::CriticallyEndangered => "Critically Endangered",
        };
        f.write_str(label)
    }
}

/// One catalog entry. Immutable after load; everything derivable from the
/// stored fields is computed on demand so it can never go stale across a
/// catalog refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub location: String,
    pub population: u32,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl Species {
    pub fn is_endangered(&self) -> bool {
        self.population < ENDANGERED_THRESHOLD
    }

    pub fn conservation_status(&self) -> ConservationStatus {
        match self.population {
            p if p < CRITICAL_BAND => ConservationStatus::CriticallyEndangered,
            p if p < ENDANGERED_BAND => ConservationStatus::Endangered,
            p if p < VULNERABLE_BAND => ConservationStatus::Vulnerable,
            _ => ConservationStatus::LeastConcern,
        }
    }

    /// Latitude and longitude formatted to two decimal places.
    pub fn coordinates(&self) -> String {
        format!("{:.2}, {:.2}", self.latitude, self.longitude)
    }
}

/// Aggregates over one catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_species: usize,
    pub total_population: u64,
    pub endangered_species: usize,
    /// Integer-truncated mean population, 0 for an empty catalog.
    pub average_population: u32,
    pub largest_population: u32,
    pub smallest_population: u32,
    pub random_access_count: u64,
    /// Distinct `location` strings, compared exactly (case-sensitive).
    pub unique_locations: usize,
}

impl CatalogStats {
    /// Share of endangered species, rounded to one decimal. 0.0 when the
    /// catalog is empty rather than a division by zero.
    pub fn endangered_percentage(&self) -> f64 {
        if self.total_species == 0 {
            return 0.0;
        }
        let pct = self.endangered_species as f64 / self.total_species as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    }
}
