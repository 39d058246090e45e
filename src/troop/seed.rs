//! The fixed seed dataset.
//!
//! The catalog ships with its data embedded at compile time; there is no
//! runtime file or network fetch. A malformed seed aborts initialization
//! instead of producing a silently empty catalog, so callers can tell
//! "no data" apart from "no match".

use crate::error::{Result, TroopError};
use crate::model::Species;

const SPECIES_JSON: &str = include_str!("../../data/species.json");

/// Parse and validate the embedded dataset.
pub fn load_embedded() -> Result<Vec<Species>> {
    let species: Vec<Species> = serde_json::from_str(SPECIES_JSON)?;
    validate(species)
}

/// Reject records that would break lookups later.
pub fn validate(species: Vec<Species>) -> Result<Vec<Species>> {
    for (i, s) in species.iter().enumerate() {
        if s.name.trim().is_empty() {
            return Err(TroopError::Seed(format!(
                "record {} has a blank name",
                i + 1
            )));
        }
    }
    Ok(species)
}
