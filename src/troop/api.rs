//! # API Facade
//!
//! Thin facade over the command layer: the single entry point for every
//! troop operation regardless of the UI driving it. It dispatches to
//! command functions and returns structured `Result<CmdResult>` values;
//! business logic lives in `commands/*.rs` and presentation stays in the
//! binary. The same facade serves the subcommand CLI and the interactive
//! menu.
//!
//! `TroopApi<S: SeedSource>` is generic over the seed source: production
//! uses `EmbeddedSeed`, tests use `FixedSeed`.

use crate::catalog::{Catalog, SeedSource};
use crate::commands;
use crate::error::Result;

pub struct TroopApi<S: SeedSource> {
    catalog: Catalog<S>,
}

impl<S: SeedSource> TroopApi<S> {
    pub fn new(source: S) -> Self {
        Self {
            catalog: Catalog::new(source),
        }
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn find(&self, name: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.catalog, name)
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, term)
    }

    pub fn by_location(&self, term: &str) -> Result<commands::CmdResult> {
        commands::location::run(&self.catalog, term)
    }

    pub fn endangered(&self) -> Result<commands::CmdResult> {
        commands::endangered::run(&self.catalog)
    }

    pub fn random(&self) -> Result<commands::CmdResult> {
        commands::random::run(&self.catalog)
    }

    pub fn stats(&self, reset_count: bool) -> Result<commands::CmdResult> {
        commands::stats::run(&self.catalog, reset_count)
    }

    pub fn refresh(&self) -> Result<commands::CmdResult> {
        commands::refresh::run(&self.catalog)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixedSeed;
    use crate::model::Species;

    fn api() -> TroopApi<FixedSeed> {
        TroopApi::new(FixedSeed(vec![Species {
            name: "Baboon".into(),
            location: "Africa & Asia".into(),
            population: 100_000,
            details: None,
            image: None,
            latitude: 0.0,
            longitude: 0.0,
        }]))
    }

    #[test]
    fn dispatches_to_commands() {
        let api = api();
        assert_eq!(api.list().unwrap().listed.len(), 1);
        assert!(api.find("baboon").unwrap().species.is_some());
        assert_eq!(api.search("bab").unwrap().listed.len(), 1);
        assert_eq!(api.by_location("asia").unwrap().listed.len(), 1);
        assert!(api.endangered().unwrap().listed.is_empty());
        assert!(api.random().unwrap().species.is_some());
        assert_eq!(api.stats(false).unwrap().stats.unwrap().total_species, 1);
        assert_eq!(api.refresh().unwrap().messages.len(), 1);
    }
}
