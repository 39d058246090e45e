use crate::catalog::{Catalog, SeedSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Pick one species at random. An empty catalog is a warning, not an
/// error, and does not count as a pick.
pub fn run<S: SeedSource>(catalog: &Catalog<S>) -> Result<CmdResult> {
    match catalog.pick_random()? {
        Some(species) => {
            let count = catalog.random_access_count();
            let mut result = CmdResult::default().with_species(species);
            result.add_message(CmdMessage::info(format!(
                "Random picks this session: {}",
                count
            )));
            Ok(result)
        }
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning("The catalog is empty."));
            Ok(result)
        }
    }
}
