use crate::catalog::{Catalog, SeedSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// List every species, sorted by name for display. Enumeration order in
/// the catalog itself stays seed order; sorting here is a display choice.
pub fn run<S: SeedSource>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let mut species = catalog.all()?;
    species.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let mut result = CmdResult::default().with_listed(species);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::warning("The catalog is empty."));
    }
    Ok(result)
}
