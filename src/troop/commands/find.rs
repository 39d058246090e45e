use crate::catalog::{Catalog, SeedSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// How many "did you mean" candidates a failed lookup offers. The catalog
/// search itself never truncates; capping is this command's choice.
pub const MAX_SUGGESTIONS: usize = 3;

/// Exact-name lookup. A miss is not an error: the result carries a warning
/// and up to [`MAX_SUGGESTIONS`] near matches from the substring search.
pub fn run<S: SeedSource>(catalog: &Catalog<S>, name: &str) -> Result<CmdResult> {
    if let Some(found) = catalog.find(name)? {
        return Ok(CmdResult::default().with_species(found));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(format!(
        "No species named \"{}\".",
        name.trim()
    )));

    let candidates = catalog.search(name)?;
    if !candidates.is_empty() {
        let names: Vec<&str> = candidates
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|s| s.name.as_str())
            .collect();
        result.add_message(CmdMessage::info(format!(
            "Did you mean: {}?",
            names.join(", ")
        )));
    }
    Ok(result)
}
