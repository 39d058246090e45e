use crate::catalog::{Catalog, SeedSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Report aggregates over the catalog; optionally zero the random-pick
/// counter first so the report reflects the reset.
pub fn run<S: SeedSource>(catalog: &Catalog<S>, reset_count: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if reset_count {
        catalog.reset_access_count();
        result.add_message(CmdMessage::success("Random pick counter reset."));
    }
    Ok(result.with_stats(catalog.stats()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_seed;

    #[test]
    fn reports_aggregates() {
        let result = run(&test_seed::catalog(), false).unwrap();
        let stats = result.stats.unwrap();
        assert_eq!(stats.total_species, 4);
        assert_eq!(stats.endangered_species, 1);
        assert_eq!(stats.endangered_percentage(), 25.0);
    }

    #[test]
    fn reset_zeroes_the_counter_before_reporting() {
        let catalog = test_seed::catalog();
        catalog.pick_random().unwrap();
        let result = run(&catalog, true).unwrap();
        assert_eq!(result.stats.unwrap().random_access_count, 0);
        assert_eq!(result.messages.len(), 1);
    }
}
