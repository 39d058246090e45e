use crate::catalog::{Catalog, SeedSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run<S: SeedSource>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let listed = catalog.endangered()?;

    let mut result = CmdResult::default().with_listed(listed);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No endangered species in the catalog."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_seed;

    #[test]
    fn lists_only_endangered_species() {
        let result = run(&test_seed::catalog()).unwrap();
        let names: Vec<&str> = result.listed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Red-shanked douc"]);
    }

    #[test]
    fn empty_catalog_reports_none() {
        let result = run(&test_seed::empty_catalog()).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
