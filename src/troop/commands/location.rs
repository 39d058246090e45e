use crate::catalog::{Catalog, SeedSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run<S: SeedSource>(catalog: &Catalog<S>, term: &str) -> Result<CmdResult> {
    let matches = catalog.by_location(term)?;

    let mut result = CmdResult::default().with_listed(matches);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No species found in \"{}\".",
            term.trim()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_seed;

    #[test]
    fn matches_habitat_substrings() {
        let result = run(&test_seed::catalog(), "america").unwrap();
        let names: Vec<&str> = result.listed.iter().map(|s| s.name.as_str()).collect();
        // Both "Central & South America" and "South America" contain it.
        assert_eq!(names, ["Capuchin Monkey", "Howler Monkey"]);
    }

    #[test]
    fn no_match_warns() {
        let result = run(&test_seed::catalog(), "Antarctica").unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
