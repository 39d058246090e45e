use crate::catalog::{Catalog, SeedSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run<S: SeedSource>(catalog: &Catalog<S>, term: &str) -> Result<CmdResult> {
    let matches = catalog.search(term)?;

    let mut result = CmdResult::default().with_listed(matches);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No species matching \"{}\".",
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
    fn matches_substrings_case_insensitively() {
        let result = run(&test_seed::catalog(), "MONKEY").unwrap();
        let names: Vec<&str> = result.listed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Capuchin Monkey", "Howler Monkey"]);
    }

    #[test]
    fn no_match_warns() {
        let result = run(&test_seed::catalog(), "gorilla").unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn blank_term_yields_empty() {
        let result = run(&test_seed::catalog(), "  ").unwrap();
        assert!(result.listed.is_empty());
    }
}
