use crate::catalog::{Catalog, SeedSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run<S: SeedSource>(catalog: &Catalog<S>) -> Result<CmdResult> {
    catalog.refresh()?;
    let count = catalog.all()?.len();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Catalog reloaded: {} species.",
        count
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_seed;

    #[test]
    fn reload_keeps_the_pick_counter() {
        let catalog = test_seed::catalog();
        catalog.pick_random().unwrap();
        let result = run(&catalog).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(catalog.random_access_count(), 1);
    }
}
