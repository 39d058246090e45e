use crate::model::{CatalogStats, Species};

pub mod endangered;
pub mod find;
pub mod list;
pub mod location;
pub mod random;
pub mod refresh;
pub mod search;
pub mod stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. The CLI decides how to render it;
/// commands never touch stdout.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Species>,
    pub species: Option<Species>,
    pub stats: Option<CatalogStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, species: Vec<Species>) -> Self {
        self.listed = species;
        self
    }

    pub fn with_species(mut self, species: Species) -> Self {
        self.species = Some(species);
        self
    }

    pub fn with_stats(mut self, stats: CatalogStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

#[cfg(test)]
pub(crate) mod test_seed {
    use crate::catalog::{Catalog, FixedSeed};
    use crate::model::Species;

    pub fn species(name: &str, location: &str, population: u32) -> Species {
        Species {
            name: name.into(),
            location: location.into(),
            population,
            details: None,
            image: None,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    pub fn catalog() -> Catalog<FixedSeed> {
        Catalog::new(FixedSeed(vec![
            species("Baboon", "Africa & Asia", 100_000),
            species("Capuchin Monkey", "Central & South America", 23_000),
            species("Howler Monkey", "South America", 8_000),
            species("Red-shanked douc", "Vietnam", 1_300),
        ]))
    }

    pub fn empty_catalog() -> Catalog<FixedSeed> {
        Catalog::new(FixedSeed(Vec::new()))
    }
}
