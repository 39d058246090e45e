//! # The catalog
//!
//! [`Catalog`] owns the species collection and the random-pick counter,
//! and is the single point of mutation for both.
//!
//! ## Concurrency
//!
//! The species list lives behind a lock as an `Arc` snapshot:
//! - First access loads it exactly once (double-checked under the write
//!   lock), so racing first callers never build two catalogs or observe a
//!   partial one.
//! - Reads clone the `Arc` and release the lock; the list itself is never
//!   mutated in place. `refresh` swaps in a whole new snapshot, so readers
//!   see either the old complete catalog or the new one, never a mix.
//! - The pick counter and the RNG share one mutex. Every read and write of
//!   the counter goes through it.
//!
//! The RNG is seeded once per process. Reseeding per call from the clock
//! would correlate rapid successive draws.
//!
//! ## Seed sources
//!
//! [`SeedSource`] abstracts where records come from: [`EmbeddedSeed`] for
//! the compiled-in dataset, [`FixedSeed`] for tests and programmatic use.

use crate::error::Result;
use crate::model::{CatalogStats, Species};
use crate::seed;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Where the catalog's records come from.
///
/// `load` is called once on first access and again on every `refresh`.
/// It must fail rather than return a partially valid list.
pub trait SeedSource {
    fn load(&self) -> Result<Vec<Species>>;
}

/// Production source: the dataset embedded at compile time.
#[derive(Debug, Default)]
pub struct EmbeddedSeed;

impl SeedSource for EmbeddedSeed {
    fn load(&self) -> Result<Vec<Species>> {
        seed::load_embedded()
    }
}

/// A fixed list of records, validated on load. Used by tests.
#[derive(Debug, Clone)]
pub struct FixedSeed(pub Vec<Species>);

impl SeedSource for FixedSeed {
    fn load(&self) -> Result<Vec<Species>> {
        seed::validate(self.0.clone())
    }
}

struct PickState {
    count: u64,
    rng: StdRng,
}

pub struct Catalog<S: SeedSource> {
    source: S,
    species: RwLock<Option<Arc<[Species]>>>,
    picks: Mutex<PickState>,
}

impl<S: SeedSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            species: RwLock::new(None),
            picks: Mutex::new(PickState {
                count: 0,
                rng: StdRng::from_os_rng(),
            }),
        }
    }

    /// Current snapshot, loading the seed on first access.
    fn snapshot(&self) -> Result<Arc<[Species]>> {
        if let Some(loaded) = self
            .species
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(loaded));
        }

        let mut slot = self.species.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded while we waited for the lock.
        if let Some(loaded) = slot.as_ref() {
            return Ok(Arc::clone(loaded));
        }
        let loaded: Arc<[Species]> = self.source.load()?.into();
        *slot = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Every species, in seed order.
    pub fn all(&self) -> Result<Vec<Species>> {
        Ok(self.snapshot()?.to_vec())
    }

    /// Case-insensitive exact-name lookup. Blank input, an empty catalog,
    /// and a miss all yield `None`. Matching folds case ordinally (no
    /// locale tables), so results are deterministic across environments.
    pub fn find(&self, name: &str) -> Result<Option<Species>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let wanted = name.to_lowercase();
        Ok(self
            .snapshot()?
            .iter()
            .find(|s| s.name.to_lowercase() == wanted)
            .cloned())
    }

    /// Case-insensitive substring match on name. Blank input yields an
    /// empty result, not an error.
    pub fn search(&self, term: &str) -> Result<Vec<Species>> {
        self.filtered(term, |s| s.name.as_str())
    }

    /// Case-insensitive substring match on location.
    pub fn by_location(&self, term: &str) -> Result<Vec<Species>> {
        self.filtered(term, |s| s.location.as_str())
    }

    fn filtered(&self, term: &str, field: impl Fn(&Species) -> &str) -> Result<Vec<Species>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let needle = term.to_lowercase();
        Ok(self
            .snapshot()?
            .iter()
            .filter(|s| field(s).to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// All endangered species, in catalog order.
    pub fn endangered(&self) -> Result<Vec<Species>> {
        Ok(self
            .snapshot()?
            .iter()
            .filter(|s| s.is_endangered())
            .cloned()
            .collect())
    }

    /// Uniform random draw over the catalog. Increments the pick counter
    /// only on success; an empty catalog yields `None` and leaves the
    /// counter untouched.
    pub fn pick_random(&self) -> Result<Option<Species>> {
        let snap = self.snapshot()?;
        if snap.is_empty() {
            return Ok(None);
        }
        let mut picks = self.picks.lock().unwrap_or_else(PoisonError::into_inner);
        picks.count += 1;
        let index = picks.rng.random_range(0..snap.len());
        Ok(Some(snap[index].clone()))
    }

    /// How many successful random picks this process has served.
    pub fn random_access_count(&self) -> u64 {
        self.picks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .count
    }

    pub fn reset_access_count(&self) {
        self.picks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .count = 0;
    }

    /// Aggregates over the current snapshot. Empty-catalog aggregates are
    /// zero-valued, never an error.
    pub fn stats(&self) -> Result<CatalogStats> {
        let snap = self.snapshot()?;
        let total_species = snap.len();
        let total_population: u64 = snap.iter().map(|s| u64::from(s.population)).sum();
        let unique: HashSet<&str> = snap.iter().map(|s| s.location.as_str()).collect();

        Ok(CatalogStats {
            total_species,
            total_population,
            endangered_species: snap.iter().filter(|s| s.is_endangered()).count(),
            average_population: if total_species > 0 {
                (total_population / total_species as u64) as u32
            } else {
                0
            },
            largest_population: snap.iter().map(|s| s.population).max().unwrap_or(0),
            smallest_population: snap.iter().map(|s| s.population).min().unwrap_or(0),
            random_access_count: self.random_access_count(),
            unique_locations: unique.len(),
        })
    }

    /// Re-derive the catalog from the seed source, replacing the snapshot
    /// wholesale. The pick counter is unaffected. If the source fails, the
    /// previous snapshot stays in place.
    pub fn refresh(&self) -> Result<()> {
        let loaded: Arc<[Species]> = self.source.load()?.into();
        let mut slot = self.species.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(loaded);
        Ok(())
    }
}
