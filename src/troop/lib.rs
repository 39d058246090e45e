//! # Troop Architecture
//!
//! Troop is a **UI-agnostic species-catalog library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, runs the menu loop     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic per operation                        │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs, seeded by seed.rs)                    │
//! │  - Owns the species snapshot and the pick counter           │
//! │  - All shared-state synchronization lives here              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types (`Result<CmdResult>`), never writes to
//! stdout/stderr, never calls `std::process::exit`, and never assumes a
//! terminal. The same core could serve a REST API or any other UI.
//!
//! ## Concurrency
//!
//! The catalog is read-only after load; `refresh` swaps the whole
//! snapshot atomically. The random-pick counter is the only other shared
//! mutable state and sits behind one mutex together with the
//! process-seeded RNG. See [`catalog`] for the details.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`catalog`]: The catalog service, seed-source trait, counter
//! - [`seed`]: The embedded dataset and its validation
//! - [`model`]: Core data types (`Species`, `CatalogStats`, statuses)
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing, and the interactive menu for the
//!   binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod model;
pub mod seed;
