//! # FindMyPet Architecture
//!
//! findmypet is a **UI-agnostic library** for reporting lost pets and sightings,
//! browsing them through a filter engine, and following the ones you care about.
//! The terminal client in `crates/findmypet` is one UI over it; a web or mobile
//! front end would use the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (findmypet binary)                                  │
//! │  - Parses arguments, renders listings, sets exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store and config     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Report, list, follow, status, update, delete, profile    │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Storage (store/)            │ │  Filter Engine (filter.rs) │
//! │  - DataStore trait           │ │  - Pure (listings, query,  │
//! │  - FileStore, InMemoryStore  │ │    now) -> listings        │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns `Result<CmdResult>`.
//! It never prints and never exits. Diagnostics go through `tracing`; installing a
//! subscriber is up to the client.
//!
//! ## Time
//!
//! Commands and the filter engine take `now` as an argument. Only the API reads the
//! clock, so everything below it is deterministic under test.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`filter`]: Query model and the filter engine
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Listing`, `PosterInfo`, `ListingPatch`)
//! - [`seed`]: Built-in demo listings
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod seed;
pub mod store;
