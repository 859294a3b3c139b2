//! citytz-cli
//! ==========
//!
//! Command-line interface for the `citytz-core` city/timezone search engine.
//!
//! This crate provides the `citytz` binary. The library target only exists so
//! that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install citytz-cli
//! citytz --help
//! citytz exact chicago
//! citytz partial "springfield mo"
//! citytz iso DE
//! citytz search paris --case-sensitive
//! citytz --json all --limit 10
//! ```
//!
//! For programmatic access use the `citytz-core` crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/holg/citytimezones-rs>
//! - Core crate: <https://docs.rs/citytz-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]
