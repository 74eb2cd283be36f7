//! # Input/Output Module
//!
//! Serialization of basis sets and ingestion of external basis-set data.
//!
//! ## Key Components
//!
//! - [`stream`] - `serde` support for the basis-set hierarchy
//! - [`bse`] - Loading Basis Set Exchange JSON tables

pub mod bse;
pub mod stream;
