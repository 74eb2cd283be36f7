//! # gtokit Core Library
//!
//! Value-semantic data structures for Gaussian-type-orbital (GTO) basis sets,
//! designed around a uniform owning/aliasing view API.
//!
//! ## Architectural Philosophy
//!
//! The basis-set hierarchy (primitive → contracted Gaussian → shell → atomic
//! basis set → AO basis set) is exposed twice: once as *owning* value types
//! and once as lightweight *views* that alias storage held elsewhere. Both
//! families share one API, so algorithms can be written against either
//! without caring where the numbers physically live.
//!
//! - **[`core::models`]: The Foundation.** The owning types, their shared
//!   and mutable views, and the structure-of-arrays flattening store that
//!   backs large basis sets ([`core::models::ao_basis::AOBasisSet`]).
//!
//! - **[`core::io`]: Persistence.** A flat, ordered serialization of basis
//!   sets and an ingestion path for Basis Set Exchange JSON tables.
//!
//! - **[`core::integrals`]: Collaborator Boundaries.** The abstract integral
//!   factory consumed by integral engines, shell-index domain generation,
//!   and orbital-weighted quantities over an abstract orbital space.

pub mod core;
