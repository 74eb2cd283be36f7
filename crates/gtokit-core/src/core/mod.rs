//! # Core Module
//!
//! This module provides the fundamental building blocks for representing and
//! manipulating Gaussian basis sets, serving as the computational core of the
//! library.
//!
//! ## Overview
//!
//! A basis set is a nested hierarchy: primitive Gaussians are grouped into
//! contracted Gaussians, contracted Gaussians into shells, shells into atomic
//! basis sets, and atomic basis sets into a full AO basis set. The core
//! module represents every level of that hierarchy twice, as an owning value
//! type and as an aliasing view, and keeps the two families interchangeable
//! in every algorithm built on top of them.
//!
//! ## Architecture
//!
//! - **Basis-Set Representation** ([`models`]) - Owning types, shared and
//!   mutable views, and the structure-of-arrays flattening store
//! - **File I/O** ([`io`]) - Flat ordered serialization and Basis Set
//!   Exchange JSON ingestion
//! - **Integral Boundaries** ([`integrals`]) - The abstract integral factory
//!   contract and orbital-space-weighted quantities
//! - **Lookup Tables** ([`utils`]) - Static element data

pub mod error;
pub mod integrals;
pub mod io;
pub mod models;
pub mod utils;
