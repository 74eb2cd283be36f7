//! # Integrals Module
//!
//! The boundary between the basis-set data model and integral evaluation.
//!
//! ## Key Components
//!
//! - [`factory`] - The [`IntegralFactory`](factory::IntegralFactory) trait
//!   and shell-tuple enumeration
//! - [`density`] - Orbital spaces and densities defined over them
//! - [`overlap`] - A reference overlap factory for s shells

pub mod density;
pub mod factory;
pub mod overlap;
