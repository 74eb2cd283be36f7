//! # Utilities Module
//!
//! Small shared helpers that do not belong to any one level of the
//! basis-set hierarchy.

pub mod elements;
