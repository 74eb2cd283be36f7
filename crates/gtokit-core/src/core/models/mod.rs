//! # Basis-Set Models Module
//!
//! This module contains the owning value types and aliasing views that
//! represent a Gaussian basis set at every level of its hierarchy.
//!
//! ## Overview
//!
//! Each level of the hierarchy exists in three forms that share one API and
//! compare equal by numeric content alone:
//!
//! - an **owning** type (`Primitive`, `ContractedGaussian`, `Shell`,
//!   `AtomicBasisSet`, `AOBasisSet`) that holds its own storage,
//! - a **shared view** (`*View`) that aliases storage read-only, and
//! - a **mutable view** (`*ViewMut`) that aliases storage read/write.
//!
//! Owning types have a *null* state (default construction, or the state a
//! move leaves behind) that is distinct from holding zero values: read
//! accessors on a null object fail, while whole-object mutable accessors
//! lazily materialize zeroed storage. Views additionally have their own
//! null state meaning "aliasing nothing at all".
//!
//! Const-correctness is the borrow system: a shared view can only ever hand
//! out shared sub-views, and a mutable view requires a live `&mut` chain all
//! the way to the storage it writes.
//!
//! ## Key Components
//!
//! - [`cell`] - The dual-ownership cell backing leaf-level aliasing
//! - [`primitive`] - A single Gaussian term `c·exp(−α‖r−r0‖²)`
//! - [`contracted`] - An ordered contraction of primitives sharing one center
//! - [`shell`] - Purity, angular momentum, and one contracted Gaussian
//! - [`atomic`] - Named, element-tagged shell collection on one center
//! - [`ao_basis`] - The flattened multi-center basis with range tables

pub mod ao_basis;
pub mod atomic;
pub mod cell;
pub mod contracted;
pub mod primitive;
pub mod shell;
