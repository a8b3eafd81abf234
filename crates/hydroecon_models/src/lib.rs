//! # Hydroecon Models (L2: Business Logic)
//!
//! Flood-risk and project-economics calculations for water-resource
//! planning.
//!
//! This crate provides:
//! - Project finance: capital recovery, interest during construction,
//!   annualised cost and benefit-cost ratio, storage reallocation cost
//! - Expected annual damage over exceedance-probability curves
//! - Agricultural flood damage: crop calendars, regional resolution,
//!   depth/duration curves and seasonal flood simulation
//! - Water-demand forecasting
//! - Recreation unit-day values
//!
//! ## Design Principles
//!
//! - **Pure functions** over caller-supplied inputs and read-only tables
//! - **Strict validation** (`Result`) for contract violations in EAD and
//!   finance; **tolerant results** with explanations for forecasting
//! - **Immutable library data** initialised once and shared by reference

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod agriculture;
pub mod demand;
pub mod finance;
pub mod flood;
pub mod recreation;
