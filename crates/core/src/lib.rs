//! Core business logic for Tutora.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every function here is synchronous and side-effect free.
//!
//! # Modules
//!
//! - `schedule` - Recurring lesson dates, weekday counts, national holidays
//! - `finance` - VAT, card commission, net settlement, fee apportionment, instructor pay

pub mod finance;
pub mod schedule;
