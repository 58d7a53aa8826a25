//! Core business logic for Wiremit.
//!
//! This crate contains pure business logic with ZERO web or storage
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `transfer` - Fee and conversion calculation for outbound transfers
//! - `rates` - FX rate snapshots and provider response parsing
//! - `ledger` - In-memory transaction history
//! - `auth` - User/session domain types and credential hashing
//! - `validation` - Structured field-level validation

pub mod auth;
pub mod ledger;
pub mod rates;
pub mod transfer;
pub mod validation;
