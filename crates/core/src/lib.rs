//! Core library for canivete
//!
//! This crate implements the **Functional Core** of the canivete application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The canivete project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`canivete_core`** (this crate): Pure calculations and transformations with zero I/O
//! - **`canivete`**: Flag parsing, configuration files, HTTP and printing (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no clocks, no random numbers
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by command group:
//!
//! - [`finance`]: Compound interest with regular contributions and per-period history
//! - [`datetime`]: Unix timestamp rendering
//! - [`programming`]: UUID formatting
//! - [`medium`]: Medium GraphQL response model and Markdown rendering
//! - [`config`]: Configuration file model and parsing
//!
//! # Example Usage
//!
//! ```rust
//! use canivete_core::finance::{compound_interest, InterestInput};
//!
//! let input = InterestInput::new(1000.0, 5.0, 1, 10);
//! let result = compound_interest(&input, false).unwrap();
//!
//! assert_eq!(result.future_value, 1628.9);
//! ```

pub mod config;
pub mod datetime;
pub mod finance;
pub mod medium;
pub mod programming;
