//! Task tracking for the service.
//!
//! Tasks are created with defaults, listed through conjunctive filters and
//! stable id-ordered pages, looked up, partially updated, and hard-deleted.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
