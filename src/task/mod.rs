//! Task tracking over flat-file storage.
//!
//! This module implements the core of the tracker: registering tasks
//! against existing users, listing them, advancing their status through the
//! sequential state machine, deleting done tasks, and appending one audit
//! record per accepted status change. The module follows hexagonal
//! architecture:
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
