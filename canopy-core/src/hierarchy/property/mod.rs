//! Property-based tests for hierarchy construction, rewriting and cut
//! exploration.
//!
//! Seeded random connected graphs with varied weight distributions drive
//! the full pipeline; slow but exact oracles (parent-walk LCA, explicit
//! leaf-set partitions, surviving-ancestor walks) validate the results.

mod oracle;
mod strategies;
