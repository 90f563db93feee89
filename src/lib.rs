//! Frequency-weighted matchup analysis for set catalogs.
//!
//! Takes per-set opponent score tables plus observed usage frequencies and
//! produces, per dataset round: weighted effectiveness averages, compacted
//! top/bottom ranked lists, and best-responder team rankings. The `naming`
//! and `analysis` modules are pure and I/O-free; `data`, `overview`,
//! `export`, and `cli` are the plumbing around them.

pub mod analysis;
pub mod cli;
pub mod data;
pub mod export;
pub mod naming;
pub mod overview;
