//! Input plumbing: matchup catalogs, frequency tables, and the dataset
//! registry manifest. Loaders degrade gracefully; the analysis layer never
//! touches the filesystem.

pub mod catalog;
pub mod frequency;
pub mod registry;
