//! Place students into firms.
//!
//! Every firm offers a fixed number of positions. Students are ranked by
//! score, and each one in turn gets the first firm of its preference list
//! which still has an open position. See [`allocate`].

pub mod allocator;
pub mod checks;
pub mod config;
pub mod display;
pub mod loaders;
pub mod model;
pub mod stats;

pub use allocator::{allocate, ranking};
pub use model::{Firm, NOT_ASSIGNED, Placement, Student, StudentId};
