//! Utility modules for holonomic_dwa

pub mod collaborators;

pub use collaborators::{LatestGoal, OdomTransform, RecordingSink};
