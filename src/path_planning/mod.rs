// Path Planning algorithms module

pub mod holonomic_dwa;

pub use holonomic_dwa::*;
