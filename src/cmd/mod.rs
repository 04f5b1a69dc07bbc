//! Command module structure for prgate CLI

pub mod check;
pub mod completion;
pub mod sections;
