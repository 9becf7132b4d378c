pub mod conflict;
pub mod job;

pub use conflict::*;
pub use job::*;
