mod plan;
mod relation;

pub use plan::*;
pub use relation::*;
