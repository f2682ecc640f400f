pub mod cs;

pub use cs::compression;
pub use cs::error::Error;
pub use cs::compression::Result;
