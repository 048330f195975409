pub mod extract;
pub mod fetch;
pub mod write;

pub use extract::*;
pub use fetch::*;
pub use write::*;
