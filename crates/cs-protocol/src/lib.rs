pub mod assessment;
pub mod recommendation;

pub use assessment::*;
pub use recommendation::*;
