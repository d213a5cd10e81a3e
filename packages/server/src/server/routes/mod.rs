// HTTP routes
pub mod analysis;
pub mod health;
pub mod request;

pub use analysis::*;
pub use health::*;
pub use request::*;
