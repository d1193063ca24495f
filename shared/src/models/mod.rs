//! Domain models for the disaster dashboard

mod earthquake;
mod flood;
mod location;
mod season;
mod weather;

pub use earthquake::*;
pub use flood::*;
pub use location::*;
pub use season::*;
pub use weather::*;
