pub mod account;
pub mod catalog;
pub mod commerce;
pub mod ids;
pub mod review;

pub use account::*;
pub use catalog::*;
pub use commerce::*;
pub use ids::*;
pub use review::*;
