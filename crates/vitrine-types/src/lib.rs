pub mod api;
pub mod domain;
pub mod error;
mod util;

pub use api::*;
pub use domain::*;
pub use error::{Error, Result};
pub use util::*;
