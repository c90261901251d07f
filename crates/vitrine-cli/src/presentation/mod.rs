//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                   (Converter)        (Data)          (Driver)   ==(Text)==> [ View ] --> stdout
//! ```
//!
//! * `view_models`: serializable raw data. Amounts stay in cents, timestamps
//!   stay as the API sent them; JSON output is exactly these structs.
//! * `presenters`: domain records to view models (totals, lookups, phases).
//! * `views`: text layout. The only place that calls the `vitrine_format`
//!   formatters and applies terminal colors.
//! * `renderer`: picks JSON or text.

pub mod presenters;
pub mod renderer;
pub mod view_models;
pub mod views;

pub use renderer::{ConsoleRenderer, CreateView, ViewContext};
