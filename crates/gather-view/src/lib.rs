//! Pure view projection for the Gather event-registration core.
//!
//! Everything here is a side-effect-free function of event state: given
//! events and a filter selection, compute what the renderer should show.
//! Nothing in this crate holds or mutates state.
//!
//! # Modules
//!
//! - [`date`] -- Long-form display formatting for calendar dates.
//! - [`filter`] -- Category-filtered listing preserving seed order.
//! - [`registration`] -- Registration button tri-state and spots summary.
//! - [`style`] -- Total label/color mappings over the closed category
//!   enumeration.

pub mod date;
pub mod filter;
pub mod registration;
pub mod style;

pub use date::long_date;
pub use filter::list_by_filter;
pub use registration::{RegistrationStatus, registration_status, spots_summary};
pub use style::{ColorToken, category_color, category_label};
