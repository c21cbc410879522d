//! Chart derivations for the status-over-time view.
//!
//! Everything here is a pure function of the fetched dataset and the
//! selected filters, so the view recomputes on every state change.

pub mod chart_point;
pub mod chart_type;
pub mod csv_export;
pub mod derive;
pub mod year_range;
