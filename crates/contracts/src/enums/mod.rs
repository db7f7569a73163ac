pub mod dashboard_view;
pub mod period;

pub use dashboard_view::{DashboardView, ParseViewError};
pub use period::{ParsePeriodError, Period};
