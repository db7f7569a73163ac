pub mod dto;
pub mod series;
pub mod subsidiaries;

pub use dto::*;
pub use series::*;
pub use subsidiaries::*;
