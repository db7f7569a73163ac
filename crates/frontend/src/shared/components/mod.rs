pub mod card_animated;
pub mod kpi_card;
pub mod table;

pub use card_animated::CardAnimated;
pub use kpi_card::{KpiCard, KpiRow};
