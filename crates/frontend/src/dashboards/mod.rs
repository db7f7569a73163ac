pub mod d100_executive;

pub use d100_executive::ui::ExecutiveDashboard;
