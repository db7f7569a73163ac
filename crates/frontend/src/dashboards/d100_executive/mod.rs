pub mod mock_data;
pub mod state;
pub mod ui;
pub mod view_model;
