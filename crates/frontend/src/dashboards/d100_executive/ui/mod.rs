mod ceo;
mod cfo;
mod clients;
mod coo;
mod dashboard;
mod logistics;
mod subsidiaries;

pub use ceo::CeoView;
pub use cfo::CfoView;
pub use clients::ClientsView;
pub use coo::CooView;
pub use dashboard::ExecutiveDashboard;
pub use logistics::LogisticsView;
pub use subsidiaries::SubsidiariesView;
