pub mod axis;
pub mod bar_chart;
pub mod frame;
pub mod gauge_chart;
pub mod line_chart;
pub mod radar_chart;

pub use axis::PlotSpec;
pub use bar_chart::BarChart;
pub use gauge_chart::GaugeChart;
pub use line_chart::LineChart;
pub use radar_chart::RadarChart;
