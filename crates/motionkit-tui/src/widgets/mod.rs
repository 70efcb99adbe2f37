mod curve_chart;
mod parallax_page;
mod preset_list;
mod status_bar;

pub use curve_chart::CurveChartWidget;
pub use parallax_page::ParallaxPageWidget;
pub use preset_list::PresetListWidget;
pub use status_bar::StatusBarWidget;
