pub mod timeline_chart;
