pub mod chart_renderer;
