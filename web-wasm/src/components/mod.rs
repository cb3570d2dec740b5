pub mod header;
pub mod upload_area;
pub mod rule_inputs;
pub mod results_panel;
pub mod copied_toast;
