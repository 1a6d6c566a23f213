pub mod algorithm_buttons;
pub mod header;
pub mod output_view;
pub mod upload_area;
