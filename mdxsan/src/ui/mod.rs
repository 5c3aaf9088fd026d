pub mod diff_viewer;
pub mod output;
