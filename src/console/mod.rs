// Console front end: the interactive menu and the background viewer task
pub mod menu;
pub mod viewer;

pub use menu::run;
pub use viewer::{ViewerError, ViewerHandle, ViewerRequest};
