pub mod api;
pub mod config;
pub mod datasets;
pub mod pages;
pub mod presenter;

mod controls;
pub use controls::{ControlSession, Controls};
