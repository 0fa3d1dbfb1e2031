//! Full-screen pages of the simulator.

mod log;

pub use log::draw_log_page;
