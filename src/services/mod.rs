//! Application service layer.
//!
//! Services validate tool input, drive the core tools and turn their output
//! into the reply envelope. They sit between the MCP handlers and the
//! external providers.

mod scheduling_service;
mod searching_service;

pub use scheduling_service::{SchedulingService, SchedulingServiceImpl};
pub use searching_service::{SearchingService, SearchingServiceImpl};
