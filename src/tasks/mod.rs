//! Asynchronous tasks.
//!
//! - [`motion_task`]: receives commands and drives the gait engine on a
//!   fixed period.
//! - [`sweep`]: the diagnostic joint sweep the motion task can run instead.
pub mod motion_task;
pub mod sweep;
