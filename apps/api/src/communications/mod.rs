//! Calendar events, notifications and reports.
//!
//! Rows either belong to a worker or, with a NULL `worker_id`, to everyone.

pub mod calendar;
pub mod notifications;
pub mod reports;
