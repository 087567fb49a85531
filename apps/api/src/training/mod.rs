//! Classroom trainings and the construction-simulator pipeline
//! (menus, sessions, KPI scores, operation logs, Unity intake and replay).

pub mod courses;
pub mod menus;
pub mod replay;
pub mod sessions;
pub mod unity;
