//! Records owned by a worker and served under `/api/workers/:worker_id/...`.

pub mod assignments;
pub mod career;
pub mod documents;
pub mod evaluations;
pub mod evidence;
pub mod growth;
pub mod japanese;
pub mod messages;
pub mod progress;
pub mod simulator;
pub mod skills;
pub mod support;
