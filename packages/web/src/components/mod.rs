//! Reusable UI components

mod job_card;
mod loading;
mod pagination;
mod search_jobs;

pub use job_card::*;
pub use loading::*;
pub use pagination::*;
pub use search_jobs::*;
