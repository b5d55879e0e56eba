pub mod actor;
pub mod cast;
pub mod director;
pub mod movie;
pub mod review;
