pub mod history;
pub mod job;
pub mod keyword;
pub mod resume;
