pub mod course;
pub mod participant;
