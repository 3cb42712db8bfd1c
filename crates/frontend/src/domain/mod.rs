pub mod a001_project;
pub mod a002_dataset;
pub mod a003_generation;
