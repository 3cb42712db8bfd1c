pub mod generate;
pub mod report_text;
pub mod results;
