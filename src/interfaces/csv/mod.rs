pub mod debt_reader;
pub mod report_writer;
