pub mod browser;
pub mod capture_service;
pub mod evaluation_client;
pub mod inspection_service;
pub mod report_writer;
pub mod result_schema;
