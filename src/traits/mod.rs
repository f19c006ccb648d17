pub mod page_capturer;
pub mod page_inspector;
pub mod report_sink;
pub mod result_evaluator;
