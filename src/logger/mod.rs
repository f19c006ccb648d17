pub mod score_logger;
