pub mod chat_completion_request;
pub mod chat_message;
pub mod response_format;
