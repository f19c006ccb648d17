mod common;

mod cli_usage;
mod evaluation_api;
