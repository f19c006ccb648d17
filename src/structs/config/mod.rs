pub mod eval_settings;
