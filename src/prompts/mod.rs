pub mod audit_system_prompt;
