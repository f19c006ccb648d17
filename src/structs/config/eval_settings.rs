/// Connection settings for the evaluation deployment. All four fields are
/// required and validated at process start.
#[derive(Debug, Clone)]
pub struct EvalSettings {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
}
