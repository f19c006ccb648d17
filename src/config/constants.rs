use std::time::Duration;

pub const AZURE_OPENAI_ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
pub const AZURE_OPENAI_DEPLOYMENT_ENV: &str = "AZURE_OPENAI_DEPLOYMENT";
pub const AZURE_OPENAI_API_VERSION_ENV: &str = "AZURE_OPENAI_API_VERSION";

pub const DEFAULT_OUTPUT_DIR: &str = "./sitelens-results";
pub const DEFAULT_BROWSER_ENDPOINT: &str = "http://127.0.0.1:9222";

pub const DESKTOP_VIEWPORT: (u32, u32) = (1366, 900);
pub const MOBILE_VIEWPORT: (u32, u32) = (412, 915);

pub const DESKTOP_SCREENSHOT_FILE: &str = "desktop.png";
pub const MOBILE_SCREENSHOT_FILE: &str = "mobile.png";
pub const REPORT_FILE: &str = "report.json";

// Millisecond granularity keeps run directories sortable and collision-free.
pub const RUN_DIR_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%3f";

pub const EVALUATION_TIMEOUT_SECS: u64 = 120;
pub const EVALUATION_MAX_TOKENS: u32 = 4096;

pub const CDP_CALL_TIMEOUT_SECS: u64 = 30;
pub const PAGE_LOAD_TIMEOUT_SECS: u64 = 30;
pub const PAGE_LOAD_POLL_INTERVAL_MS: u64 = 250;

pub fn evaluation_timeout() -> Duration {
    Duration::from_secs(EVALUATION_TIMEOUT_SECS)
}

pub fn cdp_call_timeout() -> Duration {
    Duration::from_secs(CDP_CALL_TIMEOUT_SECS)
}

pub fn page_load_timeout() -> Duration {
    Duration::from_secs(PAGE_LOAD_TIMEOUT_SECS)
}

pub fn page_load_poll_interval() -> Duration {
    Duration::from_millis(PAGE_LOAD_POLL_INTERVAL_MS)
}
