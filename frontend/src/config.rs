use lucky_shared::lucky_wheel::WheelConfig;
use web_sys::window;

const DEV_API_BASE_URL: &str = "http://127.0.0.1:3000";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            // Same origin as the page, so the app works behind any host or port
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    // Default to 127.0.0.1 for development
    DEV_API_BASE_URL.to_string()
}

pub fn wheel_config() -> WheelConfig {
    WheelConfig::default()
}
