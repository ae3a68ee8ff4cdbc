// Re-export all API modules
pub mod auth;
pub mod centers;
pub mod clubs;
pub mod coaches;
pub mod events;
pub mod messages;
pub mod players;
pub mod profiles;
pub mod teams;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}
