pub struct Config;

impl Config {
    /// Base URL of the backend service. In development Trunk proxies
    /// `/auth`, `/rest` and `/functions` to the service, in production the
    /// same paths are proxied by nginx, so the default is a relative URL.
    /// A hosted deployment sets CLUBKIT_API_URL at build time instead.
    pub fn api_base_url() -> String {
        option_env!("CLUBKIT_API_URL").unwrap_or("").to_string()
    }

    /// Publishable API key sent with every data request. Row-level security
    /// on the backend is the actual authorization boundary.
    pub fn anon_key() -> String {
        option_env!("CLUBKIT_ANON_KEY").unwrap_or("").to_string()
    }
}
