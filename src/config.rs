pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Where the page finds the events API. Provided once at the root of the app through context.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_API_BASE_URL)
    }
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Config {
            api_base_url: api_base_url.into(),
        }
    }

    /// Listing endpoint without its query string; the company is attached by the client.
    pub fn events_url(&self) -> String {
        format!("{}/events", self.base())
    }

    pub fn register_url(&self) -> String {
        format!("{}/events/register", self.base())
    }

    fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
