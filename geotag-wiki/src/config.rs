use tracing::warn;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_WIKIDATA_API: &str = "https://www.wikidata.org/w/api.php";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("geotag/", env!("CARGO_PKG_VERSION"));

pub const ENV_LANGUAGE: &str = "GEOTAG_LANG";
pub const ENV_WIKIPEDIA_API: &str = "GEOTAG_WIKIPEDIA_API";
pub const ENV_WIKIDATA_API: &str = "GEOTAG_WIKIDATA_API";
pub const ENV_TIMEOUT_SECS: &str = "GEOTAG_TIMEOUT_SECS";

/// Endpoints and HTTP settings for the Wikipedia/Wikidata client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiConfig {
    pub language: String,
    pub wikipedia_api: String,
    pub wikidata_api: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl WikiConfig {
    /// Configuration targeting the Wikipedia edition for `language`
    pub fn for_language(language: &str) -> Self {
        Self {
            language: language.to_string(),
            wikipedia_api: wikipedia_api_for(language),
            wikidata_api: DEFAULT_WIKIDATA_API.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Defaults overridden by the `GEOTAG_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let language = lookup(ENV_LANGUAGE)
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let mut config = Self::for_language(&language);

        if let Some(api) = lookup(ENV_WIKIPEDIA_API) {
            config.wikipedia_api = api;
        }
        if let Some(api) = lookup(ENV_WIKIDATA_API) {
            config.wikidata_api = api;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid {} value '{}', using {}s",
                    ENV_TIMEOUT_SECS, raw, config.timeout_secs
                ),
            }
        }

        config
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self::for_language(DEFAULT_LANGUAGE)
    }
}

fn wikipedia_api_for(language: &str) -> String {
    format!("https://{}.wikipedia.org/w/api.php", language)
}
