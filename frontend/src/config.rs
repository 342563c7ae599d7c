use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_FALLBACK_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_APP_NAME: &str = "NewWork Frontend";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

const ENV_GLOBAL: &str = "__NEWWORK_ENV";

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn detect() -> Self {
        Self::parse(option_env!("NEWWORK_MODE")).unwrap_or(if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        })
    }

    fn parse(raw: Option<&str>) -> Option<Self> {
        match raw?.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(BuildMode::Development),
            "production" | "prod" => Some(BuildMode::Production),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

/// What to do with the session when an authenticated call comes back 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnauthorizedPolicy {
    /// Report the error on the calling resource only.
    #[default]
    Surface,
    /// Clear the stored token and drop the session back to unauthenticated.
    ExpireSession,
}

/// One configuration layer. Build-time env, `config.json` and `window.__NEWWORK_ENV`
/// each produce one of these; later layers win field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "FALLBACK_API_BASE_URL")]
    pub fallback_base_url: Option<String>,
    #[serde(default, alias = "APP_NAME")]
    pub app_name: Option<String>,
    #[serde(default, alias = "APP_VERSION")]
    pub app_version: Option<String>,
    #[serde(default, alias = "UNAUTHORIZED_POLICY")]
    pub unauthorized_policy: Option<UnauthorizedPolicy>,
}

impl RuntimeConfig {
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("NEWWORK_API_BASE_URL").map(str::to_string),
            fallback_base_url: option_env!("NEWWORK_FALLBACK_API_BASE_URL").map(str::to_string),
            app_name: option_env!("NEWWORK_APP_NAME").map(str::to_string),
            app_version: option_env!("NEWWORK_APP_VERSION").map(str::to_string),
            unauthorized_policy: None,
        }
    }

    pub fn merge(self, overlay: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: overlay.api_base_url.or(self.api_base_url),
            fallback_base_url: overlay.fallback_base_url.or(self.fallback_base_url),
            app_name: overlay.app_name.or(self.app_name),
            app_version: overlay.app_version.or(self.app_version),
            unauthorized_policy: overlay.unauthorized_policy.or(self.unauthorized_policy),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mode: BuildMode,
    pub api_base_url: String,
    pub fallback_base_url: String,
    pub app_name: String,
    pub app_version: String,
    pub unauthorized_policy: UnauthorizedPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentInfo {
    pub is_development: bool,
    pub is_production: bool,
    pub mode: &'static str,
    pub api_base_url: String,
    pub app_name: String,
    pub app_version: String,
}

impl AppConfig {
    pub fn resolve(mode: BuildMode, layers: RuntimeConfig) -> Self {
        let fallback_base_url = layers
            .fallback_base_url
            .unwrap_or_else(|| DEFAULT_FALLBACK_BASE_URL.to_string());
        let api_base_url =
            resolve_base_url(mode, layers.api_base_url.as_deref(), &fallback_base_url);
        Self {
            mode,
            api_base_url,
            fallback_base_url,
            app_name: non_blank(layers.app_name).unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_version: non_blank(layers.app_version)
                .unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
            unauthorized_policy: layers.unauthorized_policy.unwrap_or_default(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::resolve(BuildMode::detect(), RuntimeConfig::from_build_env())
    }

    pub fn is_same_origin(&self) -> bool {
        self.api_base_url.is_empty()
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        join_url(&self.api_base_url, endpoint)
    }

    pub fn environment_info(&self) -> EnvironmentInfo {
        EnvironmentInfo {
            is_development: self.mode == BuildMode::Development,
            is_production: self.mode == BuildMode::Production,
            mode: self.mode.as_str(),
            api_base_url: self.api_base_url.clone(),
            app_name: self.app_name.clone(),
            app_version: self.app_version.clone(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Development always goes through the same-origin proxy. Production uses the
/// configured origin, or the explicit fallback when none is set.
pub fn resolve_base_url(mode: BuildMode, configured: Option<&str>, fallback: &str) -> String {
    match mode {
        BuildMode::Development => String::new(),
        BuildMode::Production => match configured.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => url.to_string(),
            None => {
                log::warn!(
                    "API base URL not configured, falling back to {:?}",
                    fallback.trim()
                );
                fallback.trim().to_string()
            }
        },
    }
}

pub fn join_url(base: &str, endpoint: &str) -> String {
    let normalized = if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{}", endpoint)
    };
    if base.is_empty() {
        return normalized;
    }
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{}{}", base, normalized)
}

pub fn current() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::from_build_env)
}

pub fn api_url(endpoint: &str) -> String {
    current().api_url(endpoint)
}

pub fn environment_info() -> EnvironmentInfo {
    current().environment_info()
}

fn read_global_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn overrides_from_env_js() -> Option<RuntimeConfig> {
    // window.__NEWWORK_ENV = { API_BASE_URL: "...", APP_NAME: "...", ... }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &ENV_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    Some(RuntimeConfig {
        api_base_url: read_global_string(&obj, &["API_BASE_URL", "api_base_url"]),
        fallback_base_url: read_global_string(
            &obj,
            &["FALLBACK_API_BASE_URL", "fallback_base_url"],
        ),
        app_name: read_global_string(&obj, &["APP_NAME", "app_name"]),
        app_version: read_global_string(&obj, &["APP_VERSION", "app_version"]),
        unauthorized_policy: read_global_string(
            &obj,
            &["UNAUTHORIZED_POLICY", "unauthorized_policy"],
        )
        .and_then(|raw| serde_json::from_value(serde_json::Value::String(raw)).ok()),
    })
}

async fn overrides_from_config_json() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn init() -> &'static AppConfig {
    if let Some(existing) = APP_CONFIG.get() {
        log::debug!("Runtime config already resolved");
        return existing;
    }
    let mut layers = RuntimeConfig::from_build_env();
    if let Some(file) = overrides_from_config_json().await {
        layers = layers.merge(file);
    }
    if let Some(env) = overrides_from_env_js() {
        layers = layers.merge(env);
    }
    let resolved = AppConfig::resolve(BuildMode::detect(), layers);
    let config = APP_CONFIG.get_or_init(|| resolved);
    log::info!("API configuration: {:?}", config.environment_info());
    config
}

/// Fire-and-forget reachability check. Only logs; never touches app state.
pub fn spawn_connectivity_probe(config: &'static AppConfig) {
    if config.mode != BuildMode::Production {
        return;
    }
    let url = crate::api::absolute_url(config.api_url("/api/config"));
    log::info!("Testing API connectivity at {}", url);
    leptos::spawn_local(async move {
        match reqwest::get(&url).await {
            Ok(response) => log::info!("API is reachable: {}", response.status()),
            Err(err) => {
                log::error!("API connection failed: {}", err);
                log::info!("This might be a CORS issue or the backend is not running");
            }
        }
    });
}
