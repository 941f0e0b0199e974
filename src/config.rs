use std::{env, net::SocketAddr, time::Duration};

use thiserror::Error;

use crate::generation::ChatCompletionConfig;
use crate::generation::external::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TOP_P,
};

const DEFAULT_HTTP_BIND: &str = "0.0.0.0:9010";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    http_bind: SocketAddr,
    api_key: String,
    api_url: String,
    model: String,
    request_timeout: Duration,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    platform_fan_out: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl Config {
    /// 環境変数から Content Distributor の設定値を読み込み、検証する。
    ///
    /// # Errors
    /// `PPLX_API_KEY` が未設定、もしくは各種値のパースや範囲検証に失敗した場合は [`ConfigError`] を返す。
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_var("PPLX_API_KEY")?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "PPLX_API_KEY",
                source: anyhow::anyhow!("must not be blank"),
            });
        }
        let http_bind = parse_socket_addr("CONTENT_WORKER_HTTP_BIND", DEFAULT_HTTP_BIND)?;
        let api_url = env::var("PPLX_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let model = env::var("PPLX_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let request_timeout = parse_duration_secs("LLM_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let temperature = parse_f64_in(
            "LLM_TEMPERATURE",
            DEFAULT_TEMPERATURE,
            "between 0 and 2",
            |value| (0.0..=2.0).contains(&value),
        )?;
        let max_tokens = parse_u32("LLM_MAX_TOKENS", DEFAULT_MAX_TOKENS)?;
        let top_p = parse_f64_in(
            "LLM_TOP_P",
            DEFAULT_TOP_P,
            "greater than 0 and at most 1",
            |value| value > 0.0 && value <= 1.0,
        )?;
        let platform_fan_out = parse_bool("PLATFORM_FAN_OUT", true)?;

        Ok(Self {
            http_bind,
            api_key,
            api_url,
            model,
            request_timeout,
            temperature,
            max_tokens,
            top_p,
            platform_fan_out,
        })
    }

    #[must_use]
    pub fn http_bind(&self) -> SocketAddr {
        self.http_bind
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[must_use]
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    #[must_use]
    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    #[must_use]
    pub fn platform_fan_out(&self) -> bool {
        self.platform_fan_out
    }

    /// Settings for the chat-completion client, credential included.
    #[must_use]
    pub fn chat_completion_config(&self) -> ChatCompletionConfig {
        ChatCompletionConfig {
            endpoint: self.api_url.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            timeout: self.request_timeout,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
        }
    }
}

fn env_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_socket_addr(name: &'static str, default: &str) -> Result<SocketAddr, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());

    raw.parse().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })
}

fn parse_duration_secs(name: &'static str, default_secs: u64) -> Result<Duration, ConfigError> {
    let value = parse_u64(name, default_secs)?;
    if value == 0 {
        return Err(ConfigError::Invalid {
            name,
            source: anyhow::anyhow!("must be greater than zero"),
        });
    }
    Ok(Duration::from_secs(value))
}

fn parse_u32(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.parse::<u32>().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })
}

fn parse_u64(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.parse::<u64>().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })
}

fn parse_f64_in(
    name: &'static str,
    default: f64,
    expected: &str,
    in_range: impl Fn(f64) -> bool,
) -> Result<f64, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    let parsed = raw.parse::<f64>().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })?;
    if !in_range(parsed) {
        return Err(ConfigError::Invalid {
            name,
            source: anyhow::anyhow!("{parsed} is out of range, value must be {expected}"),
        });
    }
    Ok(parsed)
}

fn parse_bool(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            source: anyhow::anyhow!("invalid boolean value: {raw}"),
        }),
    }
}
