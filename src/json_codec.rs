use serde::{de::DeserializeOwned, Serialize};
use serde_json::error::Category;

use crate::error_chain_fmt;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_JSON_UTF8: &str = "application/json;charset=UTF-8";

/// Field omission policies used with `#[serde(skip_serializing_if = ...)]`.
pub mod omit {
    pub fn if_unset<T>(value: &Option<T>) -> bool {
        value.is_none()
    }

    pub fn if_zero<T: Default + PartialEq>(value: &T) -> bool {
        *value == T::default()
    }

    pub fn if_unset_or_zero<T: Default + PartialEq>(value: &Option<T>) -> bool {
        value.as_ref().map_or(true, if_zero)
    }
}

#[derive(thiserror::Error)]
pub enum CodecError {
    #[error("Payload is not valid JSON.")]
    Malformed(#[source] serde_json::Error),
    #[error("Payload does not match the expected model.")]
    Mapping(#[source] serde_json::Error),
    #[error("{0} is not a supported JSON media type.")]
    UnsupportedMediaType(String),
    #[error("Failed to encode the payload.")]
    Encode(#[source] serde_json::Error),
}

impl std::fmt::Debug for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// JSON rules shared by the upstream client and the route handlers.
///
/// Built once at startup and handed to whoever needs it; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct JsonCodec {
    media_type: String,
}

impl Default for JsonCodec {
    fn default() -> Self {
        JsonCodec::new(APPLICATION_JSON_UTF8)
    }
}

impl JsonCodec {
    pub fn new(media_type: impl Into<String>) -> JsonCodec {
        JsonCodec {
            media_type: media_type.into(),
        }
    }

    /// Media type written on encoded payloads.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// A missing content type is accepted and parsed as JSON.
    pub fn supports(&self, content_type: Option<&str>) -> bool {
        let Some(content_type) = content_type else {
            return true;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        essence == APPLICATION_JSON || essence.ends_with("+json")
    }

    pub fn decode<T: DeserializeOwned>(
        &self,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<T, CodecError> {
        if !self.supports(content_type) {
            return Err(CodecError::UnsupportedMediaType(
                content_type.unwrap_or_default().to_string(),
            ));
        }

        serde_json::from_slice(body).map_err(|err| match err.classify() {
            Category::Data => CodecError::Mapping(err),
            Category::Syntax | Category::Eof | Category::Io => CodecError::Malformed(err),
        })
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(CodecError::Encode)
    }
}
