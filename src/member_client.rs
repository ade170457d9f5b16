use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use std::{fmt, time};

use crate::config::ServiceHttpSettings;
use crate::domain::member_id::MemberId;
use crate::domain::member_info::MemberInfo;
use crate::error_chain_fmt;
use crate::json_codec::{CodecError, JsonCodec, APPLICATION_JSON, APPLICATION_JSON_UTF8};

pub const X_EXTRA_HEADER: &str = "X-EXTRA-ID";
const MEMBER_INFO_URL: &str = "{host}/api/v1/member-info";
const HOST_PLACEHOLDER: &str = "{host}";

/// URL with a `{host}` placeholder, filled in on every call.
#[derive(Debug, Clone)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> UrlTemplate {
        UrlTemplate(template.into())
    }

    pub fn expand(&self, host: &str) -> Result<Url, url::ParseError> {
        Url::parse(&self.0.replace(HOST_PLACEHOLDER, host.trim_end_matches('/')))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutPhase {
    Connect,
    Read,
}

impl fmt::Display for TimeoutPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutPhase::Connect => write!(f, "connect"),
            TimeoutPhase::Read => write!(f, "read"),
        }
    }
}

#[derive(thiserror::Error)]
pub enum MemberClientError {
    #[error("Failed to connect to the member service.")]
    Connect(#[source] reqwest::Error),
    #[error("Member service did not answer within the {phase} timeout.")]
    Timeout { phase: TimeoutPhase },
    #[error("Member service answered with status {0}.")]
    Status(StatusCode),
    #[error("Failed to exchange a request with the member service.")]
    Transport(#[source] reqwest::Error),
    #[error("Failed to decode the member service response.")]
    Decode(#[from] CodecError),
    #[error("Member service url is not valid.")]
    InvalidUrl(#[from] url::ParseError),
}

impl fmt::Debug for MemberClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<reqwest::Error> for MemberClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() && err.is_timeout() {
            MemberClientError::Timeout {
                phase: TimeoutPhase::Connect,
            }
        } else if err.is_connect() {
            MemberClientError::Connect(err)
        } else if err.is_timeout() {
            MemberClientError::Timeout {
                phase: TimeoutPhase::Read,
            }
        } else {
            MemberClientError::Transport(err)
        }
    }
}

fn read_timed_out(_: tokio::time::error::Elapsed) -> MemberClientError {
    MemberClientError::Timeout {
        phase: TimeoutPhase::Read,
    }
}

#[derive(Debug)]
pub struct MemberClient {
    http_client: Client,
    url_template: UrlTemplate,
    host: String,
    connect_timeout: time::Duration,
    read_timeout: time::Duration,
    write_timeout: time::Duration,
    codec: JsonCodec,
}

impl MemberClient {
    pub fn new(
        host: String,
        settings: &ServiceHttpSettings,
        codec: JsonCodec,
    ) -> Result<MemberClient, MemberClientError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        default_headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_JSON_UTF8),
        );

        let http_client = Client::builder()
            .connect_timeout(settings.get_connection_timeout())
            .default_headers(default_headers)
            .build()
            .map_err(MemberClientError::Transport)?;
        let url_template = UrlTemplate::new(MEMBER_INFO_URL);
        url_template.expand(&host)?;

        Ok(MemberClient {
            http_client,
            url_template,
            host,
            connect_timeout: settings.get_connection_timeout(),
            read_timeout: settings.get_read_timeout(),
            write_timeout: settings.get_write_timeout(),
            codec,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Bound on connecting, writing the request and receiving the response head.
    ///
    /// reqwest runs all three inside a single future. The connect allowance is
    /// part of it so a stalled connect is still reported by reqwest's own
    /// connect timeout.
    fn response_head_timeout(&self) -> time::Duration {
        self.connect_timeout + self.write_timeout + self.read_timeout
    }

    /// Fetches one member. Nothing is retried.
    ///
    /// The body is read chunk by chunk and `read_timeout` is the longest silence
    /// allowed between two chunks, not a bound on the whole body.
    #[tracing::instrument(
        name = "Fetching member info from the member service",
        skip(self),
        fields(member_id = %member_id, host = %self.host)
    )]
    pub async fn get_member_info(
        &self,
        member_id: &MemberId,
    ) -> Result<MemberInfo, MemberClientError> {
        let url = self.url_template.expand(&self.host)?;

        let request = self
            .http_client
            .get(url)
            .header(header::CONTENT_TYPE, APPLICATION_JSON_UTF8)
            .header(X_EXTRA_HEADER, member_id.to_string())
            .send();

        let mut response = tokio::time::timeout(self.response_head_timeout(), request)
            .await
            .map_err(read_timed_out)??;

        let status = response.status();
        if !status.is_success() {
            return Err(MemberClientError::Status(status));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);

        let mut body = Vec::new();
        while let Some(chunk) = tokio::time::timeout(self.read_timeout, response.chunk())
            .await
            .map_err(read_timed_out)??
        {
            body.extend_from_slice(&chunk);
        }

        let member_info = self.codec.decode(content_type.as_deref(), &body)?;

        Ok(member_info)
    }
}
