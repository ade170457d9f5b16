use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::domain::member_id::MemberId;
use crate::error_chain_fmt;
use crate::json_codec::{CodecError, JsonCodec};
use crate::member_client::{MemberClient, MemberClientError};

#[tracing::instrument(
    name = "Get member info handler",
    skip(member_client, codec),
    fields(member_id = %path)
)]
pub async fn get_member_info(
    path: web::Path<i64>,
    member_client: web::Data<MemberClient>,
    codec: web::Data<JsonCodec>,
) -> Result<HttpResponse, MemberInfoError> {
    let member_id = MemberId::parse(path.into_inner()).map_err(MemberInfoError::InvalidMemberId)?;

    let member_info = member_client.get_member_info(&member_id).await?;
    let body = codec.encode(&member_info).map_err(MemberInfoError::Encode)?;

    Ok(HttpResponse::Ok().content_type(codec.media_type()).body(body))
}

#[derive(thiserror::Error)]
pub enum MemberInfoError {
    #[error("{0}")]
    InvalidMemberId(String),
    #[error("Failed to fetch member info from the member service.")]
    Upstream(#[from] MemberClientError),
    #[error("Failed to encode member info.")]
    Encode(#[source] CodecError),
}

impl std::fmt::Debug for MemberInfoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for MemberInfoError {
    fn status_code(&self) -> StatusCode {
        match self {
            MemberInfoError::InvalidMemberId(_) => StatusCode::BAD_REQUEST,
            MemberInfoError::Upstream(MemberClientError::Timeout { .. }) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            MemberInfoError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MemberInfoError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Failures never carry a payload
    fn error_response(&self) -> HttpResponse {
        HttpResponse::new(self.status_code())
    }
}
