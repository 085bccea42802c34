use crate::constants::{
    CHIME_ENDPOINT, PATH_SEGMENT_ENCODE_SET, QUERY_ENCODE_SET, X_AMZ_CONTENT_SHA_256,
};
use crate::{ApiError, Credential};
use bytes::Bytes;
use chimectl_core::hash::hex_sha256;
use chimectl_core::{Context, Signer};
use http::{header, HeaderValue, Method};
use log::debug;
use percent_encoding::utf8_percent_encode;
use serde::Serialize;
use serde_json::Value;

/// Which top-level field a list response unwraps to.
///
/// Resolved explicitly per operation instead of probing the response shape
/// at runtime. A response without the field is an empty list.
#[derive(Debug, Clone, Copy)]
enum ListKind {
    Meetings,
    Attendees,
    Channels,
}

impl ListKind {
    fn field(self) -> &'static str {
        match self {
            ListKind::Meetings => "Meetings",
            ListKind::Attendees => "Attendees",
            ListKind::Channels => "Channels",
        }
    }
}

/// Input for the create-meeting operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMeetingInput {
    /// Idempotency token, unique per logical creation.
    pub client_request_token: String,
    /// Caller-assigned meeting identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_meeting_id: Option<String>,
    /// Media placement region hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_region: Option<String>,
}

/// Input for the create-attendee operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAttendeeInput {
    /// Caller-assigned user identifier.
    pub external_user_id: String,
}

/// Input for the create-channel operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateChannelInput {
    /// Channel display name.
    pub name: String,
    /// Messaging instance the channel belongs to.
    pub app_instance_arn: String,
    /// Idempotency token, unique per logical creation.
    pub client_request_token: String,
}

/// Thin client over the meeting, attendee, and channel resource families.
///
/// Each method performs exactly one signed network round trip through the
/// context's transport and translates failures into [`ApiError`]. There are
/// no retries and no local state beyond the signer's credential cache.
#[derive(Debug)]
pub struct ChimeClient {
    ctx: Context,
    signer: Signer<Credential>,
    endpoint: String,
}

impl ChimeClient {
    /// Create a new client against the fixed deployment endpoint.
    pub fn new(ctx: Context, signer: Signer<Credential>) -> Self {
        Self {
            ctx,
            signer,
            endpoint: CHIME_ENDPOINT.to_string(),
        }
    }

    /// Percent-encode one path segment, including any reserved characters
    /// the identifier may carry.
    fn encode_segment(segment: &str) -> String {
        utf8_percent_encode(segment, &PATH_SEGMENT_ENCODE_SET).to_string()
    }

    /// Issue one signed request and return the response body, translating
    /// error statuses and transport failures.
    async fn send(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Bytes>,
    ) -> Result<Bytes, ApiError> {
        let payload = body.unwrap_or_default();
        let uri = format!("{}{}", self.endpoint, path_and_query);
        debug!("sending {method} {uri}");

        let mut parts = http::Request::builder()
            .method(method)
            .uri(uri.as_str())
            .body(())
            .map_err(|e| ApiError::from_signing(e.into()))?
            .into_parts()
            .0;

        parts.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        parts.headers.insert(
            X_AMZ_CONTENT_SHA_256,
            HeaderValue::from_str(&hex_sha256(&payload))
                .map_err(|e| ApiError::from_signing(e.into()))?,
        );

        self.signer
            .sign(&mut parts, None)
            .await
            .map_err(ApiError::from_signing)?;

        let req = http::Request::from_parts(parts, payload);
        let resp = self
            .ctx
            .http_send(req)
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        let status = resp.status();
        let body = resp.into_body();
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::from_status(
                status.as_u16(),
                ApiError::message_from_body(&body),
            ))
        }
    }

    async fn fetch_json(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Bytes>,
    ) -> Result<Value, ApiError> {
        let body = self.send(method, path_and_query, body).await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_list(&self, kind: ListKind, path_and_query: &str) -> Result<Vec<Value>, ApiError> {
        let value = self.fetch_json(Method::GET, path_and_query, None).await?;

        Ok(match value.get(kind.field()) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        })
    }

    fn encode_body(input: &impl Serialize) -> Result<Bytes, ApiError> {
        Ok(Bytes::from(serde_json::to_vec(input)?))
    }

    /// List all meetings.
    pub async fn list_meetings(&self) -> Result<Vec<Value>, ApiError> {
        self.fetch_list(ListKind::Meetings, "/meetings").await
    }

    /// Fetch one meeting by id.
    pub async fn get_meeting(&self, meeting_id: &str) -> Result<Value, ApiError> {
        let path = format!("/meetings/{}", Self::encode_segment(meeting_id));
        self.fetch_json(Method::GET, &path, None).await
    }

    /// Create a meeting.
    pub async fn create_meeting(&self, input: &CreateMeetingInput) -> Result<Value, ApiError> {
        self.fetch_json(Method::POST, "/meetings", Some(Self::encode_body(input)?))
            .await
    }

    /// Delete a meeting by id.
    pub async fn delete_meeting(&self, meeting_id: &str) -> Result<(), ApiError> {
        let path = format!("/meetings/{}", Self::encode_segment(meeting_id));
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }

    /// List the attendees of a meeting.
    pub async fn list_attendees(&self, meeting_id: &str) -> Result<Vec<Value>, ApiError> {
        let path = format!("/meetings/{}/attendees", Self::encode_segment(meeting_id));
        self.fetch_list(ListKind::Attendees, &path).await
    }

    /// Fetch one attendee of a meeting.
    pub async fn get_attendee(
        &self,
        meeting_id: &str,
        attendee_id: &str,
    ) -> Result<Value, ApiError> {
        let path = format!(
            "/meetings/{}/attendees/{}",
            Self::encode_segment(meeting_id),
            Self::encode_segment(attendee_id)
        );
        self.fetch_json(Method::GET, &path, None).await
    }

    /// Add an attendee to a meeting.
    pub async fn create_attendee(
        &self,
        meeting_id: &str,
        input: &CreateAttendeeInput,
    ) -> Result<Value, ApiError> {
        let path = format!("/meetings/{}/attendees", Self::encode_segment(meeting_id));
        self.fetch_json(Method::POST, &path, Some(Self::encode_body(input)?))
            .await
    }

    /// Remove an attendee from a meeting.
    pub async fn delete_attendee(&self, meeting_id: &str, attendee_id: &str) -> Result<(), ApiError> {
        let path = format!(
            "/meetings/{}/attendees/{}",
            Self::encode_segment(meeting_id),
            Self::encode_segment(attendee_id)
        );
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }

    /// List channels, optionally scoped to one messaging instance.
    pub async fn list_channels(&self, app_instance_arn: Option<&str>) -> Result<Vec<Value>, ApiError> {
        let path = match app_instance_arn {
            Some(arn) => format!(
                "/channels?app-instance-arn={}",
                utf8_percent_encode(arn, &QUERY_ENCODE_SET)
            ),
            None => "/channels".to_string(),
        };
        self.fetch_list(ListKind::Channels, &path).await
    }

    /// Fetch one channel by ARN.
    pub async fn get_channel(&self, channel_arn: &str) -> Result<Value, ApiError> {
        let path = format!("/channels/{}", Self::encode_segment(channel_arn));
        self.fetch_json(Method::GET, &path, None).await
    }

    /// Create a channel.
    pub async fn create_channel(&self, input: &CreateChannelInput) -> Result<Value, ApiError> {
        self.fetch_json(Method::POST, "/channels", Some(Self::encode_body(input)?))
            .await
    }

    /// Delete a channel by ARN.
    pub async fn delete_channel(&self, channel_arn: &str) -> Result<(), ApiError> {
        let path = format!("/channels/{}", Self::encode_segment(channel_arn));
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }
}
