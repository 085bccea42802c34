//! Live smoke tests against the real service.
//!
//! Disabled unless `CHIMECTL_LIVE_TEST=on` and credentials are present in
//! the environment (`CHIME_ACCESS_KEY_ID`, `CHIME_SECRET_ACCESS_KEY`).

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use chimectl_client::{ChimeClient, DefaultCredentialProvider, RequestSigner};
use chimectl_core::{Context, Error, HttpSend, OsEnv, Signer};
use std::env;

#[derive(Debug, Default)]
struct ReqwestHttpSend {
    client: reqwest::Client,
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
    ) -> chimectl_core::Result<http::Response<Bytes>> {
        let req = reqwest::Request::try_from(req)
            .map_err(|e| Error::unexpected("failed to convert request").with_source(e))?;
        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::unexpected("failed to send request").with_source(e))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::unexpected("failed to read response body").with_source(e))?;

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.headers_mut() = headers;
        Ok(out)
    }
}

fn init_client() -> Option<ChimeClient> {
    let _ = env_logger::builder().is_test(true).try_init();

    if env::var("CHIMECTL_LIVE_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let signer = Signer::new(
        ctx.clone(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );

    Some(ChimeClient::new(ctx, signer))
}

#[tokio::test]
async fn test_list_meetings_live() -> Result<()> {
    let Some(client) = init_client() else {
        return Ok(());
    };

    let meetings = client.list_meetings().await?;
    log::info!("listed {} meetings", meetings.len());

    Ok(())
}

#[tokio::test]
async fn test_missing_meeting_maps_to_not_found() -> Result<()> {
    let Some(client) = init_client() else {
        return Ok(());
    };

    let err = client
        .get_meeting("00000000-0000-0000-0000-000000000000")
        .await
        .unwrap_err();
    assert!(matches!(err, chimectl_client::ApiError::NotFound { .. }));

    Ok(())
}
