use crate::app::ports::{HttpClientPort, HttpGetResult};
use crate::constants::{HTTP_TIMEOUT_SECS, USER_AGENT};
use reqwest::blocking::Client;
use std::time::Duration;

pub struct ReqwestHttp {
    client: Client,
}

impl ReqwestHttp {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl HttpClientPort for ReqwestHttp {
    fn get(&self, url: &str) -> Result<HttpGetResult, reqwest::Error> {
        tracing::info!("HTTP GET request to: {}", url);
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        tracing::info!("HTTP response: status={}, size={} bytes", status, body.len());
        Ok(HttpGetResult { status, body })
    }
}
