/// Blocking page fetch used by the extractor
pub trait HttpClientPort {
    fn get(&self, url: &str) -> Result<HttpGetResult, reqwest::Error>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub body: String,
}

impl HttpGetResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
