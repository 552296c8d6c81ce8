use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub confirmed: bool,
}

/// Values rendered into the status page
#[derive(Debug, Serialize)]
pub struct StatusView<'a> {
    pub url: &'a str,
    pub version: &'a str,
    pub yes: bool,
}
