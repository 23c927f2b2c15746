//! JMA bosai API client

use serde::de::DeserializeOwned;

use crate::catalog::{AreaDocument, RegionCatalog};
use crate::forecast::ForecastPublisher;

/// Area catalog (centers and offices)
pub const AREA_URL: &str = "http://www.jma.go.jp/bosai/common/const/area.json";

/// Forecast documents live at `<base>/<office code>.json`
pub const FORECAST_BASE_URL: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast";

const USER_AGENT: &str = concat!("jma-forecast/", env!("CARGO_PKG_VERSION"));

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where the two documents are fetched from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub area_url: String,
    pub forecast_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            area_url: AREA_URL.to_string(),
            forecast_base_url: FORECAST_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn forecast_url(&self, region_code: &str) -> String {
        format!(
            "{}/{}.json",
            self.forecast_base_url.trim_end_matches('/'),
            urlencoding::encode(region_code)
        )
    }
}

/// HTTP client for the catalog and forecast endpoints.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct JmaClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl JmaClient {
    pub fn new(endpoints: Endpoints) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn try_fetch_areas(&self) -> Result<RegionCatalog, FetchError> {
        let doc: AreaDocument = self.get_json(&self.endpoints.area_url).await?;
        Ok(doc.into())
    }

    /// Fetch the area catalog. Failures are logged and yield an empty catalog.
    pub async fn fetch_areas(&self) -> RegionCatalog {
        match self.try_fetch_areas().await {
            Ok(catalog) => {
                tracing::info!(
                    centers = catalog.centers.len(),
                    offices = catalog.offices.len(),
                    "area catalog loaded"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(url = %self.endpoints.area_url, error = %e, "error fetching areas");
                RegionCatalog::default()
            }
        }
    }

    pub async fn try_fetch_forecast(
        &self,
        region_code: &str,
    ) -> Result<Vec<ForecastPublisher>, FetchError> {
        self.get_json(&self.endpoints.forecast_url(region_code))
            .await
    }

    /// Fetch the forecast for one office. Failures are logged and yield `None`.
    pub async fn fetch_forecast(&self, region_code: &str) -> Option<Vec<ForecastPublisher>> {
        match self.try_fetch_forecast(region_code).await {
            Ok(publishers) => Some(publishers),
            Err(e) => {
                tracing::warn!(code = region_code, error = %e, "error fetching forecast");
                None
            }
        }
    }
}
