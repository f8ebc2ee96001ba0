//! HTTP client for the dashboard backend.
//!
//! One typed endpoint per route: `ApiClient::fetch::<Cryptos>()` issues the
//! GET, checks the status and decodes the JSON body into the record types.

use anyhow::{Context, Result as AnyResult};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::config::API;
use crate::domain::{BitcoinKpis, CoinRecord, HistoryPoint, ProxyRecord};
use crate::error::FetchError;

/// JSON layout a route answers with. Records are always objects: serde
/// would otherwise map a bare array onto struct fields by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    Object,
    ListOfObjects,
}

impl BodyShape {
    fn check(self, value: &Value) -> Result<(), serde_json::Error> {
        let ok = match self {
            BodyShape::Object => value.is_object(),
            BodyShape::ListOfObjects => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_object)),
        };
        if ok {
            Ok(())
        } else {
            Err(serde_json::Error::custom(match self {
                BodyShape::Object => "expected a JSON object",
                BodyShape::ListOfObjects => "expected a JSON array of objects",
            }))
        }
    }
}

/// A GET route and the type its JSON body decodes into.
pub trait Endpoint {
    type Output: DeserializeOwned + Send + 'static;
    const PATH: &'static str;
    const SHAPE: BodyShape;

    fn decode(body: &[u8]) -> Result<Self::Output, FetchError> {
        let decode_error = |source| FetchError::Decode {
            endpoint: Self::PATH,
            source,
        };
        let value: Value = serde_json::from_slice(body).map_err(decode_error)?;
        Self::SHAPE.check(&value).map_err(decode_error)?;
        serde_json::from_value(value).map_err(decode_error)
    }
}

pub struct Cryptos;
pub struct BitcoinKpisEndpoint;
pub struct BitcoinHistory;
pub struct Proxies;

impl Endpoint for Cryptos {
    type Output = Vec<CoinRecord>;
    const PATH: &'static str = API.endpoints.cryptos;
    const SHAPE: BodyShape = BodyShape::ListOfObjects;
}

impl Endpoint for BitcoinKpisEndpoint {
    type Output = BitcoinKpis;
    const PATH: &'static str = API.endpoints.bitcoin_kpis;
    const SHAPE: BodyShape = BodyShape::Object;
}

impl Endpoint for BitcoinHistory {
    type Output = Vec<HistoryPoint>;
    const PATH: &'static str = API.endpoints.bitcoin_history;
    const SHAPE: BodyShape = BodyShape::ListOfObjects;
}

impl Endpoint for Proxies {
    type Output = Vec<ProxyRecord>;
    const PATH: &'static str = API.endpoints.proxies;
    const SHAPE: BodyShape = BodyShape::ListOfObjects;
}

/// Shape of the backend's error bodies, e.g. the KPI route's 503.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> AnyResult<Self> {
        let parsed = Url::parse(base_url)
            .with_context(|| format!("invalid dashboard API base URL: {base_url:?}"))?;
        if parsed.cannot_be_a_base() {
            anyhow::bail!("dashboard API base URL cannot carry paths: {base_url:?}");
        }

        Ok(Self {
            http: build_http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url<E: Endpoint>(&self) -> String {
        format!("{}{}", self.base_url, E::PATH)
    }

    pub async fn fetch<E: Endpoint>(&self) -> Result<E::Output, FetchError> {
        let response = self
            .http
            .get(self.endpoint_url::<E>())
            .send()
            .await
            .map_err(|err| FetchError::network(E::PATH, err))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::network(E::PATH, err))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: E::PATH,
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        E::decode(&body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> AnyResult<Client> {
    Client::builder()
        .timeout(API.timeout())
        .build()
        .context("failed to build HTTP client")
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> AnyResult<Client> {
    Client::builder()
        .build()
        .context("failed to build HTTP client")
}

/// Best-effort human message for a failed response.
fn error_message(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return parsed.error;
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        "empty response body".to_string()
    } else {
        text.chars().take(200).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_join_without_double_slash() {
        let client = ApiClient::new("http://localhost:5000/").expect("valid base url");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.endpoint_url::<BitcoinHistory>(),
            "http://localhost:5000/api/bitcoin/history"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(ApiClient::new("localhost without scheme").is_err());
        assert!(ApiClient::new("mailto:ops@example.com").is_err());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = Cryptos::decode(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode { endpoint: "/api/cryptos", .. }));

        let err = BitcoinKpisEndpoint::decode(br#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode { endpoint: "/api/bitcoin/kpis", .. }));
    }

    #[test]
    fn positional_rows_are_rejected() {
        assert!(BitcoinKpisEndpoint::decode(br#"[104000, -1.5, 2.0e12]"#).is_err());
        assert!(Cryptos::decode(br#"[["Bitcoin", "btc", 104000]]"#).is_err());
        assert!(BitcoinHistory::decode(br#"[["2025-06-01", 104000]]"#).is_err());
        assert!(Proxies::decode(br#"[{"ticker": "IBIT", "type": "etf"}, ["MSTR"]]"#).is_err());
        assert!(Cryptos::decode(br#"{"name": "Bitcoin"}"#).is_err());
    }

    #[test]
    fn well_formed_bodies_still_decode() {
        let kpis = BitcoinKpisEndpoint::decode(br#"{"price": 104000, "ath": "$111,970.00"}"#)
            .expect("kpi object should decode");
        assert_eq!(kpis.price, Some(104_000.0));
        assert_eq!(kpis.ath, Some(111_970.0));

        let history = BitcoinHistory::decode(br#"[{"date": "2025-06-01", "price": 104000}]"#)
            .expect("history should decode");
        assert_eq!(history.len(), 1);
        assert!(Cryptos::decode(b"[]").expect("empty list").is_empty());
    }

    #[test]
    fn backend_error_body_is_surfaced() {
        let body = br#"{"error": "KPI data not available, try again soon."}"#;
        assert_eq!(error_message(body), "KPI data not available, try again soon.");
        assert_eq!(error_message(b"  "), "empty response body");
        assert_eq!(error_message(b"Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn proxies_body_decodes() {
        let body = br#"[{"ticker": "IBIT", "name": "iShares Bitcoin Trust", "type": "etf", "btc": 661000}]"#;
        let proxies = Proxies::decode(body).expect("proxies should decode");
        assert_eq!(proxies.len(), 1);
        assert_eq!(proxies[0].ticker, "IBIT");
    }
}
