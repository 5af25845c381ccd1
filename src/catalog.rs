//! Catalog fetcher
//!
//! `GET {endpoint}/products` lists the whole catalog and
//! `GET {endpoint}/products/search?value=<text>` filters it. The backend
//! reports failures as `{ "success": false, "message": "..." }`.

use crate::config::Config;
use crate::error::{QkartError, Result};
use crate::product::Product;
use serde::Deserialize;

/// Anything that can answer catalog queries. The TUI worker only talks to
/// this trait, so tests can substitute an in-memory catalog.
pub trait CatalogSource: Send + Sync {
    /// Fetch every product
    fn load_all(&self) -> Result<Vec<Product>>;

    /// Fetch products matching `query`. A 404 from the backend comes back
    /// as [`QkartError::NotFound`].
    fn search(&self, query: &str) -> Result<Vec<Product>>;
}

/// Error body sent by the backend. `success` is always false and not kept.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Blocking HTTP client for the products API
pub struct HttpCatalog {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpCatalog {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch(&self, request: reqwest::blocking::RequestBuilder) -> Result<Vec<Product>> {
        let resp = request.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        parse_products_response(status, &body)
    }
}

impl CatalogSource for HttpCatalog {
    fn load_all(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.endpoint);
        tracing::debug!(%url, "loading catalog");

        let products = self.fetch(self.client.get(&url))?;
        tracing::info!(count = products.len(), "catalog loaded");
        Ok(products)
    }

    fn search(&self, query: &str) -> Result<Vec<Product>> {
        let url = format!("{}/products/search", self.endpoint);
        tracing::debug!(%url, query, "searching catalog");

        let products = self.fetch(self.client.get(&url).query(&[("value", query)]))?;
        tracing::info!(query, count = products.len(), "search complete");
        Ok(products)
    }
}

/// Turn a raw status + body into products or a classified error.
pub fn parse_products_response(status: u16, body: &str) -> Result<Vec<Product>> {
    match status {
        200..=299 => Ok(serde_json::from_str(body)?),
        404 => Err(QkartError::NotFound),
        _ => match serde_json::from_str::<ErrorBody>(body) {
            Ok(err) => Err(QkartError::Backend {
                status,
                message: err.message,
            }),
            Err(_) => Err(QkartError::Http { status }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "name": "iPhone XR",
            "category": "Phones",
            "cost": 100,
            "rating": 4,
            "image": "https://i.imgur.com/lulqWzW.jpg",
            "_id": "v4sLtEcMpzabRyfx"
        },
        {
            "name": "Basketball",
            "category": "Sports",
            "cost": 100,
            "rating": 5,
            "image": "https://i.imgur.com/lulqWzW.jpg",
            "_id": "upLK9JbQ4rMhTwt4"
        }
    ]"#;

    #[test]
    fn ok_response_parses_products() {
        let products = parse_products_response(200, CATALOG).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, "upLK9JbQ4rMhTwt4");
    }

    #[test]
    fn odd_ratings_do_not_reject_the_catalog() {
        let body = r#"[
            {"name": "A", "category": "X", "cost": 1, "rating": -1, "image": "", "_id": "a"},
            {"name": "B", "category": "X", "cost": 2, "rating": 4.5, "image": "", "_id": "b"},
            {"name": "C", "category": "X", "cost": 3, "rating": 4, "image": "", "_id": "c"}
        ]"#;
        let products = parse_products_response(200, body).unwrap();
        let ratings: Vec<u8> = products.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, [0, 5, 4]);
    }

    #[test]
    fn empty_array_is_a_valid_result() {
        assert!(parse_products_response(200, "[]").unwrap().is_empty());
    }

    #[test]
    fn structured_500_keeps_backend_message() {
        let body = r#"{"success": false, "message": "Something went wrong. Check the backend console for more details"}"#;
        match parse_products_response(500, body) {
            Err(QkartError::Backend { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.starts_with("Something went wrong"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn not_found_is_classified() {
        assert!(parse_products_response(404, "").unwrap_err().is_not_found());
    }

    #[test]
    fn unstructured_error_body() {
        assert!(matches!(
            parse_products_response(502, "<html>Bad Gateway</html>"),
            Err(QkartError::Http { status: 502 })
        ));
    }

    #[test]
    fn malformed_success_body_is_parse_error() {
        assert!(matches!(
            parse_products_response(200, "{\"not\": \"a list\"}"),
            Err(QkartError::Parse(_))
        ));
    }

    #[test]
    fn unreachable_backend_is_network_error() {
        let config = Config {
            endpoint: "http://127.0.0.1:9".into(),
            request_timeout: Some(std::time::Duration::from_secs(2)),
            ..Config::default()
        };
        let catalog = HttpCatalog::new(&config).unwrap();
        assert!(matches!(catalog.load_all(), Err(QkartError::Network(_))));
    }
}
