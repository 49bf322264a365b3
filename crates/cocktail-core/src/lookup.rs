// ── Lookup client ──
//
// One search per call, classified into a `LookupOutcome`. There is no
// retry, no cache and no cancellation: a call either completes or fails
// in the transport.

use cocktail_api::{CocktailClient, SearchResponse, TransportConfig};
use tracing::{debug, warn};

use crate::config::LookupConfig;
use crate::error::CoreError;
use crate::model::{DrinkQuery, DrinkRecord};

/// Result of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// First match of the response; later matches are discarded.
    Found(DrinkRecord),
    /// The request succeeded but nothing matched.
    NotFound,
    /// Transport failure, non-success status, or undecodable payload.
    TransportError(String),
}

impl LookupOutcome {
    /// Split into the matched record or the user-facing error.
    pub fn into_result(self) -> Result<DrinkRecord, CoreError> {
        match self {
            Self::Found(record) => Ok(record),
            Self::NotFound => Err(CoreError::NoMatch),
            Self::TransportError(reason) => Err(CoreError::Transport { reason }),
        }
    }
}

/// Classify a raw search result.
pub fn classify(result: Result<SearchResponse, cocktail_api::Error>) -> LookupOutcome {
    match result {
        Err(err) => LookupOutcome::TransportError(err.to_string()),
        Ok(resp) => match resp.into_first() {
            Some(drink) => LookupOutcome::Found(DrinkRecord::from(drink)),
            None => LookupOutcome::NotFound,
        },
    }
}

/// Search-by-name client producing [`LookupOutcome`]s.
pub struct LookupClient {
    api: CocktailClient,
}

impl LookupClient {
    pub fn new(api: CocktailClient) -> Self {
        Self { api }
    }

    /// Build the underlying HTTP client from a [`LookupConfig`].
    pub fn from_config(config: &LookupConfig) -> Result<Self, CoreError> {
        let mut transport = TransportConfig::default();
        if let Some(timeout) = config.timeout {
            transport = transport.with_timeout(timeout);
        }
        let api = CocktailClient::new(config.base_url.clone(), &transport)?;
        Ok(Self::new(api))
    }

    /// Run one search for `query`. Never fails: errors become
    /// [`LookupOutcome::TransportError`].
    pub async fn lookup(&self, query: &DrinkQuery) -> LookupOutcome {
        debug!(name = %query, "looking up drink");

        let outcome = classify(self.api.search(query.name()).await);

        match &outcome {
            LookupOutcome::Found(record) => debug!(name = %query, matched = %record.name, "drink found"),
            LookupOutcome::NotFound => debug!(name = %query, "no drink matched"),
            LookupOutcome::TransportError(reason) => {
                warn!(name = %query, error = %reason, "drink lookup failed");
            }
        }

        outcome
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, LookupClient) {
        let server = MockServer::start().await;
        let config = LookupConfig::new(Url::parse(&server.uri()).unwrap());
        let client = LookupClient::from_config(&config).unwrap();
        (server, client)
    }

    fn query(name: &str) -> DrinkQuery {
        DrinkQuery::parse(name).unwrap()
    }

    #[tokio::test]
    async fn found_uses_first_match_only() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("s", "Martini"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "drinks": [
                    { "strDrink": "Martini", "strGlass": "Cocktail glass", "strIngredient1": "Gin" },
                    { "strDrink": "Vodka Martini", "strGlass": "Cocktail glass" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        match client.lookup(&query("Martini")).await {
            LookupOutcome::Found(record) => {
                assert_eq!(record.name, "Martini");
                assert_eq!(record.ingredients.len(), 1);
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn broken_second_match_does_not_hide_first() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("s", "Negroni"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "drinks": [
                    { "strDrink": "Negroni", "strIngredient1": "Gin" },
                    { "strDrink": null }
                ]
            })))
            .mount(&server)
            .await;

        match client.lookup(&query("Negroni")).await {
            LookupOutcome::Found(record) => {
                assert_eq!(record.name, "Negroni");
                assert_eq!(record.ingredients.len(), 1);
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_list_is_not_found() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "drinks": [] })))
            .mount(&server)
            .await;

        assert_eq!(client.lookup(&query("Nothing")).await, LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn null_drinks_is_not_found() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "drinks": null })))
            .mount(&server)
            .await;

        assert_eq!(client.lookup(&query("Nothing")).await, LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn server_error_is_transport_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let outcome = client.lookup(&query("Mojito")).await;
        assert!(matches!(outcome, LookupOutcome::TransportError(_)), "got {outcome:?}");
        assert!(matches!(outcome.into_result(), Err(CoreError::Transport { .. })));
    }

    #[tokio::test]
    async fn malformed_payload_is_transport_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let outcome = client.lookup(&query("Mojito")).await;
        assert!(matches!(outcome, LookupOutcome::TransportError(_)), "got {outcome:?}");
    }

    #[test]
    fn classify_maps_no_match_to_error() {
        let outcome = classify(Ok(SearchResponse::default()));
        assert_eq!(outcome, LookupOutcome::NotFound);
        assert_eq!(outcome.into_result(), Err(CoreError::NoMatch));
    }
}
