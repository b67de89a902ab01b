/*
[INPUT]:  Page numbers and transaction identifiers
[OUTPUT]: Transaction history and single transactions
[POS]:    HTTP layer - transaction endpoints
[UPDATE]: When adding transaction endpoints or changing pagination
*/

use reqwest::Method;

use crate::http::{CoinbaseClient, CoinbaseError, Result};
use crate::types::{Transaction, TransactionEnvelope, TransactionList};

impl CoinbaseClient {
    /// Transaction history, most recent first as returned by the API.
    /// The page number is passed through unvalidated.
    ///
    /// GET transactions?page={page}
    pub async fn get_transactions(&self, page: u32) -> Result<TransactionList> {
        self.get_json("transactions", &[("page", page.to_string())])
            .await
    }

    /// GET transactions/{id}
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CoinbaseError::Validation(
                "transaction id is required".to_string(),
            ));
        }

        let mut url = self.endpoint_url("transactions/", &[])?;
        url.path_segments_mut()
            .map_err(|_| {
                CoinbaseError::Configuration(format!("base URL {} cannot hold a path", self.base_url()))
            })?
            .pop_if_empty()
            .push(id);

        let envelope: TransactionEnvelope = self.send_json(Method::GET, url, None).await?;
        Ok(envelope.transaction)
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::ApiKeyCredentials;
    use crate::http::{ClientConfig, CoinbaseClient, CoinbaseError};
    use crate::types::TransactionStatus;
    use reqwest::StatusCode;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CoinbaseClient {
        CoinbaseClient::with_config(
            ApiKeyCredentials::new("test-key", "test-secret"),
            ClientConfig::with_base_url(format!("{}/api/v1/", server.uri())),
        )
        .expect("client init")
    }

    fn transaction_json(id: &str, hsh: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "created_at": "2013-03-21T17:02:57-07:00",
            "hsh": hsh,
            "notes": "Sample transaction for you",
            "amount": {"amount": "1.00000000", "currency": "BTC"},
            "request": false,
            "status": "complete",
            "sender": {"id": "514e4c37802e1bf69100000e", "name": "Jane Doe", "email": "jane@example.com"},
            "recipient": {"id": "514e4c1c802e1bef9800001e", "name": "John Doe", "email": "john@example.com"}
        })
    }

    #[tokio::test]
    async fn test_get_transactions_preserves_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_user": {"id": "5011f33df8182b142400000e", "email": "user2@example.com", "name": "User Two"},
                "balance": {"amount": "50.00000000", "currency": "BTC"},
                "total_count": 2,
                "num_pages": 1,
                "current_page": 1,
                "transactions": [
                    {"transaction": transaction_json("5018f833f8182b129c00002f", Some("9d6a7d1112c3db9de5315b421a5153d71413f5f752aff75bf504b77df4e646a3"))},
                    {"transaction": transaction_json("5018f833f8182b129c00002e", None)}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let list = client_for(&server)
            .get_transactions(1)
            .await
            .expect("get_transactions failed");

        assert_eq!(list.total_count, 2);
        let ids: Vec<&str> = list.iter().map(|tx| tx.id.as_str()).collect();
        assert_eq!(ids, vec!["5018f833f8182b129c00002f", "5018f833f8182b129c00002e"]);
        assert!(list.transactions[0].transaction.hsh.is_some());
        assert_eq!(list.transactions[0].transaction.status, TransactionStatus::Complete);
        assert_eq!(list.balance.map(|b| b.amount), Some("50.00000000".to_string()));
    }

    #[tokio::test]
    async fn test_get_transaction() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions/5018f833f8182b129c00002f"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transaction": transaction_json("5018f833f8182b129c00002f", Some("abc123"))
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tx = client_for(&server)
            .get_transaction("5018f833f8182b129c00002f")
            .await
            .expect("get_transaction failed");
        assert_eq!(tx.hsh.as_deref(), Some("abc123"));
        assert_eq!(tx.amount.amount, "1.00000000");
    }

    #[tokio::test]
    async fn test_get_unknown_transaction_is_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions/5446968682a19ab940000004"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "success": false,
                "errors": ["Transaction not found"]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_transaction("5446968682a19ab940000004")
            .await
            .unwrap_err();

        assert!(err.is_remote());
        assert!(err.is_not_found());
        assert!(!err.is_decode());
        assert_eq!(err.message(), "Transaction not found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_empty_transaction_id_rejected() {
        let server = MockServer::start().await;
        let err = client_for(&server).get_transaction("  ").await.unwrap_err();
        assert!(matches!(err, CoinbaseError::Validation(_)));
    }
}
