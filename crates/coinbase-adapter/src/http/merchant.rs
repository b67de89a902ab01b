/*
[INPUT]:  Payment button definitions
[OUTPUT]: Created button with embeddable HTML
[POS]:    HTTP layer - merchant endpoints (create remote resources)
[UPDATE]: When adding merchant endpoints or changing button fields
*/

use crate::http::{CoinbaseClient, Result};
use crate::types::{ButtonParams, ButtonResponse};

impl CoinbaseClient {
    /// Create a payment button
    ///
    /// POST buttons
    pub async fn create_button(&self, params: &ButtonParams) -> Result<ButtonResponse> {
        params.validate()?;
        self.post_json("buttons", params).await
    }
}
