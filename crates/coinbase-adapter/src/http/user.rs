/*
[INPUT]:  Address parameters and API key authentication
[OUTPUT]: Account data (balance, receive addresses, address book, user)
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding new account endpoints or changing query parameters
*/

// ### Account Endpoints

use rust_decimal::Decimal;

use crate::http::{CoinbaseClient, CoinbaseError, Result};
use crate::types::{
    AddressList, AddressesParams, Amount, GenerateAddressResponse, ReceiveAddress,
    ReceiveAddressParams, User, UsersResponse,
};

impl CoinbaseClient {
    /// Account balance as a decimal
    ///
    /// GET account/balance
    pub async fn get_balance(&self) -> Result<Decimal> {
        let balance = self.account_balance().await?;
        balance.to_decimal().map_err(|e| {
            CoinbaseError::InvalidResponse(format!(
                "balance amount {:?} is not a decimal: {e}",
                balance.amount
            ))
        })
    }

    /// Account balance as reported by the API
    ///
    /// GET account/balance
    pub async fn account_balance(&self) -> Result<Amount> {
        self.get_json("account/balance", &[]).await
    }

    /// Generate a new bitcoin receive address, returning the address
    ///
    /// POST account/generate_receive_address
    pub async fn generate_receive_address(&self, params: &ReceiveAddressParams) -> Result<String> {
        params.validate()?;
        let response: GenerateAddressResponse = self
            .post_json("account/generate_receive_address", params)
            .await?;
        Ok(response.address)
    }

    /// Current receive address of the account
    ///
    /// GET account/receive_address
    pub async fn get_receive_address(&self) -> Result<ReceiveAddress> {
        self.get_json("account/receive_address", &[]).await
    }

    /// List receive addresses
    ///
    /// GET addresses?page={page}&limit={limit}
    pub async fn get_all_addresses(&self, params: &AddressesParams) -> Result<AddressList> {
        self.get_json("addresses", &params.query_pairs()).await
    }

    /// User owning the API key
    ///
    /// GET users
    pub async fn get_current_user(&self) -> Result<User> {
        let response: UsersResponse = self.get_json("users", &[]).await?;
        response
            .users
            .into_iter()
            .next()
            .map(|entry| entry.user)
            .ok_or_else(|| CoinbaseError::InvalidResponse("users list is empty".to_string()))
    }
}
