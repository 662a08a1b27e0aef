//! App-level token exchange (OAuth 2.0 client-credentials grant).
//!
//! Unlike user-facing OAuth flows there is no browser, no redirect, and no
//! refresh token here: the application authenticates itself with its client
//! ID and secret and receives a short-lived bearer token. Renewal simply
//! re-runs the same exchange (see [`super::credentials`]).

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{
    error::ProviderError,
    provider::ProviderConfig,
    types::TokenResponse,
};

/// Performs one client-credentials exchange against the provider's token
/// endpoint.
///
/// Sends `grant_type=client_credentials` with the client ID and secret as an
/// HTTP Basic `Authorization` header (base64 of `id:secret`), as the provider
/// requires for app-only access.
///
/// # Errors
///
/// - [`ProviderError::ConfigurationMissing`] if no credentials are present
/// - [`ProviderError::Timeout`] when the bounded timeout elapses
/// - [`ProviderError::Http`] for non-2xx responses (e.g. revoked secrets)
/// - [`ProviderError::Malformed`] / [`ProviderError::Network`] otherwise
pub async fn exchange_token(
    config: &ProviderConfig,
    client: &Client,
) -> Result<TokenResponse, ProviderError> {
    let (Some(client_id), Some(client_secret)) =
        (config.client_id.as_deref(), config.client_secret.as_deref())
    else {
        return Err(ProviderError::ConfigurationMissing);
    };

    let basic = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let response = client
        .post(&config.token_url)
        .header("Authorization", format!("Basic {}", basic))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(ProviderError::from)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Http(status));
    }

    let token = response
        .json::<TokenResponse>()
        .await
        .map_err(ProviderError::from)?;

    if token.access_token.is_empty() {
        return Err(ProviderError::Malformed(
            "token exchange returned an empty access_token".to_string(),
        ));
    }

    Ok(token)
}
