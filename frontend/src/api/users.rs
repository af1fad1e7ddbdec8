use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use shared::{ProfileApi, ProfileDto, ProfileRecord, SaveProfileRequest, SharedError};
use crate::api::api_url;
use crate::api::utils::{ensure_ok, network_error};

pub const USERS_PATH: &str = "/api/users";

pub fn user_profile_url(wallet: &str) -> String {
    format!("{}?wallet={}", api_url(USERS_PATH), urlencoding::encode(wallet))
}

pub async fn get_user_profile(wallet: &str) -> Result<Option<ProfileRecord>, SharedError> {
    debug!("Fetching profile for wallet: {}", wallet);

    let response = Request::get(&user_profile_url(wallet))
        .send()
        .await
        .map_err(network_error)?;
    let response = ensure_ok(response, "Profile fetch").await?;

    let body = response.text().await.map_err(network_error)?;
    ProfileDto::parse_body(&body)
}

pub async fn save_user_profile(request: &SaveProfileRequest) -> Result<(), SharedError> {
    debug!("Saving profile for wallet: {}", request.wallet);

    let response = Request::post(&api_url(USERS_PATH))
        .json(request)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    ensure_ok(response, "Profile save").await?;

    Ok(())
}

/// [`ProfileApi`] backed by the REST endpoints above
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpProfileApi;

#[async_trait(?Send)]
impl ProfileApi for HttpProfileApi {
    async fn fetch_profile(&self, wallet: &str) -> Result<Option<ProfileRecord>, SharedError> {
        get_user_profile(wallet).await
    }

    async fn save_profile(&self, request: &SaveProfileRequest) -> Result<(), SharedError> {
        save_user_profile(request).await
    }
}
