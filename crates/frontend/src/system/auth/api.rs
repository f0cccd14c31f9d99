use contracts::system::auth::{SigninRequest, SigninResponse, SignupRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::shared::resource::client::{require_data, run, ApiError};

/// Exchange credentials for a session token.
pub async fn signin(email: String, password: String) -> Result<SigninResponse, String> {
    let body = SigninRequest { email, password };
    let request = Request::post(&format!("{}/auth/signin", api_base()))
        .json(&body)
        .map_err(|e| e.to_string())?;
    let envelope = run::<SigninResponse>(request)
        .await
        .map_err(describe)?;
    require_data(envelope).map_err(describe)
}

/// Register a new account. The backend does not sign the user in; the caller
/// follows up with [`signin`].
pub async fn signup(name: String, email: String, password: String) -> Result<(), String> {
    let body = SignupRequest {
        name,
        email,
        password,
    };
    let request = Request::post(&format!("{}/auth/signup", api_base()))
        .json(&body)
        .map_err(|e| e.to_string())?;
    run::<serde_json::Value>(request).await.map_err(describe)?;
    Ok(())
}

fn describe(err: ApiError) -> String {
    err.to_string()
}
