//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::session;

/// Request body shared by register and login.
#[derive(Debug, Clone, Serialize)]
struct Credentials<'a> {
	username: &'a str,
	password: &'a str,
}

/// Backend user record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
	/// Backend-assigned id.
	pub id: i64,
	/// Login / display name.
	pub username: String,
}

/// Login response.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
	/// Bearer credential for subsequent calls.
	pub access_token: String,
	/// Token scheme, `"bearer"`.
	pub token_type: String,
}

/// Create an account. Registration does not authenticate; follow with
/// [`login`].
pub async fn register(username: &str, password: &str) -> Result<User, ApiError> {
	super::post_json("/auth/register", &Credentials { username, password }).await
}

/// Exchange credentials for a bearer token and persist it for subsequent
/// requests.
pub async fn login(username: &str, password: &str) -> Result<Token, ApiError> {
	let token: Token = super::post_json("/auth/login", &Credentials { username, password }).await?;
	session::with_session(|s| s.set_token(&token.access_token));
	Ok(token)
}

/// Drop the persisted session token.
pub fn logout() {
	session::with_session(|s| s.clear());
}

/// Fetch the user the current token belongs to.
pub async fn me() -> Result<User, ApiError> {
	super::get_json("/auth/me").await
}
