//! HTTP layer for the PathFinder backend.
//!
//! Every request goes through the helpers here: they prefix the configured
//! base URL, attach the bearer token when one is present and funnel failures
//! into [`ApiError`]. A 401 from any endpoint clears the session and sends
//! the browser back to the login page before the error reaches the caller.

pub mod algorithms;
pub mod auth;
pub mod graph;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session;

/// Backend base URL, overridable at build time via `PATHFINDER_API_URL`.
const API_URL: &str = match option_env!("PATHFINDER_API_URL") {
	Some(url) => url,
	None => "http://localhost:8000",
};

/// Client-side view of a failed call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
	/// The backend answered with a non-success status.
	#[error("{detail}")]
	Backend {
		/// HTTP status code.
		status: u16,
		/// Human-readable message from the backend's `detail` field.
		detail: String,
	},
	/// The request never produced a response.
	#[error("{0}")]
	Network(String),
}

impl ApiError {
	fn from_gloo(err: gloo_net::Error) -> Self {
		Self::Network(err.to_string())
	}
}

/// Extract the backend message from an error body.
///
/// The backend answers errors as `{"detail": "..."}`; anything else falls
/// back to the raw body, then to the status line.
fn detail_from_body(status: u16, status_text: &str, body: &str) -> String {
	#[derive(serde::Deserialize)]
	struct ErrorBody {
		detail: String,
	}

	if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
		return parsed.detail;
	}
	if !body.trim().is_empty() {
		return body.trim().to_string();
	}
	format!("HTTP {status} {status_text}")
}

fn url(path: &str) -> String {
	format!("{API_URL}{path}")
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
	match session::with_session(|s| s.token()) {
		Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
		None => builder,
	}
}

/// Forced logout: drop the token and land on the login page.
fn expire_session() {
	session::with_session(|s| s.clear());
	if let Some(window) = web_sys::window() {
		let _ = window.location().set_href("/login");
	}
}

async fn check(response: Response) -> Result<Response, ApiError> {
	if response.ok() {
		return Ok(response);
	}
	let status = response.status();
	let status_text = response.status_text();
	let body = response.text().await.unwrap_or_default();
	let detail = detail_from_body(status, &status_text, &body);
	if status == 401 {
		log::warn!("session rejected by backend: {detail}");
		expire_session();
	}
	Err(ApiError::Backend { status, detail })
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
	let response = authorized(Request::get(&url(path)))
		.send()
		.await
		.map_err(ApiError::from_gloo)?;
	let response = check(response).await?;
	response.json::<T>().await.map_err(ApiError::from_gloo)
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
	path: &str,
	body: &B,
) -> Result<T, ApiError> {
	let request = authorized(Request::post(&url(path)))
		.json(body)
		.map_err(ApiError::from_gloo)?;
	let response = request.send().await.map_err(ApiError::from_gloo)?;
	let response = check(response).await?;
	response.json::<T>().await.map_err(ApiError::from_gloo)
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
	let response = authorized(Request::delete(&url(path)))
		.send()
		.await
		.map_err(ApiError::from_gloo)?;
	check(response).await?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detail_field_wins() {
		let body = r#"{"detail":"Node with id 7 not found"}"#;
		assert_eq!(
			detail_from_body(404, "Not Found", body),
			"Node with id 7 not found"
		);
	}

	#[test]
	fn non_json_body_passes_through() {
		assert_eq!(
			detail_from_body(502, "Bad Gateway", "upstream exploded"),
			"upstream exploded"
		);
	}

	#[test]
	fn empty_body_falls_back_to_status_line() {
		assert_eq!(
			detail_from_body(500, "Internal Server Error", ""),
			"HTTP 500 Internal Server Error"
		);
	}

	#[test]
	fn unexpected_json_shape_falls_back_to_raw_body() {
		let body = r#"{"detail":[{"loc":["query","start_id"],"msg":"field required"}]}"#;
		assert_eq!(detail_from_body(422, "Unprocessable Entity", body), body);
	}

	#[test]
	fn backend_error_displays_detail_only() {
		let err = ApiError::Backend {
			status: 400,
			detail: "peso inválido".into(),
		};
		assert_eq!(err.to_string(), "peso inválido");
	}
}
