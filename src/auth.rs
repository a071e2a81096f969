//! Process-wide authentication state.
//!
//! Provided as Leptos context from [`crate::App`]; pages read it to guard
//! routes and the dashboard header shows the logged-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::auth::User;
use crate::api::{self, ApiError};
use crate::session;

/// Lifecycle of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
	/// No session; only the login page is reachable.
	Anonymous,
	/// A login or session restore is in flight.
	Authenticating,
	/// Logged in as the given user.
	Authenticated(User),
}

/// Reactive session handle.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
	state: RwSignal<AuthState>,
}

impl AuthContext {
	/// Create the context and, when a token is persisted from an earlier
	/// visit, restore the session from `/auth/me`.
	pub fn new() -> Self {
		let ctx = Self {
			state: RwSignal::new(AuthState::Anonymous),
		};
		if session::with_session(|s| s.is_authenticated()) {
			ctx.state.set(AuthState::Authenticating);
			spawn_local(async move {
				match api::auth::me().await {
					Ok(user) => ctx.state.set(AuthState::Authenticated(user)),
					Err(err) => {
						log::warn!("session restore failed: {err}");
						session::with_session(|s| s.clear());
						ctx.state.set(AuthState::Anonymous);
					}
				}
			});
		}
		ctx
	}

	/// Current state, reactively.
	pub fn state(&self) -> AuthState {
		self.state.get()
	}

	/// Whether a user is logged in, reactively.
	pub fn is_authenticated(&self) -> bool {
		matches!(self.state.get(), AuthState::Authenticated(_))
	}

	/// Logged-in user, if any.
	pub fn user(&self) -> Option<User> {
		match self.state.get() {
			AuthState::Authenticated(user) => Some(user),
			_ => None,
		}
	}

	/// Log in and populate the user from `/auth/me`.
	pub async fn login(self, username: &str, password: &str) -> Result<(), ApiError> {
		self.state.set(AuthState::Authenticating);
		let result = async {
			api::auth::login(username, password).await?;
			api::auth::me().await
		}
		.await;
		match result {
			Ok(user) => {
				self.state.set(AuthState::Authenticated(user));
				Ok(())
			}
			Err(err) => {
				session::with_session(|s| s.clear());
				self.state.set(AuthState::Anonymous);
				Err(err)
			}
		}
	}

	/// Create an account. Registration does not authenticate; the caller
	/// must follow with an explicit [`AuthContext::login`].
	pub async fn register(self, username: &str, password: &str) -> Result<User, ApiError> {
		api::auth::register(username, password).await
	}

	/// Clear the session and return to anonymous.
	pub fn logout(self) {
		api::auth::logout();
		self.state.set(AuthState::Anonymous);
	}
}
