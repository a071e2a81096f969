//! Session token persistence.
//!
//! The HTTP layer and the auth context share a single bearer token. Storage
//! is injected through [`TokenStore`] so the store can be exercised in tests
//! without a browser; the default backend is browser local storage.

/// Fixed local-storage key the bearer token lives under.
const TOKEN_KEY: &str = "token";

/// Pluggable persistence for the session token.
pub trait TokenStore {
	/// Read the persisted token, if any.
	fn load(&self) -> Option<String>;
	/// Persist `token`, replacing any previous value.
	fn save(&self, token: &str);
	/// Remove the persisted token.
	fn clear(&self);
}

/// [`TokenStore`] backed by browser local storage.
///
/// All operations degrade to no-ops when no window is available.
#[derive(Default)]
pub struct BrowserStore;

impl BrowserStore {
	fn storage() -> Option<web_sys::Storage> {
		web_sys::window()?.local_storage().ok().flatten()
	}
}

impl TokenStore for BrowserStore {
	fn load(&self) -> Option<String> {
		Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
	}

	fn save(&self, token: &str) {
		if let Some(storage) = Self::storage() {
			let _ = storage.set_item(TOKEN_KEY, token);
		}
	}

	fn clear(&self) {
		if let Some(storage) = Self::storage() {
			let _ = storage.remove_item(TOKEN_KEY);
		}
	}
}

/// Session state over an injected [`TokenStore`].
pub struct SessionStore {
	store: Box<dyn TokenStore>,
}

impl SessionStore {
	/// Wrap `store` as the session's persistence backend.
	pub fn new(store: Box<dyn TokenStore>) -> Self {
		Self { store }
	}

	/// Current bearer token, read through the backing store on every call.
	pub fn token(&self) -> Option<String> {
		self.store.load()
	}

	/// Persist a freshly issued token.
	pub fn set_token(&self, token: &str) {
		self.store.save(token);
	}

	/// Drop the session token.
	pub fn clear(&self) {
		self.store.clear();
	}

	/// Whether a token is currently persisted.
	pub fn is_authenticated(&self) -> bool {
		self.token().is_some()
	}
}

impl Default for SessionStore {
	fn default() -> Self {
		Self::new(Box::new(BrowserStore))
	}
}

thread_local! {
	static SESSION: SessionStore = SessionStore::default();
}

/// Run `f` against the process-wide session store.
pub fn with_session<R>(f: impl FnOnce(&SessionStore) -> R) -> R {
	SESSION.with(f)
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	#[derive(Default)]
	struct MemoryStore(RefCell<Option<String>>);

	impl TokenStore for MemoryStore {
		fn load(&self) -> Option<String> {
			self.0.borrow().clone()
		}

		fn save(&self, token: &str) {
			*self.0.borrow_mut() = Some(token.to_string());
		}

		fn clear(&self) {
			*self.0.borrow_mut() = None;
		}
	}

	#[test]
	fn token_round_trip() {
		let session = SessionStore::new(Box::new(MemoryStore::default()));
		assert!(!session.is_authenticated());
		assert_eq!(session.token(), None);

		session.set_token("abc123");
		assert!(session.is_authenticated());
		assert_eq!(session.token().as_deref(), Some("abc123"));
	}

	#[test]
	fn clear_drops_token() {
		let session = SessionStore::new(Box::new(MemoryStore::default()));
		session.set_token("abc123");
		session.clear();
		assert!(!session.is_authenticated());
		assert_eq!(session.token(), None);
	}

	#[test]
	fn set_token_replaces_previous() {
		let session = SessionStore::new(Box::new(MemoryStore::default()));
		session.set_token("first");
		session.set_token("second");
		assert_eq!(session.token().as_deref(), Some("second"));
	}

	#[test]
	fn browser_store_is_inert_without_a_window() {
		let store = BrowserStore;
		store.save("abc123");
		assert_eq!(store.load(), None);
		store.clear();
	}
}
