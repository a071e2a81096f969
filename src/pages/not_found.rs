//! 404 fallback page.

use leptos::prelude::*;

/// Rendered for any route the router does not know.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="login-container">
			<div class="login-card text-center space-y-6">
				<h2 class="login-title">"404"</h2>
				<p class="login-subtitle">"Página no encontrada"</p>
				<a href="/" class="link">
					"Volver al inicio"
				</a>
			</div>
		</div>
	}
}
