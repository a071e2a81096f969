//! Login / register page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::auth::AuthContext;

fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

/// Single form toggling between login and register modes.
#[component]
pub fn Login() -> impl IntoView {
	let auth = expect_context::<AuthContext>();
	let navigate = use_navigate();

	let (username, set_username) = signal(String::new());
	let (password, set_password) = signal(String::new());
	let (error, set_error) = signal(String::new());
	let (loading, set_loading) = signal(false);
	let (register_mode, set_register_mode) = signal(false);

	// Already logged in (or just logged in): go straight to the dashboard.
	Effect::new(move |_| {
		if auth.is_authenticated() {
			navigate("/", Default::default());
		}
	});

	let on_submit = move |ev: web_sys::SubmitEvent| {
		ev.prevent_default();
		let user = username.get().trim().to_string();
		let pass = password.get();
		if user.is_empty() || pass.is_empty() {
			set_error.set("Usuario y contraseña son requeridos".into());
			return;
		}
		set_loading.set(true);
		set_error.set(String::new());
		spawn_local(async move {
			if register_mode.get_untracked() {
				match auth.register(&user, &pass).await {
					Ok(_) => {
						alert("Usuario registrado exitosamente. Ahora puedes iniciar sesión.");
						set_register_mode.set(false);
						set_username.set(String::new());
						set_password.set(String::new());
					}
					Err(err) => set_error.set(err.to_string()),
				}
			} else if let Err(err) = auth.login(&user, &pass).await {
				set_error.set(err.to_string());
			}
			set_loading.set(false);
		});
	};

	let toggle_mode = move |_| {
		set_register_mode.update(|mode| *mode = !*mode);
		set_error.set(String::new());
		set_username.set(String::new());
		set_password.set(String::new());
	};

	view! {
		<div class="login-container">
			<div class="login-card space-y-6">
				<div>
					<h2 class="login-title">
						{move || if register_mode.get() { "Crear cuenta" } else { "Iniciar sesión" }}
					</h2>
					<p class="login-subtitle">"PathFinder - Explorador de Grafos"</p>
				</div>

				<form class="space-y-4" on:submit=on_submit>
					<div class="form-group">
						<label for="username" class="form-label">
							"Nombre de usuario"
						</label>
						<input
							id="username"
							type="text"
							class="input"
							placeholder="Nombre de usuario"
							prop:value=username
							on:input=move |ev| {
								set_username.set(event_target_value(&ev));
								set_error.set(String::new());
							}
							prop:disabled=loading
							required
						/>
					</div>

					<div class="form-group">
						<label for="password" class="form-label">
							"Contraseña"
						</label>
						<input
							id="password"
							type="password"
							class="input"
							placeholder="Contraseña"
							prop:value=password
							on:input=move |ev| {
								set_password.set(event_target_value(&ev));
								set_error.set(String::new());
							}
							prop:disabled=loading
							required
						/>
					</div>

					<Show when=move || !error.get().is_empty()>
						<div class="alert alert-error">{move || error.get()}</div>
					</Show>

					<button type="submit" class="btn btn-primary btn-block" prop:disabled=loading>
						{move || {
							if loading.get() {
								"Procesando..."
							} else if register_mode.get() {
								"Registrarse"
							} else {
								"Iniciar sesión"
							}
						}}
					</button>

					<div class="text-center">
						<button type="button" class="link" on:click=toggle_mode>
							{move || {
								if register_mode.get() {
									"¿Ya tienes cuenta? Iniciar sesión"
								} else {
									"¿No tienes cuenta? Registrarse"
								}
							}}
						</button>
					</div>
				</form>
			</div>
		</div>
	}
}
