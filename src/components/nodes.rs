//! Nodes feature view: create, list and delete graph nodes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::graph::{self, Node};
use crate::validate;

use super::confirm;

/// Node management tab.
#[component]
pub fn NodesSection() -> impl IntoView {
	let (nodes, set_nodes) = signal(Vec::<Node>::new());
	let (new_name, set_new_name) = signal(String::new());
	let (loading, set_loading) = signal(false);
	let (error, set_error) = signal(String::new());
	let (success, set_success) = signal(String::new());

	let load_nodes = move || {
		spawn_local(async move {
			set_loading.set(true);
			match graph::list_nodes().await {
				Ok(list) => set_nodes.set(list),
				Err(err) => set_error.set(format!("Error al cargar nodos: {err}")),
			}
			set_loading.set(false);
		});
	};
	load_nodes();

	let on_create = move |ev: web_sys::SubmitEvent| {
		ev.prevent_default();
		// `required` blocks empty submits; all-whitespace names still reach here.
		let name = match validate::node_name(&new_name.get()) {
			Ok(name) => name,
			Err(message) => {
				set_error.set(message);
				return;
			}
		};
		spawn_local(async move {
			set_error.set(String::new());
			set_success.set(String::new());
			match graph::create_node(&name).await {
				Ok(_) => {
					set_new_name.set(String::new());
					set_success.set("Nodo creado exitosamente".into());
					load_nodes();
				}
				Err(err) => set_error.set(format!("Error al crear nodo: {err}")),
			}
		});
	};

	let on_delete = move |id: i64, name: String| {
		let prompt = format!(
			"¿Estás seguro de eliminar el nodo \"{name}\"? Esto también eliminará todas las aristas conectadas."
		);
		if !confirm(&prompt) {
			return;
		}
		spawn_local(async move {
			set_error.set(String::new());
			set_success.set(String::new());
			match graph::delete_node(id).await {
				Ok(()) => {
					set_success.set("Nodo eliminado exitosamente".into());
					load_nodes();
				}
				Err(err) => set_error.set(format!("Error al eliminar nodo: {err}")),
			}
		});
	};

	view! {
		<div class="space-y-6">
			<div>
				<h2 class="section-title">"Gestión de Nodos"</h2>
				<p class="section-subtitle">"Crear y gestionar nodos del grafo"</p>
			</div>

			<div class="card">
				<h3 class="card-title">"Crear Nuevo Nodo"</h3>
				<form class="form-row" on:submit=on_create>
					<input
						type="text"
						class="input grow"
						placeholder="Nombre del nodo (ej: Ciudad A)"
						prop:value=new_name
						on:input=move |ev| set_new_name.set(event_target_value(&ev))
						required
					/>
					<button type="submit" class="btn btn-primary">
						"Crear Nodo"
					</button>
				</form>
			</div>

			<Show when=move || !error.get().is_empty()>
				<div class="alert alert-error">{move || error.get()}</div>
			</Show>

			<Show when=move || !success.get().is_empty()>
				<div class="alert alert-success">{move || success.get()}</div>
			</Show>

			<div class="item-list">
				<div class="item-header">
					<h3 class="card-title">
						{move || format!("Nodos Existentes ({})", nodes.get().len())}
					</h3>
				</div>

				<Show
					when=move || !loading.get()
					fallback=|| view! { <div class="loading-message">"Cargando nodos..."</div> }
				>
					<Show
						when=move || !nodes.get().is_empty()
						fallback=|| view! { <div class="empty-message">"No hay nodos creados"</div> }
					>
						<For
							each=move || nodes.get()
							key=|node| node.id
							children=move |node: Node| {
								let delete_name = node.name.clone();
								view! {
									<div class="item">
										<div class="item-row">
											<div class="item-icon item-icon-blue">{node.id}</div>
											<div class="item-content">
												<div class="item-title">{node.name.clone()}</div>
												<div class="item-subtitle">{format!("ID: {}", node.id)}</div>
											</div>
										</div>
										<button
											class="btn btn-danger btn-small"
											on:click=move |_| on_delete(node.id, delete_name.clone())
										>
											"Eliminar"
										</button>
									</div>
								}
							}
						/>
					</Show>
				</Show>
			</div>
		</div>
	}
}
