//! Edges feature view: create, list and delete weighted edges.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::graph::{self, Edge, Node};
use crate::validate;

use super::confirm;

/// Edge management tab.
#[component]
pub fn EdgesSection() -> impl IntoView {
	let (edges, set_edges) = signal(Vec::<Edge>::new());
	let (nodes, set_nodes) = signal(Vec::<Node>::new());
	let (src_input, set_src_input) = signal(String::new());
	let (dst_input, set_dst_input) = signal(String::new());
	let (weight_input, set_weight_input) = signal(String::new());
	let (loading, set_loading) = signal(false);
	let (error, set_error) = signal(String::new());
	let (success, set_success) = signal(String::new());

	// Edges render against node names, so both lists load together.
	let load_data = move || {
		spawn_local(async move {
			set_loading.set(true);
			match graph::list_edges().await {
				Ok(list) => set_edges.set(list),
				Err(err) => set_error.set(format!("Error al cargar datos: {err}")),
			}
			match graph::list_nodes().await {
				Ok(list) => set_nodes.set(list),
				Err(err) => set_error.set(format!("Error al cargar datos: {err}")),
			}
			set_loading.set(false);
		});
	};
	load_data();

	let node_name = move |id: i64| {
		nodes
			.get()
			.iter()
			.find(|n| n.id == id)
			.map(|n| n.name.clone())
			.unwrap_or_else(|| format!("Nodo {id}"))
	};

	let on_create = move |ev: web_sys::SubmitEvent| {
		ev.prevent_default();
		let (src_id, dst_id, weight) =
			match validate::edge_input(&src_input.get(), &dst_input.get(), &weight_input.get()) {
				Ok(parsed) => parsed,
				Err(message) => {
					set_error.set(message);
					return;
				}
			};
		spawn_local(async move {
			set_error.set(String::new());
			set_success.set(String::new());
			match graph::create_edge(src_id, dst_id, weight).await {
				Ok(_) => {
					set_src_input.set(String::new());
					set_dst_input.set(String::new());
					set_weight_input.set(String::new());
					set_success.set("Arista creada exitosamente".into());
					load_data();
				}
				Err(err) => set_error.set(format!("Error al crear arista: {err}")),
			}
		});
	};

	let on_delete = move |id: i64, src_name: String, dst_name: String| {
		if !confirm(&format!(
			"¿Estás seguro de eliminar la arista {src_name} → {dst_name}?"
		)) {
			return;
		}
		spawn_local(async move {
			set_error.set(String::new());
			set_success.set(String::new());
			match graph::delete_edge(id).await {
				Ok(()) => {
					set_success.set("Arista eliminada exitosamente".into());
					load_data();
				}
				Err(err) => set_error.set(format!("Error al eliminar arista: {err}")),
			}
		});
	};

	let node_options = move || {
		nodes
			.get()
			.into_iter()
			.map(|node| {
				view! {
					<option value=node.id.to_string()>
						{format!("{} (ID: {})", node.name, node.id)}
					</option>
				}
			})
			.collect_view()
	};

	view! {
		<div class="space-y-6">
			<div>
				<h2 class="section-title">"Gestión de Aristas"</h2>
				<p class="section-subtitle">"Crear y gestionar conexiones entre nodos"</p>
			</div>

			<div class="card">
				<h3 class="card-title">"Crear Nueva Arista"</h3>

				<Show
					when=move || (nodes.get().len() >= 2)
					fallback=|| {
						view! {
							<div class="alert alert-warning">
								"Se necesitan al menos 2 nodos para crear una arista. Ve a la sección de nodos para crear más nodos."
							</div>
						}
					}
				>
					<form class="form-grid" on:submit=on_create>
						<div>
							<label class="form-label">"Nodo Origen"</label>
							<select
								class="select"
								prop:value=src_input
								on:change=move |ev| set_src_input.set(event_target_value(&ev))
								required
							>
								<option value="">"Seleccionar origen"</option>
								{node_options}
							</select>
						</div>

						<div>
							<label class="form-label">"Nodo Destino"</label>
							<select
								class="select"
								prop:value=dst_input
								on:change=move |ev| set_dst_input.set(event_target_value(&ev))
								required
							>
								<option value="">"Seleccionar destino"</option>
								{node_options}
							</select>
						</div>

						<div>
							<label class="form-label">"Distancia"</label>
							<input
								type="number"
								step="0.1"
								min="0.1"
								class="input"
								placeholder="Ej: 10.5"
								prop:value=weight_input
								on:input=move |ev| set_weight_input.set(event_target_value(&ev))
								required
							/>
						</div>

						<div class="form-submit">
							<button type="submit" class="btn btn-primary btn-block">
								"Crear Arista"
							</button>
						</div>
					</form>
				</Show>
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
						{move || format!("Aristas Existentes ({})", edges.get().len())}
					</h3>
				</div>

				<Show
					when=move || !loading.get()
					fallback=|| view! { <div class="loading-message">"Cargando aristas..."</div> }
				>
					<Show
						when=move || !edges.get().is_empty()
						fallback=|| view! { <div class="empty-message">"No hay aristas creadas"</div> }
					>
						<For
							each=move || edges.get()
							key=|edge| edge.id
							children=move |edge: Edge| {
								let src_name = move || node_name(edge.src_id);
								let dst_name = move || node_name(edge.dst_id);
								view! {
									<div class="item">
										<div class="item-row">
											<div class="item-icon item-icon-green">{edge.id}</div>
											<div class="item-content">
												<div class="item-title">
													{move || format!("{} → {}", src_name(), dst_name())}
												</div>
												<div class="item-subtitle">
													{format!(
														"Distancia: {} | IDs: {} → {}",
														edge.weight, edge.src_id, edge.dst_id,
													)}
												</div>
											</div>
										</div>
										<button
											class="btn btn-danger btn-small"
											on:click=move |_| on_delete(edge.id, src_name(), dst_name())
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
