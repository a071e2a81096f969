//! Algorithms feature view: run backend BFS and Dijkstra and render results.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::algorithms::{self, BfsResult, DijkstraResult};
use crate::api::graph::{self, Node};
use crate::validate;

/// Map raw backend messages for shortest-path failures onto friendlier copy.
///
/// The backend exposes only free-text `detail` strings, so this matches the
/// known phrasings for the "no path" and "missing node" cases; anything else
/// passes through behind a generic prefix.
fn friendly_dijkstra_error(message: &str) -> String {
	let lower = message.to_lowercase();
	if lower.contains("no existe un") || lower.contains("no path found") {
		"No existe un camino entre los nodos seleccionados. Verifica que ambos nodos estén conectados.".into()
	} else if lower.contains("not found") {
		"Uno o ambos nodos seleccionados no existen. Por favor, verifica los IDs.".into()
	} else {
		format!("Error al calcular el camino mínimo: {message}")
	}
}

/// Algorithms tab: one card per algorithm, results rendered underneath.
#[component]
pub fn AlgorithmsSection() -> impl IntoView {
	let (nodes, set_nodes) = signal(Vec::<Node>::new());
	let (bfs_start, set_bfs_start) = signal(String::new());
	let (bfs_depth, set_bfs_depth) = signal("3".to_string());
	let (dij_src, set_dij_src) = signal(String::new());
	let (dij_dst, set_dij_dst) = signal(String::new());
	let (bfs_result, set_bfs_result) = signal(None::<BfsResult>);
	let (dij_result, set_dij_result) = signal(None::<DijkstraResult>);
	let (loading_nodes, set_loading_nodes) = signal(false);
	let (loading_bfs, set_loading_bfs) = signal(false);
	let (loading_dij, set_loading_dij) = signal(false);
	let (error, set_error) = signal(String::new());

	let load_nodes = move || {
		spawn_local(async move {
			set_loading_nodes.set(true);
			match graph::list_nodes().await {
				Ok(list) => set_nodes.set(list),
				Err(err) => set_error.set(format!("Error al cargar nodos: {err}")),
			}
			set_loading_nodes.set(false);
		});
	};
	load_nodes();

	let node_name = move |id: i64| {
		nodes
			.get()
			.iter()
			.find(|n| n.id == id)
			.map(|n| n.name.clone())
			.unwrap_or_else(|| format!("Nodo {id}"))
	};

	let on_bfs = move |ev: web_sys::SubmitEvent| {
		ev.prevent_default();
		let (start_id, max_depth) = match validate::bfs_input(&bfs_start.get(), &bfs_depth.get()) {
			Ok(parsed) => parsed,
			Err(message) => {
				set_error.set(message);
				return;
			}
		};
		spawn_local(async move {
			set_error.set(String::new());
			set_loading_bfs.set(true);
			set_bfs_result.set(None);
			match algorithms::bfs(start_id, max_depth).await {
				Ok(result) => set_bfs_result.set(Some(result)),
				Err(err) => set_error.set(format!("Error en BFS: {err}")),
			}
			set_loading_bfs.set(false);
		});
	};

	let on_dijkstra = move |ev: web_sys::SubmitEvent| {
		ev.prevent_default();
		let (src_id, dst_id) = match validate::dijkstra_input(&dij_src.get(), &dij_dst.get()) {
			Ok(parsed) => parsed,
			Err(message) => {
				set_error.set(message);
				return;
			}
		};
		spawn_local(async move {
			set_error.set(String::new());
			set_loading_dij.set(true);
			set_dij_result.set(None);
			match algorithms::shortest_path(src_id, dst_id).await {
				Ok(result) => set_dij_result.set(Some(result)),
				Err(err) => set_error.set(friendly_dijkstra_error(&err.to_string())),
			}
			set_loading_dij.set(false);
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

	let bfs_card = move || {
		bfs_result.get().map(|result| {
			let visited = if result.visited_nodes.is_empty() {
				view! { <span class="muted">"No se encontraron nodos"</span> }.into_any()
			} else {
				result
					.visited_nodes
					.iter()
					.map(|id| {
						view! {
							<span class="badge badge-green">
								{format!("{} ({})", node_name(*id), id)}
							</span>
						}
					})
					.collect_view()
					.into_any()
			};
			view! {
				<div class="card">
					<h4 class="result-title result-title-bfs">
						"Resultado BFS (Búsqueda en Anchura)"
					</h4>

					<div class="result-grid result-grid-2">
						<div>
							<span class="result-label">"Nodo inicio:"</span>
							<p class="result-value">
								{format!("{} (ID: {})", node_name(result.start_node), result.start_node)}
							</p>
						</div>
						<div>
							<span class="result-label">"Profundidad máxima:"</span>
							<p class="result-value">{result.max_depth}</p>
						</div>
					</div>

					<div>
						<span class="result-label">"Nodos visitados:"</span>
						<div class="result-box badge-row">{visited}</div>
					</div>
				</div>
			}
		})
	};

	let dijkstra_card = move || {
		dij_result.get().map(|result| {
			let last = result.path.len().saturating_sub(1);
			let path = result
				.path
				.iter()
				.enumerate()
				.map(|(i, id)| {
					view! {
						<span>
							<span class="badge badge-indigo">
								{format!("{} ({})", node_name(*id), id)}
							</span>
							{(i < last).then(|| view! { <span class="path-arrow">"→"</span> })}
						</span>
					}
				})
				.collect_view();
			view! {
				<div class="card">
					<h4 class="result-title result-title-dijkstra">
						"Resultado Dijkstra (Camino Mínimo)"
					</h4>

					<div class="result-grid result-grid-3">
						<div>
							<span class="result-label">"Nodo inicio:"</span>
							<p class="result-value">
								{format!("{} (ID: {})", node_name(result.start_node), result.start_node)}
							</p>
						</div>
						<div>
							<span class="result-label">"Nodo destino:"</span>
							<p class="result-value">
								{format!("{} (ID: {})", node_name(result.end_node), result.end_node)}
							</p>
						</div>
						<div>
							<span class="result-label">"Distancia total:"</span>
							<p class="result-value result-value-strong">{result.distance}</p>
						</div>
					</div>

					<div>
						<span class="result-label">"Camino encontrado:"</span>
						<div class="result-box path-row">{path}</div>
					</div>
				</div>
			}
		})
	};

	view! {
		<div class="space-y-6">
			<div>
				<h2 class="section-title">"Algoritmos de Búsqueda"</h2>
				<p class="section-subtitle">"Ejecutar algoritmos BFS y Dijkstra en el grafo"</p>
			</div>

			<Show when=move || !error.get().is_empty()>
				<div class="alert alert-error">{move || error.get()}</div>
			</Show>

			<Show
				when=move || !nodes.get().is_empty() || loading_nodes.get()
				fallback=|| {
					view! {
						<div class="alert alert-warning">
							"No hay nodos disponibles. Crea algunos nodos primero para usar los algoritmos."
						</div>
					}
				}
			>
				<div class="algo-grid">
					<div class="card">
						<h3 class="card-title card-title-bfs">"BFS (Búsqueda en Anchura)"</h3>
						<p class="section-subtitle">
							"Explora nodos en forma de árbol hasta cierta profundidad"
						</p>

						<form class="space-y-4" on:submit=on_bfs>
							<div>
								<label class="form-label">"Nodo de Inicio"</label>
								<select
									class="select"
									prop:value=bfs_start
									on:change=move |ev| set_bfs_start.set(event_target_value(&ev))
									prop:disabled=loading_bfs
									required
								>
									<option value="">"Seleccionar nodo"</option>
									{node_options}
								</select>
							</div>

							<div>
								<label class="form-label">"Profundidad Máxima"</label>
								<input
									type="number"
									min="1"
									max="10"
									class="input"
									prop:value=bfs_depth
									on:input=move |ev| set_bfs_depth.set(event_target_value(&ev))
									prop:disabled=loading_bfs
								/>
							</div>

							<button
								type="submit"
								class="btn btn-primary btn-block"
								prop:disabled=move || loading_bfs.get() || nodes.get().is_empty()
							>
								{move || if loading_bfs.get() { "Ejecutando BFS..." } else { "Ejecutar BFS" }}
							</button>
						</form>
					</div>

					<div class="card">
						<h3 class="card-title card-title-dijkstra">"Dijkstra (Camino Mínimo)"</h3>
						<p class="section-subtitle">
							"Encuentra el camino más corto entre dos nodos"
						</p>

						<form class="space-y-4" on:submit=on_dijkstra>
							<div>
								<label class="form-label">"Nodo de Inicio"</label>
								<select
									class="select"
									prop:value=dij_src
									on:change=move |ev| set_dij_src.set(event_target_value(&ev))
									prop:disabled=loading_dij
									required
								>
									<option value="">"Seleccionar inicio"</option>
									{node_options}
								</select>
							</div>

							<div>
								<label class="form-label">"Nodo de Destino"</label>
								<select
									class="select"
									prop:value=dij_dst
									on:change=move |ev| set_dij_dst.set(event_target_value(&ev))
									prop:disabled=loading_dij
									required
								>
									<option value="">"Seleccionar destino"</option>
									{node_options}
								</select>
							</div>

							<button
								type="submit"
								class="btn btn-primary btn-block"
								prop:disabled=move || loading_dij.get() || nodes.get().len() < 2
							>
								{move || {
									if loading_dij.get() { "Ejecutando Dijkstra..." } else { "Ejecutar Dijkstra" }
								}}
							</button>
						</form>
					</div>
				</div>
			</Show>

			<div class="space-y-6">
				{bfs_card}
				{dijkstra_card}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_path_detail_maps_to_localized_message() {
		let detail = "No existe un camino entre los nodos 1 y 2. Verifica que ambos nodos estén conectados por aristas.";
		assert_eq!(
			friendly_dijkstra_error(detail),
			"No existe un camino entre los nodos seleccionados. Verifica que ambos nodos estén conectados."
		);
	}

	#[test]
	fn english_no_path_maps_to_localized_message() {
		assert_eq!(
			friendly_dijkstra_error("No path found between 3 and 9"),
			"No existe un camino entre los nodos seleccionados. Verifica que ambos nodos estén conectados."
		);
	}

	#[test]
	fn missing_node_maps_to_id_hint() {
		assert_eq!(
			friendly_dijkstra_error("Source node with id 42 not found"),
			"Uno o ambos nodos seleccionados no existen. Por favor, verifica los IDs."
		);
	}

	#[test]
	fn other_errors_pass_through_prefixed() {
		assert_eq!(
			friendly_dijkstra_error("boom"),
			"Error al calcular el camino mínimo: boom"
		);
	}
}
