//! Client-side form validation.
//!
//! Only form-level rules live here; graph invariants (name uniqueness, node
//! existence, connectivity) are backend-enforced. Error strings are the
//! user-facing messages the views render inline, so they are worded for the
//! user, not for a log.

/// Smallest depth the BFS form accepts.
pub const MIN_DEPTH: u32 = 1;
/// Largest depth the BFS form accepts.
pub const MAX_DEPTH: u32 = 10;

const EDGE_FIELDS_REQUIRED: &str =
	"Todos los campos son requeridos y la distancia debe ser mayor a 0";
const DEPTH_OUT_OF_RANGE: &str = "La profundidad máxima debe estar entre 1 y 10";

/// Validate a node name: non-empty after trimming.
pub fn node_name(raw: &str) -> Result<String, String> {
	let name = raw.trim();
	if name.is_empty() {
		return Err("El nombre del nodo es requerido".into());
	}
	Ok(name.to_string())
}

/// Validate edge-creation input: both endpoints selected and distinct, and a
/// weight greater than zero. Inputs arrive as the raw form strings.
pub fn edge_input(src: &str, dst: &str, weight: &str) -> Result<(i64, i64, f64), String> {
	let src_id: i64 = src.parse().map_err(|_| EDGE_FIELDS_REQUIRED.to_string())?;
	let dst_id: i64 = dst.parse().map_err(|_| EDGE_FIELDS_REQUIRED.to_string())?;
	let weight: f64 = weight.parse().map_err(|_| EDGE_FIELDS_REQUIRED.to_string())?;
	if weight <= 0.0 {
		return Err(EDGE_FIELDS_REQUIRED.into());
	}
	if src_id == dst_id {
		return Err("El nodo origen y destino deben ser diferentes".into());
	}
	Ok((src_id, dst_id, weight))
}

/// Validate the BFS form: a selected start node and a depth within
/// [`MIN_DEPTH`]..=[`MAX_DEPTH`].
pub fn bfs_input(start: &str, depth: &str) -> Result<(i64, u32), String> {
	let start_id: i64 = start
		.parse()
		.map_err(|_| "Selecciona un nodo de inicio para BFS".to_string())?;
	let depth: u32 = depth.parse().map_err(|_| DEPTH_OUT_OF_RANGE.to_string())?;
	if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
		return Err(DEPTH_OUT_OF_RANGE.into());
	}
	Ok((start_id, depth))
}

/// Validate the Dijkstra form: two selected, distinct nodes.
pub fn dijkstra_input(src: &str, dst: &str) -> Result<(i64, i64), String> {
	let (Ok(src_id), Ok(dst_id)) = (src.parse::<i64>(), dst.parse::<i64>()) else {
		return Err("Selecciona nodos de inicio y fin para Dijkstra".into());
	};
	if src_id == dst_id {
		return Err("Los nodos de inicio y fin deben ser diferentes".into());
	}
	Ok((src_id, dst_id))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_name_trims() {
		assert_eq!(node_name("  Ciudad A  "), Ok("Ciudad A".to_string()));
	}

	#[test]
	fn node_name_rejects_blank() {
		assert!(node_name("").is_err());
		assert!(node_name("   ").is_err());
	}

	#[test]
	fn edge_accepts_valid_input() {
		assert_eq!(edge_input("1", "2", "5"), Ok((1, 2, 5.0)));
		assert_eq!(edge_input("1", "2", "0.5"), Ok((1, 2, 0.5)));
	}

	#[test]
	fn edge_rejects_same_endpoints() {
		let err = edge_input("3", "3", "1.5").unwrap_err();
		assert_eq!(err, "El nodo origen y destino deben ser diferentes");
	}

	#[test]
	fn edge_rejects_non_positive_weight() {
		assert!(edge_input("1", "2", "0").is_err());
		assert!(edge_input("1", "2", "-4").is_err());
	}

	#[test]
	fn edge_rejects_missing_fields() {
		assert!(edge_input("", "2", "1").is_err());
		assert!(edge_input("1", "", "1").is_err());
		assert!(edge_input("1", "2", "").is_err());
		assert!(edge_input("1", "2", "abc").is_err());
	}

	#[test]
	fn bfs_accepts_depth_bounds() {
		assert_eq!(bfs_input("1", "1"), Ok((1, 1)));
		assert_eq!(bfs_input("1", "10"), Ok((1, 10)));
	}

	#[test]
	fn bfs_rejects_depth_outside_bounds() {
		assert_eq!(bfs_input("1", "0").unwrap_err(), DEPTH_OUT_OF_RANGE);
		assert_eq!(bfs_input("1", "11").unwrap_err(), DEPTH_OUT_OF_RANGE);
		assert_eq!(bfs_input("1", "-1").unwrap_err(), DEPTH_OUT_OF_RANGE);
	}

	#[test]
	fn bfs_rejects_missing_start() {
		assert_eq!(
			bfs_input("", "3").unwrap_err(),
			"Selecciona un nodo de inicio para BFS"
		);
	}

	#[test]
	fn dijkstra_rejects_same_endpoints() {
		assert_eq!(
			dijkstra_input("4", "4").unwrap_err(),
			"Los nodos de inicio y fin deben ser diferentes"
		);
	}

	#[test]
	fn dijkstra_rejects_missing_selection() {
		assert_eq!(
			dijkstra_input("", "2").unwrap_err(),
			"Selecciona nodos de inicio y fin para Dijkstra"
		);
		assert_eq!(
			dijkstra_input("1", "").unwrap_err(),
			"Selecciona nodos de inicio y fin para Dijkstra"
		);
	}

	#[test]
	fn dijkstra_accepts_distinct_nodes() {
		assert_eq!(dijkstra_input("1", "2"), Ok((1, 2)));
	}
}
