//! Algorithm endpoints.
//!
//! Computation happens entirely on the backend; the client passes parameters
//! and renders the returned traversal.

use serde::Deserialize;

use super::ApiError;

/// Breadth-first traversal result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BfsResult {
	/// Node ids in visit order.
	pub visited_nodes: Vec<i64>,
	/// Node the traversal started from.
	pub start_node: i64,
	/// Depth bound the traversal ran with.
	pub max_depth: i64,
}

/// Shortest-path result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DijkstraResult {
	/// Node ids along the path, start to end.
	pub path: Vec<i64>,
	/// Total weight of the path.
	pub distance: f64,
	/// Requested start node.
	pub start_node: i64,
	/// Requested end node.
	pub end_node: i64,
}

/// Run a depth-bounded breadth-first traversal from `start_id`.
pub async fn bfs(start_id: i64, max_depth: u32) -> Result<BfsResult, ApiError> {
	super::get_json(&format!("/graph/bfs?start_id={start_id}&max_depth={max_depth}")).await
}

/// Compute the shortest weighted path from `src_id` to `dst_id`.
pub async fn shortest_path(src_id: i64, dst_id: i64) -> Result<DijkstraResult, ApiError> {
	super::get_json(&format!("/graph/shortest-path?src_id={src_id}&dst_id={dst_id}")).await
}
