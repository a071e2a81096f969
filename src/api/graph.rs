//! Node and edge endpoints.
//!
//! Each function maps 1:1 to a REST call and returns the parsed payload.
//! Deleting a node also removes its incident edges on the backend.

use serde::{Deserialize, Serialize};

use super::ApiError;

/// A vertex of the managed graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Node {
	/// Backend-assigned id.
	pub id: i64,
	/// Display name, unique backend-side.
	pub name: String,
}

/// A directed weighted connection between two nodes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Edge {
	/// Backend-assigned id.
	pub id: i64,
	/// Source node id.
	pub src_id: i64,
	/// Destination node id.
	pub dst_id: i64,
	/// Edge weight, greater than zero.
	pub weight: f64,
}

#[derive(Serialize)]
struct NodeCreate<'a> {
	name: &'a str,
}

#[derive(Serialize)]
struct EdgeCreate {
	src_id: i64,
	dst_id: i64,
	weight: f64,
}

/// List every node.
pub async fn list_nodes() -> Result<Vec<Node>, ApiError> {
	super::get_json("/graph/nodes").await
}

/// Create a node with the given display name.
pub async fn create_node(name: &str) -> Result<Node, ApiError> {
	super::post_json("/graph/nodes", &NodeCreate { name }).await
}

/// Delete a node (and, backend-side, its incident edges).
pub async fn delete_node(id: i64) -> Result<(), ApiError> {
	super::delete(&format!("/graph/nodes/{id}")).await
}

/// List every edge.
pub async fn list_edges() -> Result<Vec<Edge>, ApiError> {
	super::get_json("/graph/edges").await
}

/// Create a directed weighted edge between two existing nodes.
pub async fn create_edge(src_id: i64, dst_id: i64, weight: f64) -> Result<Edge, ApiError> {
	super::post_json("/graph/edges", &EdgeCreate { src_id, dst_id, weight }).await
}

/// Delete an edge.
pub async fn delete_edge(id: i64) -> Result<(), ApiError> {
	super::delete(&format!("/graph/edges/{id}")).await
}
