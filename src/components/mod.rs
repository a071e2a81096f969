mod algorithms;
mod edges;
mod nodes;

pub use algorithms::AlgorithmsSection;
pub use edges::EdgesSection;
pub use nodes::NodesSection;

/// Ask the user to confirm a destructive action.
pub(crate) fn confirm(message: &str) -> bool {
	web_sys::window()
		.map(|w| w.confirm_with_message(message).unwrap_or(false))
		.unwrap_or(false)
}
