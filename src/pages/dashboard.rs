//! Dashboard shell: header, session controls and the three feature tabs.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::{AuthContext, AuthState};
use crate::components::{AlgorithmsSection, EdgesSection, NodesSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
	Nodes,
	Edges,
	Algorithms,
}

impl Tab {
	const ALL: [Tab; 3] = [Tab::Nodes, Tab::Edges, Tab::Algorithms];

	fn label(self) -> &'static str {
		match self {
			Tab::Nodes => "Nodos",
			Tab::Edges => "Aristas",
			Tab::Algorithms => "Algoritmos",
		}
	}

	fn icon(self) -> &'static str {
		match self {
			Tab::Nodes => "●",
			Tab::Edges => "→",
			Tab::Algorithms => "🔍",
		}
	}
}

/// Authenticated landing page composing the three feature views.
#[component]
pub fn Dashboard() -> impl IntoView {
	let auth = expect_context::<AuthContext>();
	let navigate = use_navigate();

	// Unauthenticated visits land on the login page.
	Effect::new(move |_| {
		if auth.state() == AuthState::Anonymous {
			navigate("/login", Default::default());
		}
	});

	let (active_tab, set_active_tab) = signal(Tab::Nodes);

	view! {
		<div class="min-h-screen">
			<header class="header">
				<div class="container header-row">
					<div>
						<h1 class="header-title">"PathFinder"</h1>
						<p class="header-subtitle">"Explorador de Grafos"</p>
					</div>
					<div class="header-session">
						<span class="header-welcome">
							"Bienvenido, "
							<span class="header-username">
								{move || auth.user().map(|u| u.username).unwrap_or_default()}
							</span>
						</span>
						<button class="btn btn-danger" on:click=move |_| auth.logout()>
							"Cerrar sesión"
						</button>
					</div>
				</div>
			</header>

			<div class="container">
				<div class="nav-tabs">
					{Tab::ALL
						.into_iter()
						.map(|tab| {
							view! {
								<button
									class=move || {
										if active_tab.get() == tab { "nav-tab active" } else { "nav-tab" }
									}
									on:click=move |_| set_active_tab.set(tab)
								>
									<span class="nav-tab-icon">{tab.icon()}</span>
									<span>{tab.label()}</span>
								</button>
							}
						})
						.collect_view()}
				</div>
			</div>

			<main class="container main-content">
				{move || match active_tab.get() {
					Tab::Nodes => view! { <NodesSection /> }.into_any(),
					Tab::Edges => view! { <EdgesSection /> }.into_any(),
					Tab::Algorithms => view! { <AlgorithmsSection /> }.into_any(),
				}}
			</main>
		</div>
	}
}
