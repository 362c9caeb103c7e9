use leptos::prelude::*;

use crate::components::neural_graph::NeuralGraphCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<NeuralGraphCanvas fullscreen=true />
				<div class="graph-overlay">
					<h1>"Neural Graph"</h1>
					<p class="subtitle">"Nodes link up by proximity and take their color from how connected they are."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
