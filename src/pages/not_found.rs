use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="flex flex-col items-center justify-center min-h-screen gap-4">
			<h1 class="text-3xl font-bold">"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<a href="/" class="text-primary underline">"Back to the skills"</a>
		</div>
	}
}
