use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <h1>"Get the launcher"</h1>
            <p class="tagline">"Pick your platform below — we guessed yours from the browser."</p>
        </header>
    }
}
