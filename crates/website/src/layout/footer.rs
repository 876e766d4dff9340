use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>"Free and open source. Issues and source on the project page."</span>
        </footer>
    }
}
