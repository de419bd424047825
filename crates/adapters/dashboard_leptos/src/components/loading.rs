use leptos::prelude::*;

/// Placeholder shown while the restaurant list is being fetched.
#[component]
pub fn Loading(
    #[prop(default = "Cargando restaurantes\u{2026}")] message: &'static str,
) -> impl IntoView {
    view! {
        <p class="loading" role="status" aria-live="polite">
            <span class="spinner"></span>
            {message}
        </p>
    }
}
