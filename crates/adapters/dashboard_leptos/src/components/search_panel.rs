//! Lookup of a single restaurant by id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::SearchOutcome;

/// Id input plus a detail block for the last search.
#[component]
pub fn SearchPanel() -> impl IntoView {
    let (id, set_id) = signal(String::new());
    let (outcome, set_outcome) = signal::<Option<SearchOutcome>>(None);

    let search = move |_| {
        let typed = id.get_untracked().trim().to_string();
        if typed.is_empty() {
            set_outcome.set(Some(SearchOutcome::BlankId));
            return;
        }
        spawn_local(async move {
            let result = api::fetch_restaurant(&typed).await;
            set_outcome.set(Some(SearchOutcome::from_lookup(&typed, result)));
        });
    };

    view! {
        <section class="search-panel">
            <h2>"Buscar restaurante por ID"</h2>
            <input
                type="text"
                placeholder="ID"
                prop:value=move || id.get()
                on:input=move |ev| set_id.set(event_target_value(&ev))
            />
            <button on:click=search>"Buscar"</button>
            {move || outcome.get().map(|outcome| match outcome {
                SearchOutcome::Found(restaurant) => view! {
                    <div class="search-result">
                        <p><strong>"ID: "</strong>{restaurant.id.to_string()}</p>
                        <p><strong>"Nombre: "</strong>{restaurant.name}</p>
                        <p><strong>"Dirección: "</strong>{restaurant.address}</p>
                        <p><strong>"Teléfono: "</strong>{restaurant.phone}</p>
                    </div>
                }.into_any(),
                other => view! {
                    <p class="error">{other.error_message()}</p>
                }.into_any(),
            })}
        </section>
    }
}
