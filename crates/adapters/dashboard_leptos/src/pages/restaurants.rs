use leptos::prelude::*;

use crate::api;
use crate::components::{CreateForm, Loading, RestaurantTable, SearchPanel};

/// The single admin page: create form, restaurant table and id search.
#[component]
pub fn Restaurants() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0);

    let restaurants = LocalResource::new(move || {
        reload_trigger.track();
        api::fetch_restaurants()
    });

    let reload = move || {
        set_reload_trigger.update(|v| *v += 1);
    };

    view! {
        <div>
            <h1>"Gestión de Restaurantes"</h1>
            <CreateForm on_created=reload/>
            <h2>"Lista de restaurantes"</h2>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    restaurants.read().as_ref().map(|result| match result {
                        Ok(rows) => view! {
                            <RestaurantTable rows=rows.clone() on_changed=reload/>
                        }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Error al cargar los restaurantes: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
            <SearchPanel/>
        </div>
    }
}
