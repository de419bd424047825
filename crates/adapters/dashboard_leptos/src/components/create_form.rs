//! Form adding a new restaurant.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::use_toasts;
use crate::state::{self, FormFields};

/// Three inputs and a submit button. Inputs are cleared only after the
/// server accepted the record.
#[component]
pub fn CreateForm(
    /// Called after a successful creation.
    #[prop(into)]
    on_created: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let fields = RwSignal::new(FormFields::default());
    let (is_saving, set_is_saving) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Ok(restaurant) = fields.get_untracked().to_new_restaurant() else {
            toasts.error(state::REQUIRED_FIELDS);
            return;
        };

        set_is_saving.set(true);
        spawn_local(async move {
            match api::create_restaurant(&restaurant).await {
                Ok(()) => {
                    toasts.info(state::CREATED);
                    fields.set(FormFields::default());
                    on_created.run(());
                }
                Err(_) => toasts.error(state::CREATE_FAILED),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <form class="create-form" on:submit=submit>
            <h2>"Agregar restaurante"</h2>
            <input
                type="text"
                placeholder="Nombre"
                prop:value=move || fields.with(|f| f.name.clone())
                on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Dirección"
                prop:value=move || fields.with(|f| f.address.clone())
                on:input=move |ev| fields.update(|f| f.address = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Teléfono"
                prop:value=move || fields.with(|f| f.phone.clone())
                on:input=move |ev| fields.update(|f| f.phone = event_target_value(&ev))
            />
            <button type="submit" disabled=move || is_saving.get()>"Agregar"</button>
        </form>
    }
}
