//! Restaurant table with per-row inline editing.
//!
//! The table is rebuilt from scratch from the rows it is given; each row owns
//! a [`RowMode`] that selects which set of cells and buttons it renders.

use leptos::prelude::*;
use leptos::task::spawn_local;
use restohub_domain::restaurant::{Restaurant, RestaurantChanges};

use crate::api;
use crate::components::use_toasts;
use crate::state::{self, FormFields, RowMode};

/// A table displaying every restaurant.
#[component]
pub fn RestaurantTable(
    /// Rows as last fetched from the API.
    rows: Vec<Restaurant>,
    /// Called after a row was saved or deleted, to reload the list.
    #[prop(into)]
    on_changed: Callback<()>,
) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Nombre"</th>
                    <th>"Dirección"</th>
                    <th>"Teléfono"</th>
                    <th>"Acciones"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|restaurant| {
                    view! {
                        <RestaurantRow restaurant=restaurant on_changed=on_changed/>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Ask the browser for confirmation; a missing window counts as "no".
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// A single row, either showing values or editing them.
#[component]
fn RestaurantRow(
    /// The stored record this row shows.
    restaurant: Restaurant,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let id = restaurant.id;
    let (mode, set_mode) = signal(RowMode::Viewing);
    let draft = RwSignal::new(FormFields::from_restaurant(&restaurant));
    let original = StoredValue::new(restaurant);

    let start_edit = move |_| {
        draft.set(original.with_value(FormFields::from_restaurant));
        set_mode.set(RowMode::Editing);
    };

    let cancel_edit = move |_| {
        draft.set(original.with_value(FormFields::from_restaurant));
        set_mode.set(RowMode::Viewing);
    };

    let save_edit = move |_| {
        let Ok(fields) = draft.get_untracked().to_new_restaurant() else {
            toasts.error(state::REQUIRED_FIELDS);
            return;
        };
        let changes = RestaurantChanges::from(fields);
        spawn_local(async move {
            match api::update_restaurant(id, &changes).await {
                Ok(()) => {
                    toasts.info(state::UPDATED);
                    on_changed.run(());
                }
                Err(_) => toasts.error(state::UPDATE_FAILED),
            }
        });
    };

    let delete_row = move |_| {
        if !confirm(state::CONFIRM_DELETE) {
            return;
        }
        spawn_local(async move {
            match api::delete_restaurant(id).await {
                Ok(()) => {
                    toasts.info(state::DELETED);
                    on_changed.run(());
                }
                Err(_) => toasts.error(state::DELETE_FAILED),
            }
        });
    };

    view! {
        <tr>
            <td>{id.to_string()}</td>
            {move || match mode.get() {
                RowMode::Viewing => view! {
                    <td>{original.with_value(|r| r.name.clone())}</td>
                    <td>{original.with_value(|r| r.address.clone())}</td>
                    <td>{original.with_value(|r| r.phone.clone())}</td>
                    <td class="acciones">
                        <button class="edit" on:click=start_edit>"Editar"</button>
                        <button class="delete" on:click=delete_row>"Eliminar"</button>
                    </td>
                }.into_any(),
                RowMode::Editing => view! {
                    <td>
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </td>
                    <td>
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.address.clone())
                            on:input=move |ev| draft.update(|d| d.address = event_target_value(&ev))
                        />
                    </td>
                    <td>
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                        />
                    </td>
                    <td class="acciones">
                        <button class="save" on:click=save_edit>"Guardar"</button>
                        <button class="cancel" on:click=cancel_edit>"Cancelar"</button>
                        <button class="delete" on:click=delete_row>"Eliminar"</button>
                    </td>
                }.into_any(),
            }}
        </tr>
    }
}
