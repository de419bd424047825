//! Admin page for restohub, a Leptos client-side app talking to
//! `/api/restaurantes`.

use leptos::prelude::*;

pub mod api;
mod components;
mod pages;
pub mod state;

use components::ToastContainer;
use pages::Restaurants;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <main>
                <Restaurants/>
            </main>
        </ToastContainer>
    }
}
