mod create_form;
mod loading;
mod restaurant_table;
mod search_panel;
mod toast;

pub use create_form::CreateForm;
pub use loading::Loading;
pub use restaurant_table::RestaurantTable;
pub use search_panel::SearchPanel;
pub use toast::{ToastContainer, use_toasts};
