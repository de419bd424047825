mod restaurants;

pub use restaurants::Restaurants;
