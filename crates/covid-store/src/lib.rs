pub mod store;

pub use store::CovidStore;
