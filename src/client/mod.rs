pub mod asana_client;

pub use asana_client::AsanaClient;
