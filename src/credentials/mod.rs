mod store;

pub use store::{API_KEY_ENV, CredentialStore, PLACEHOLDER_KEY};
