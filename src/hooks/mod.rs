pub mod auth_context;
pub mod use_auth;
pub mod use_table;

pub use auth_context::{use_auth_context, AuthContextProvider};
pub use use_auth::{use_auth, AuthState, UseAuthHandle};
pub use use_table::{use_table, UseTableHandle};
