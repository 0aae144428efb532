mod credentials;
mod secret;

pub use credentials::{
    CredentialsSettings, DEFAULT_API_KEY_VARIABLE, DEFAULT_API_TOKEN_VARIABLE,
    DEFAULT_EMAIL_VARIABLE,
};
pub use secret::Secret;
