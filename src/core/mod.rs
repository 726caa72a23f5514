

pub mod config;
pub mod credentials;
pub mod error;
pub mod random;

pub use config::KeywordConfig;
pub use credentials::{CredentialStore, Credentials};
pub use error::{KeywordError, Result};
pub use random::RandomSource;
