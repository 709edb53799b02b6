pub mod credentials;

pub use credentials::{Credential, load_env_file};
