pub mod set;

pub use set::{SetArgs, run_set, set_command};
