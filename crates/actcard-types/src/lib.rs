pub mod activity;
pub mod channel;
pub mod error;
pub mod remote;

pub use activity::*;
pub use channel::*;
pub use error::{Error, Result};
pub use remote::*;
