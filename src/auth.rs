//! Credentials, authorization headers, and the authorize-redirect helper.

pub mod authorize;
pub mod descriptor;
pub mod secret;

pub use authorize::*;
pub use descriptor::*;
pub use secret::*;
