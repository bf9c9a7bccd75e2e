pub mod routes;
pub mod utils;

pub use routes::Route;
pub use utils::{authorize, require_role};
