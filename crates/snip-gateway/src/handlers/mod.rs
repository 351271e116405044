mod health;
mod url;

pub use health::health_handler;
pub use url::{create_url_handler, create_url_json_handler, get_url_handler};
