pub mod middleware;
pub mod routes;
pub mod state;

pub use middleware::SecurityHeaders;
pub use state::ServerConfig;
