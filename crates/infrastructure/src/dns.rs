pub mod handler;
pub mod server;
pub mod transport;
pub mod wire;

pub use handler::QueryHandler;
pub use server::StubDnsServer;
