pub mod http;
pub mod server;


pub use server::Server;
