pub mod order_protocol;
pub mod resolver_access;

pub use order_protocol::*;
pub use resolver_access::*;
