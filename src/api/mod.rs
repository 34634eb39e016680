pub mod allsports;
pub mod proxy;

pub use allsports::AllSportsClient;
pub use proxy::ProxyClient;
