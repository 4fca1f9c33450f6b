// Adapters layer: concrete implementations for external systems (http services, storage).

pub mod efetch;
pub mod gilda;
pub mod http;
pub mod storage;
