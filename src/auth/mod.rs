pub mod client;
pub mod handlers;
pub mod session;
pub mod storage;

#[cfg(test)]
pub(crate) mod fake;
