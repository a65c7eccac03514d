//! Primitivas de bloqueio do scheduler

pub mod channel;
pub mod sleep;

pub use channel::Channel;
