//! # Process Syscalls
//!
//! Wrappers finos entre o registrador de argumentos e o `Kernel`.

pub mod lifecycle;
pub mod memory;
pub mod sched;

pub use lifecycle::*;
pub use memory::*;
pub use sched::*;
