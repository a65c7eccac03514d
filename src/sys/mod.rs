//! Definições compartilhadas com o resto do kernel: ids, handles e erros.

pub mod error;
pub mod types;

pub use error::{ProcError, SysResult};
pub use types::{AddressSpace, FileRef, InodeRef, KernelStack, Pid};
