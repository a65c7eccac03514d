//! Sistema de Syscalls do núcleo de processos
//!
//! # Módulos
//!
//! - `abi`: registrador de argumentos (`SyscallArgs`)
//! - `numbers`: constantes das syscalls
//! - `dispatch`: tabela e dispatcher
//! - `process`: wrappers de processo, memória e escalonamento

pub mod abi;
pub mod dispatch;
pub mod numbers;
pub mod process;

// Re-exports principais
pub use abi::SyscallArgs;
pub use dispatch::dispatch;
