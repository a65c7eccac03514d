//! # Syscall ABI
//!
//! Contrato binário das syscalls: número em um registrador, até seis
//! argumentos, retorno em um registrador (`-1` em erro).

pub mod args;

pub use args::{SyscallArgs, MAX_ARGS};
