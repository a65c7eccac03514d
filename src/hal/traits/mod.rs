//! Traits de plataforma consumidos pelo núcleo de processos

pub mod context;
pub mod cpu;
pub mod memory;
pub mod storage;

pub use context::ContextOps;
pub use cpu::CpuOps;
pub use memory::MemOps;
pub use storage::FsOps;

/// Tudo que o `Kernel` precisa da plataforma.
pub trait Platform: CpuOps + ContextOps + MemOps + FsOps + Sync {}

impl<T: CpuOps + ContextOps + MemOps + FsOps + Sync> Platform for T {}
