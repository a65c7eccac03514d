//! # Hardware Abstraction Layer
//!
//! Fronteira entre o núcleo de escalonamento e a plataforma: CPU e
//! interrupções, troca de contexto, memória e sistema de arquivos. O kernel
//! real implementa estes traits sobre o x86_64; os testes de host usam uma
//! plataforma simulada com threads.

pub mod traits;

pub use traits::{ContextOps, CpuOps, FsOps, MemOps, Platform};
