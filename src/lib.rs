//! Forge MLFQ.
//!
//! Núcleo de processos do kernel Forge: tabela de processos, escalonador
//! MLFQ de três níveis com priority boost e scheduler lock, sleep/wakeup e o
//! ciclo de vida fork/exit/wait/kill.
//!
//! O binário do kernel instancia um `Kernel<H>` num `static`, implementa os
//! traits de `hal` para o x86_64 e chama `Kernel::scheduler()` em cada CPU.

#![cfg_attr(not(test), no_std)]

#[doc(hidden)]
pub use log as __log;

// --- Utilitários Internos ---
pub mod klib; // Logging e self-tests

// --- Fronteiras ---
pub mod hal; // Traits de plataforma (CPU, contexto, memória, FS)
pub mod sys; // Ids, handles e erros

// --- Subsistemas ---
pub mod sched; // Tabela de processos e escalonador
pub mod syscall; // Interface com Userspace

pub use crate::sched::{Channel, Dispatch, Kernel, Level, ProcInfo, ProcState};
pub use crate::sys::{ProcError, SysResult};
