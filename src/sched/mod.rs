//! # Multitasking & Scheduler Subsystem
//!
//! Núcleo de processos do Forge: tabela de processos, escalonador MLFQ de
//! três níveis, sleep/wakeup e o scheduler lock.
//!
//! ## 🎯 Propósito e Responsabilidade
//! - **Processos:** `task` define o descritor (`Proc`), a tabela fixa e o
//!   ciclo de vida (fork, exit, wait, kill).
//! - **Política:** `core` decide quem roda: L0 e L1 em round-robin, L2 por
//!   prioridade, boost periódico e o despacho exclusivo do scheduler lock.
//! - **Bloqueio:** `sync` implementa sleep/wakeup por canal.
//!
//! ## 🏗️ Arquitetura: Cooperative + Preemptive
//! 1. **Preemptivo:** a camada de trap chama `yield_now()` a cada tick do
//!    timer e `timer_tick()` uma vez por tick global.
//! 2. **Cooperativo:** processos cedem a CPU em `sleep`, `wait` e `exit`.
//!
//! A troca de contexto e a identificação da CPU ficam atrás dos traits de
//! `crate::hal`; `Kernel<H>` é genérico sobre a plataforma.
//!
//! ## 🔍 Análise Crítica (Kernel Engineer's View)
//!
//! ### ✅ Pontos Fortes
//! - **Sem alocação:** tabela em array fixo e filas encadeadas por índice.
//! - **Invariantes verificadas:** `sched()` entra em pânico com locks
//!   aninhados, descritor Running ou interrupções ligadas.
//!
//! ### ⚠️ Pontos de Atenção (Dívida Técnica)
//! - **Global Lock Contention:** uma única tabela com um único lock para
//!   todas as CPUs.
//! - **Wakeup O(NPROC):** não há índice por canal.
//! - **Scheduler lock:** enquanto o dono está Runnable as outras CPUs ficam
//!   ociosas.

pub mod config;
pub mod core;
pub mod sync;
pub mod task;

pub use self::core::{Dispatch, Kernel, ProcInfo};
pub use self::sync::Channel;
pub use self::task::{Level, ProcState};
