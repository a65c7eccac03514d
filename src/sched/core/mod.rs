//! # Scheduler Core
//!
//! `Kernel<H>` é o estado inteiro do núcleo de processos: a tabela de
//! processos atrás de um spinlock, as três filas MLFQ (cada uma com o seu
//! lock), o estado por CPU e o contador global de ticks.
//!
//! ## Disciplina de locks
//! - Tabela antes de fila, nunca o contrário.
//! - Todo acesso à tabela passa por `acquire()`, que desliga interrupções
//!   (`push_off`) antes de travar e as devolve (`pop_off`) ao soltar.
//! - Nenhum lock da tabela atravessa uma troca de contexto: quem troca solta
//!   o spinlock mas mantém a profundidade de `push_off`, e quem retoma trava
//!   de novo sem somar profundidade.

pub mod cpu;
pub mod debug;
pub mod policy;
pub mod priority;
pub mod runqueue;
pub mod scheduler;

pub use cpu::Cpu;
pub use debug::ProcInfo;
pub use runqueue::RunQueue;
pub use scheduler::Dispatch;

use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{AtomicU64, Ordering};

use spin::{Mutex, MutexGuard};

use crate::hal::Platform;
use crate::sched::config::{LEVELS, NCPU};
use crate::sched::task::{Level, ProcTable};
use crate::sys::types::Pid;

/// Estado do núcleo de processos
pub struct Kernel<H> {
    pub(crate) hal: H,
    pub(crate) table: Mutex<ProcTable>,
    pub(crate) queues: [Mutex<RunQueue>; LEVELS],
    pub(crate) cpus: [Cpu; NCPU],
    /// Ticks globais (zerados pelo scheduler lock)
    pub(crate) ticks: AtomicU64,
}

impl<H> Kernel<H> {
    /// Estado vazio; pode morar num `static`.
    pub const fn new(hal: H) -> Self {
        Self {
            hal,
            table: Mutex::new(ProcTable::new()),
            queues: [
                Mutex::new(RunQueue::new()),
                Mutex::new(RunQueue::new()),
                Mutex::new(RunQueue::new()),
            ],
            cpus: [Cpu::NEW; NCPU],
            ticks: AtomicU64::new(0),
        }
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    /// Ticks desde o boot (ou desde o último scheduler lock)
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }
}

impl<H: Platform> Kernel<H> {
    /// Trava a tabela com interrupções desligadas
    pub(crate) fn acquire(&self) -> TableGuard<'_, H> {
        self.push_off();
        TableGuard {
            kernel: self,
            inner: ManuallyDrop::new(self.table.lock()),
        }
    }

    /// Trava de novo depois de uma troca de contexto; a profundidade de
    /// push_off veio junto com a CPU.
    pub(crate) fn relock(&self) -> TableGuard<'_, H> {
        TableGuard {
            kernel: self,
            inner: ManuallyDrop::new(self.table.lock()),
        }
    }

    // =========================================================================
    // FILAS
    // =========================================================================
    //
    // Chamadas sempre com o lock da tabela; o lock da fila só protege os
    // encadeamentos.

    pub(crate) fn enqueue(&self, level: Level, slot: usize) {
        self.queues[level.index()].lock().push_back(slot);
    }

    pub(crate) fn dequeue(&self, level: Level, slot: usize) -> bool {
        self.queues[level.index()].lock().remove(slot)
    }

    /// Fim da fila do mesmo nível
    pub(crate) fn requeue(&self, level: Level, slot: usize) {
        let mut queue = self.queues[level.index()].lock();
        queue.remove(slot);
        queue.push_back(slot);
    }

    pub(crate) fn migrate(&self, from: Level, to: Level, slot: usize) {
        self.dequeue(from, slot);
        self.enqueue(to, slot);
    }

    /// Visita os slots de uma fila, da cabeça à cauda
    pub fn for_each_queued<F: FnMut(Pid)>(&self, level: Level, mut f: F) {
        let table = self.acquire();
        let queue = self.queues[level.index()].lock();
        for slot in queue.iter() {
            f(table.procs[slot].pid);
        }
    }

    /// Tamanho de uma fila
    pub fn queue_len(&self, level: Level) -> usize {
        let _table = self.acquire();
        let len = self.queues[level.index()].lock().len();
        len
    }
}

/// Guarda do lock da tabela
///
/// Soltar a guarda destrava a tabela e faz `pop_off`.
pub(crate) struct TableGuard<'a, H: Platform> {
    kernel: &'a Kernel<H>,
    inner: ManuallyDrop<MutexGuard<'a, ProcTable>>,
}

impl<'a, H: Platform> TableGuard<'a, H> {
    /// Solta só o spinlock, para a troca de contexto.
    /// A profundidade de push_off continua contada nesta CPU.
    pub(crate) fn unlock_for_switch(self) {
        let mut this = ManuallyDrop::new(self);
        // SAFETY: `this` não é usado nem dropado depois daqui
        unsafe { ManuallyDrop::drop(&mut this.inner) };
    }
}

impl<H: Platform> Deref for TableGuard<'_, H> {
    type Target = ProcTable;

    fn deref(&self) -> &ProcTable {
        &self.inner
    }
}

impl<H: Platform> DerefMut for TableGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut ProcTable {
        &mut self.inner
    }
}

impl<H: Platform> Drop for TableGuard<'_, H> {
    fn drop(&mut self) {
        // SAFETY: a guarda interna é dropada uma única vez, aqui
        unsafe { ManuallyDrop::drop(&mut self.inner) };
        self.kernel.pop_off();
    }
}
