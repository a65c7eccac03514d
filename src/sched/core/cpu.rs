//! Estado por CPU
//!
//! Cada CPU guarda o slot que está executando e a contabilidade de
//! `push_off`/`pop_off`: profundidade de aninhamento de seções com
//! interrupções desligadas e o estado das interrupções antes da primeira.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::Kernel;
use crate::hal::Platform;
use crate::sched::config::NCPU;

const NO_PROC: usize = usize::MAX;

/// Estado de uma CPU
pub struct Cpu {
    /// Slot em execução (NO_PROC = scheduler)
    proc: AtomicUsize,
    /// Profundidade de push_off
    noff: AtomicUsize,
    /// Interrupções estavam ligadas antes do primeiro push_off?
    intena: AtomicBool,
}

impl Cpu {
    #[allow(clippy::declare_interior_mutable_const)]
    pub const NEW: Cpu = Cpu {
        proc: AtomicUsize::new(NO_PROC),
        noff: AtomicUsize::new(0),
        intena: AtomicBool::new(false),
    };

    pub fn current(&self) -> Option<usize> {
        match self.proc.load(Ordering::Acquire) {
            NO_PROC => None,
            slot => Some(slot),
        }
    }

    pub(crate) fn set_current(&self, slot: Option<usize>) {
        self.proc.store(slot.unwrap_or(NO_PROC), Ordering::Release);
    }

    pub fn depth(&self) -> usize {
        self.noff.load(Ordering::Relaxed)
    }

    pub(crate) fn intena(&self) -> bool {
        self.intena.load(Ordering::Relaxed)
    }

    pub(crate) fn set_intena(&self, on: bool) {
        self.intena.store(on, Ordering::Relaxed);
    }
}

impl<H: Platform> Kernel<H> {
    /// CPU atual. Interrupções precisam estar desligadas, senão a thread
    /// pode migrar entre a leitura do id e o uso.
    pub(crate) fn mycpu(&self) -> &Cpu {
        if self.hal.interrupts_enabled() {
            panic!("(Sched) mycpu chamado com interrupções habilitadas");
        }
        let id = self.hal.cpu_id();
        if id >= NCPU {
            panic!("(Sched) id de CPU fora da faixa");
        }
        &self.cpus[id]
    }

    /// Desliga interrupções, aninhável. Pares com `pop_off`.
    pub(crate) fn push_off(&self) {
        let old = self.hal.interrupts_enabled();
        self.hal.disable_interrupts();
        let cpu = self.mycpu();
        if cpu.noff.load(Ordering::Relaxed) == 0 {
            cpu.set_intena(old);
        }
        cpu.noff.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn pop_off(&self) {
        if self.hal.interrupts_enabled() {
            panic!("(Sched) pop_off com interrupções habilitadas");
        }
        let cpu = self.mycpu();
        let depth = cpu.noff.load(Ordering::Relaxed);
        if depth == 0 {
            panic!("(Sched) pop_off sem push_off");
        }
        cpu.noff.store(depth - 1, Ordering::Relaxed);
        if depth == 1 && cpu.intena() {
            self.hal.enable_interrupts();
        }
    }

    /// Slot em execução nesta CPU
    pub(crate) fn current_slot(&self) -> Option<usize> {
        self.push_off();
        let slot = self.mycpu().current();
        self.pop_off();
        slot
    }
}
