//! Tabela de processos
//!
//! Array fixo de descritores. Só é acessada através do lock da tabela
//! (`Kernel::acquire`); as filas MLFQ guardam índices de slot, nunca
//! referências.

use super::entity::Proc;
use super::flags::ProcFlags;
use super::state::ProcState;
use crate::sched::config::NPROC;
use crate::sched::sync::Channel;
use crate::sys::types::Pid;

pub struct ProcTable {
    pub procs: [Proc; NPROC],
    /// Próximo PID (monotônico, nunca reutilizado)
    next_pid: u32,
    /// Slot do processo raiz (alvo de re-parenting)
    pub(crate) init: Option<usize>,
}

impl ProcTable {
    pub const fn new() -> Self {
        Self {
            procs: [Proc::UNUSED; NPROC],
            next_pid: 1,
            init: None,
        }
    }

    pub fn find_unused(&self) -> Option<usize> {
        self.procs.iter().position(|p| p.state == ProcState::Unused)
    }

    pub fn alloc_pid(&mut self) -> Pid {
        let pid = Pid::new(self.next_pid);
        self.next_pid += 1;
        pid
    }

    /// Slot de um descritor vivo (zumbis incluídos)
    pub fn slot_of(&self, pid: Pid) -> Option<usize> {
        if pid.is_none() {
            return None;
        }
        self.procs
            .iter()
            .position(|p| p.pid == pid && p.state.is_live())
    }

    /// Dono do scheduler lock, se houver
    pub fn pinned(&self) -> Option<usize> {
        self.procs
            .iter()
            .position(|p| p.is_pinned() && p.state.is_live() && !p.pid.is_none())
    }

    pub fn init_slot(&self) -> Option<usize> {
        self.init
    }

    /// PID do pai (para listagem)
    pub fn parent_pid(&self, slot: usize) -> Option<Pid> {
        self.procs[slot].parent.map(|parent| self.procs[parent].pid)
    }

    /// Acorda todos os Sleeping no canal. Retorna quantos acordaram.
    pub fn wakeup(&mut self, chan: Channel) -> usize {
        let mut woken = 0;
        for p in self.procs.iter_mut() {
            if p.state == ProcState::Sleeping && p.chan == Some(chan) {
                p.state = ProcState::Runnable;
                woken += 1;
            }
        }
        woken
    }

    /// Marca kill; um Sleeping vira Runnable para ver a flag logo
    pub fn kill(&mut self, slot: usize) {
        let p = &mut self.procs[slot];
        p.flags.insert(ProcFlags::KILLED);
        if p.state == ProcState::Sleeping {
            p.state = ProcState::Runnable;
        }
    }
}

impl Default for ProcTable {
    fn default() -> Self {
        Self::new()
    }
}
