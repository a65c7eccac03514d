//! Sleep/wakeup
//!
//! Única suspensão voluntária legal. O descritor grava o canal e vira
//! Sleeping com o lock da tabela na mão; como todo `wakeup` também precisa
//! desse lock, nenhum wakeup entre "verifiquei a condição" e "dormi" se
//! perde.

use spin::{Mutex, MutexGuard};

use super::Channel;
use crate::hal::Platform;
use crate::sched::core::{Kernel, TableGuard};
use crate::sched::task::ProcState;
use crate::sys::error::{ProcError, SysResult};

impl<H: Platform> Kernel<H> {
    /// Dorme em `chan` soltando `guard` (de `lock`) atomicamente.
    /// Retorna com `lock` travado de novo.
    pub fn sleep<'a, T>(
        &'a self,
        chan: Channel,
        lock: &'a Mutex<T>,
        guard: MutexGuard<'a, T>,
    ) -> MutexGuard<'a, T> {
        let slot = match self.current_slot() {
            Some(slot) => slot,
            None => panic!("(Sched) sleep sem processo atual"),
        };

        // Pega a tabela antes de soltar o lock do chamador
        let table = self.acquire();
        drop(guard);

        let table = self.sleep_locked(chan, slot, table);
        drop(table);

        lock.lock()
    }

    /// Dorme já segurando a tabela; devolve a tabela travada.
    pub(crate) fn sleep_locked<'a>(
        &'a self,
        chan: Channel,
        slot: usize,
        mut table: TableGuard<'a, H>,
    ) -> TableGuard<'a, H> {
        let p = &mut table.procs[slot];
        p.chan = Some(chan);
        p.state = ProcState::Sleeping;

        let mut table = self.sched(table, slot);

        table.procs[slot].chan = None;
        table
    }

    /// Acorda todos os que dormem em `chan`
    pub fn wakeup(&self, chan: Channel) {
        let mut table = self.acquire();
        table.wakeup(chan);
    }

    /// Dorme por `n` ticks do timer. Interrompido por kill.
    pub fn sleep_ticks(&self, n: u64) -> SysResult<()> {
        let slot = self.current_slot().ok_or(ProcError::NoCurrent)?;
        let mut table = self.acquire();
        let start = self.ticks();
        while self.ticks().wrapping_sub(start) < n {
            if table.procs[slot].is_killed() {
                return Err(ProcError::Interrupted);
            }
            table = self.sleep_locked(Channel::Ticks, slot, table);
        }
        Ok(())
    }
}
