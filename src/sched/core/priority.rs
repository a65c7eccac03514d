//! Controles de prioridade: getLevel, setPriority, priority boost e o
//! scheduler lock.

use core::sync::atomic::Ordering;

use super::Kernel;
use crate::hal::Platform;
use crate::sched::config::{BOOST_INTERVAL, PRIORITY_MAX, PRIORITY_MIN, SCHED_LOCK_PASSWORD};
use crate::sched::sync::Channel;
use crate::sched::task::{Level, ProcFlags};
use crate::sys::error::{ProcError, SysResult};
use crate::sys::types::Pid;

impl<H: Platform> Kernel<H> {
    /// Nível MLFQ do processo atual
    pub fn level(&self) -> SysResult<Level> {
        let slot = self.current_slot().ok_or(ProcError::NoCurrent)?;
        let table = self.acquire();
        Ok(table.procs[slot].sched.level)
    }

    /// Define a prioridade de um filho direto. Valores fora de 0..=3, PID
    /// desconhecido ou chamador que não é o pai: nada acontece.
    pub fn set_priority(&self, pid: Pid, priority: i32) {
        if priority < PRIORITY_MIN as i32 || priority > PRIORITY_MAX as i32 {
            crate::kdebug!("(Sched) setPriority: prioridade fora da faixa ignorada");
            return;
        }
        let caller = match self.current_slot() {
            Some(slot) => slot,
            None => return,
        };

        let mut table = self.acquire();
        let slot = match table.slot_of(pid) {
            Some(slot) => slot,
            None => return,
        };
        let p = &mut table.procs[slot];
        if p.parent == Some(caller) {
            p.sched.priority = priority as u8;
        }
    }

    /// Priority boost: todos voltam para L0 com prioridade e ticks
    /// resetados. L0 mantém a ordem; L1 e depois L2 entram no fim.
    pub fn boost(&self) {
        let mut table = self.acquire();

        {
            let queue = self.queues[Level::L0.index()].lock();
            for slot in queue.iter() {
                table.procs[slot].sched.reset();
            }
        }

        let mut moved = 0usize;
        for level in [Level::L1, Level::L2] {
            loop {
                let head = self.queues[level.index()].lock().head();
                let slot = match head {
                    Some(slot) => slot,
                    None => break,
                };
                self.migrate(level, Level::L0, slot);
                table.procs[slot].sched.reset();
                moved += 1;
            }
        }

        crate::kdebug!("(Sched) Priority boost: realocados=", moved);
    }

    /// Tick do timer: acorda quem dorme em ticks e faz boost a cada
    /// `BOOST_INTERVAL`.
    pub fn timer_tick(&self) {
        let now = self.ticks.fetch_add(1, Ordering::AcqRel) + 1;
        self.wakeup(Channel::Ticks);
        if now % BOOST_INTERVAL == 0 {
            self.boost();
        }
    }

    // =========================================================================
    // SCHEDULER LOCK
    // =========================================================================

    /// Senha inválida mata o chamador
    fn check_password(&self, slot: usize, password: i32) -> bool {
        if password == SCHED_LOCK_PASSWORD {
            return true;
        }
        let mut table = self.acquire();
        crate::kerror!("(Sched) Senha do scheduler lock inválida: PID=", table.procs[slot].pid.as_u32());
        table.kill(slot);
        false
    }

    /// Despacho exclusivo para o chamador até `scheduler_unlock`.
    ///
    /// Zera o contador global de ticks. Se outro processo já segura o
    /// lock, o chamador termina.
    pub fn scheduler_lock(&self, password: i32) {
        let slot = match self.current_slot() {
            Some(slot) => slot,
            None => return,
        };
        if !self.check_password(slot, password) {
            return;
        }

        self.ticks.store(0, Ordering::Release);

        let mut table = self.acquire();
        let owner = table.pinned();
        match owner {
            Some(owner) if owner != slot => {
                crate::kerror!("(Sched) scheduler lock já tem dono, terminando PID=", table.procs[slot].pid.as_u32());
                drop(table);
                self.exit();
            }
            Some(_) => {}
            None => {
                table.procs[slot].flags.insert(ProcFlags::SCHED_LOCKED);
                crate::kinfo!("(Sched) scheduler lock: PID=", table.procs[slot].pid.as_u32());
            }
        }
        drop(table);

        self.yield_now();
    }

    /// Devolve o chamador ao MLFQ: L0, prioridade 3, ticks zerados.
    pub fn scheduler_unlock(&self, password: i32) {
        let slot = match self.current_slot() {
            Some(slot) => slot,
            None => return,
        };
        if !self.check_password(slot, password) {
            return;
        }

        let mut table = self.acquire();
        let p = &mut table.procs[slot];
        p.flags.remove(ProcFlags::SCHED_LOCKED);
        let level = p.sched.level;
        p.sched.reset();
        if level != Level::L0 {
            self.migrate(level, Level::L0, slot);
        }
        crate::kinfo!("(Sched) scheduler unlock: PID=", table.procs[slot].pid.as_u32());
    }
}
