//! Ferramentas de Debug e listagem de processos

use super::Kernel;
use crate::hal::Platform;
use crate::sched::config::PROC_NAME_LEN;
use crate::sched::task::entity::name_str;
use crate::sched::task::{Level, ProcState, ProcTable};
use crate::sys::types::Pid;

/// Retrato de um descritor (comando `list` do gerenciador de processos)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcInfo {
    pub pid: Pid,
    pub name: [u8; PROC_NAME_LEN],
    pub state: ProcState,
    pub level: Level,
    pub ticks: u32,
    pub priority: u8,
    pub parent: Option<Pid>,
    pub size: usize,
    pub mem_limit: usize,
    pub stack_pages: usize,
    pub killed: bool,
    pub pinned: bool,
}

impl ProcInfo {
    fn capture(table: &ProcTable, slot: usize) -> Self {
        let p = &table.procs[slot];
        Self {
            pid: p.pid,
            name: p.name,
            state: p.state,
            level: p.sched.level,
            ticks: p.sched.ticks,
            priority: p.sched.priority,
            parent: table.parent_pid(slot),
            size: p.size,
            mem_limit: p.mem_limit,
            stack_pages: p.stack_pages,
            killed: p.is_killed(),
            pinned: p.is_pinned(),
        }
    }

    pub fn name(&self) -> &str {
        name_str(&self.name)
    }
}

impl<H: Platform> Kernel<H> {
    /// Visita todos os slots ocupados, em ordem de slot
    pub fn for_each_process<F: FnMut(&ProcInfo)>(&self, mut f: F) {
        let table = self.acquire();
        for slot in 0..table.procs.len() {
            if table.procs[slot].state.is_live() {
                f(&ProcInfo::capture(&table, slot));
            }
        }
    }

    pub fn process_info(&self, pid: Pid) -> Option<ProcInfo> {
        let table = self.acquire();
        let slot = table.slot_of(pid)?;
        Some(ProcInfo::capture(&table, slot))
    }

    /// Imprime a tabela no log. Não espera pelo lock: serve para depurar
    /// uma máquina travada.
    pub fn dump(&self) {
        crate::ktrace!("--- [TRACE] TABELA DE PROCESSOS ---");

        let table = match self.table.try_lock() {
            Some(table) => table,
            None => {
                crate::ktrace!("  - TABELA: [Locked]");
                return;
            }
        };

        for p in table.procs.iter().filter(|p| p.state.is_live()) {
            crate::ktrace!("  - PID:", p.pid.as_u32());
            crate::ktrace!(p.state.as_str());
            crate::ktrace!(p.name_str());
            crate::ktrace!("    Level:", p.sched.level.index());
            crate::ktrace!("    Priority:", p.sched.priority);
        }

        for level in Level::ALL {
            match self.queues[level.index()].try_lock() {
                Some(queue) => {
                    crate::ktrace!("  - Fila L", level.index());
                    crate::ktrace!("    Tamanho:", queue.len());
                }
                None => crate::ktrace!("  - Fila: [Locked]"),
            }
        }

        crate::ktrace!("--- [TRACE] FIM DO DUMP ---");
    }
}
