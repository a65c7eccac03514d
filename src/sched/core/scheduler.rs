//! # Orquestrador de Agendamento (MLFQ)
//!
//! Loop por CPU que escolhe o próximo descritor, entrega a CPU a ele e
//! reclassifica o descritor quando a CPU volta.
//!
//! ## Ordem de decisão em cada iteração
//! 1. **Scheduler lock:** se há um dono do lock e ele está Runnable, só ele
//!    roda. Enquanto o dono estiver em outra CPU, esta CPU fica ociosa. Um
//!    dono dormindo não segura a máquina: cai no MLFQ normal.
//! 2. **L0:** primeiro Runnable; quantum esgotado desce para L1.
//! 3. **L1:** primeiro Runnable; quantum esgotado desce para L2.
//! 4. **L2:** menor prioridade, empate por chegada; quantum esgotado
//!    decrementa a prioridade e volta ao fim de L2.
//!
//! Cada despacho cobra um tick. Um boost concorrente que já tirou o
//! descritor de L1/L2 encerra a iteração sem reclassificar.
//!
//! ## Sincronização
//! O lock da tabela é solto durante a execução do descritor. O flag
//! `ON_CPU` segura o descritor nesta CPU até a contabilidade terminar.

use super::policy;
use super::Kernel;
use super::TableGuard;
use crate::hal::Platform;
use crate::sched::sync::Channel;
use crate::sched::task::{Level, ProcFlags, ProcState};
use crate::sys::types::{KernelStack, Pid};

/// O que aconteceu em uma iteração do scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Nada despachável
    Idle,
    /// Dono do scheduler lock rodou
    Pinned { pid: Pid },
    /// Terminou (Zombie) e saiu da fila
    Removed { pid: Pid, level: Level },
    /// Voltou ao fim da mesma fila
    Requeued { pid: Pid, level: Level },
    /// Quantum esgotado em L0/L1: desceu de nível
    Demoted { pid: Pid, from: Level, to: Level },
    /// Quantum esgotado em L2: prioridade decrementada
    Aged { pid: Pid, priority: u8 },
    /// Nível resetado durante a execução (boost ou unlock)
    Boosted { pid: Pid },
}

impl Dispatch {
    pub fn pid(&self) -> Option<Pid> {
        match *self {
            Dispatch::Idle => None,
            Dispatch::Pinned { pid }
            | Dispatch::Removed { pid, .. }
            | Dispatch::Requeued { pid, .. }
            | Dispatch::Demoted { pid, .. }
            | Dispatch::Aged { pid, .. }
            | Dispatch::Boosted { pid } => Some(pid),
        }
    }
}

impl<H: Platform> Kernel<H> {
    /// Loop do scheduler desta CPU. Nunca retorna.
    pub fn scheduler(&self) -> ! {
        crate::kinfo!("(Sched) Scheduler iniciado na CPU ", self.hal.cpu_id());
        loop {
            if self.run_once() == Dispatch::Idle {
                self.hal.wait_for_interrupt();
            }
        }
    }

    /// Uma iteração do scheduler.
    pub fn run_once(&self) -> Dispatch {
        // Interrupções ligadas entre iterações: todos podem estar esperando IO
        self.hal.enable_interrupts();

        let table = self.acquire();
        let cpu = self.hal.cpu_id();

        // CASO A: scheduler lock
        if let Some(slot) = table.pinned() {
            let p = &table.procs[slot];
            if policy::dispatchable(p) {
                let pid = p.pid;
                crate::ktrace!("(Sched) Despachando dono do lock: PID=", pid.as_u32());
                let mut table = self.switch_in(table, cpu, slot, false);
                self.settle(&mut table, slot);
                return Dispatch::Pinned { pid };
            }
            if p.is_on_cpu() || p.state == ProcState::Running {
                return Dispatch::Idle;
            }
        }

        // CASO B: MLFQ
        for level in Level::ALL {
            let pick = {
                let queue = self.queues[level.index()].lock();
                policy::select(level, &queue, &table)
            };
            if let Some(slot) = pick {
                crate::ktrace!("(Sched) Despachando PID=", table.procs[slot].pid.as_u32());
                return self.dispatch(table, cpu, level, slot);
            }
        }

        Dispatch::Idle
    }

    fn dispatch<'a>(
        &'a self,
        table: TableGuard<'a, H>,
        cpu: usize,
        level: Level,
        slot: usize,
    ) -> Dispatch {
        let mut table = self.switch_in(table, cpu, slot, true);
        self.settle(&mut table, slot);

        let p = &mut table.procs[slot];
        let pid = p.pid;

        if level != Level::L0 && p.sched.level != level {
            return Dispatch::Boosted { pid };
        }

        if p.state == ProcState::Zombie {
            self.dequeue(level, slot);
            return Dispatch::Removed { pid, level };
        }

        if !p.sched.quantum_expired() {
            self.requeue(level, slot);
            return Dispatch::Requeued { pid, level };
        }

        match level {
            Level::L0 | Level::L1 => {
                let to = p.sched.demote();
                self.migrate(level, to, slot);
                crate::kdebug!("(Sched) Quantum esgotado, desceu de nível: PID=", pid.as_u32());
                Dispatch::Demoted { pid, from: level, to }
            }
            Level::L2 => {
                p.sched.age();
                let priority = p.sched.priority;
                self.requeue(level, slot);
                Dispatch::Aged { pid, priority }
            }
        }
    }

    /// Entrega a CPU ao descritor e retoma quando ele devolver.
    fn switch_in<'a>(
        &'a self,
        mut table: TableGuard<'a, H>,
        cpu: usize,
        slot: usize,
        charge: bool,
    ) -> TableGuard<'a, H> {
        let p = &mut table.procs[slot];
        if p.state != ProcState::Runnable {
            panic!("(Sched) Retomando descritor que não está Runnable");
        }
        p.state = ProcState::Running;
        p.flags.insert(ProcFlags::ON_CPU);
        if charge {
            p.sched.charge();
        }
        let stack: *const KernelStack = match p.kstack.as_ref() {
            Some(stack) => stack,
            None => panic!("(Sched) Descritor sem stack de kernel"),
        };
        self.cpus[cpu].set_current(Some(slot));

        table.unlock_for_switch();
        // SAFETY: a stack pertence a um descritor Running/ON_CPU; ninguém a
        // libera antes de `settle` limpar ON_CPU. A tabela não se move.
        unsafe { self.hal.switch_to(cpu, &*stack) };
        let table = self.relock();

        self.cpus[cpu].set_current(None);
        table
    }

    /// Contabilidade comum a todo retorno de despacho
    fn settle(&self, table: &mut TableGuard<'_, H>, slot: usize) {
        let p = &mut table.procs[slot];
        p.flags.remove(ProcFlags::ON_CPU);
        let parent = p.parent;
        if p.state == ProcState::Zombie {
            // O pai pode ter pulado este filho enquanto ele ainda estava na CPU
            if let Some(parent) = parent {
                table.wakeup(Channel::Proc(parent));
            }
        }
    }

    /// Devolve a CPU ao scheduler. Chamado com o lock da tabela (e só ele)
    /// e com o estado do descritor atual já alterado.
    pub(crate) fn sched<'a>(&'a self, table: TableGuard<'a, H>, slot: usize) -> TableGuard<'a, H> {
        let cpu = self.mycpu();
        if cpu.depth() != 1 {
            panic!("(Sched) sched com locks aninhados");
        }
        if table.procs[slot].state == ProcState::Running {
            panic!("(Sched) sched com descritor Running");
        }
        if self.hal.interrupts_enabled() {
            panic!("(Sched) sched com interrupções habilitadas");
        }
        let intena = cpu.intena();
        let stack: *const KernelStack = match table.procs[slot].kstack.as_ref() {
            Some(stack) => stack,
            None => panic!("(Sched) Descritor sem stack de kernel"),
        };

        table.unlock_for_switch();
        // SAFETY: é a stack em execução; só é liberada depois do reap, que
        // espera ON_CPU sair.
        unsafe { self.hal.switch_to_scheduler(&*stack) };
        let table = self.relock();

        // Pode ter voltado em outra CPU
        self.mycpu().set_intena(intena);
        table
    }

    /// Cede a CPU mantendo o nível
    pub fn yield_now(&self) {
        let mut table = self.acquire();
        let slot = match self.mycpu().current() {
            Some(slot) => slot,
            None => {
                crate::kwarn!("(Sched) yield_now sem processo atual");
                return;
            }
        };
        table.procs[slot].state = ProcState::Runnable;
        let table = self.sched(table, slot);
        drop(table);
    }

    /// Primeira execução de um descritor novo: o scheduler soltou o lock
    /// da tabela antes da troca, resta só desfazer o push_off dele.
    pub fn fork_return(&self) {
        self.pop_off();
    }
}
