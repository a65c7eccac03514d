//! Política de seleção MLFQ
//!
//! L0 e L1: primeiro descritor despachável na ordem da fila.
//! L2: menor valor de prioridade; empate fica com quem chegou primeiro.
//!
//! Despachável = Runnable, PID vivo e não está sendo finalizado por outra
//! CPU (ON_CPU).

use super::runqueue::RunQueue;
use crate::sched::task::{Level, Proc, ProcState, ProcTable};

pub fn dispatchable(p: &Proc) -> bool {
    p.state == ProcState::Runnable && !p.pid.is_none() && !p.is_on_cpu()
}

/// Primeiro despachável da fila
pub fn first_runnable(queue: &RunQueue, table: &ProcTable) -> Option<usize> {
    queue.iter().find(|&slot| dispatchable(&table.procs[slot]))
}

/// Despachável de menor prioridade (FIFO no empate)
pub fn lowest_priority(queue: &RunQueue, table: &ProcTable) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for slot in queue.iter() {
        let p = &table.procs[slot];
        if !dispatchable(p) {
            continue;
        }
        match best {
            Some((_, priority)) if p.sched.priority >= priority => {}
            _ => best = Some((slot, p.sched.priority)),
        }
    }
    best.map(|(slot, _)| slot)
}

/// Escolha para um nível
pub fn select(level: Level, queue: &RunQueue, table: &ProcTable) -> Option<usize> {
    match level {
        Level::L0 | Level::L1 => first_runnable(queue, table),
        Level::L2 => lowest_priority(queue, table),
    }
}
