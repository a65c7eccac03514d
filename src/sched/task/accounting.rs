//! Contabilidade MLFQ (Accounting)
//!
//! Nível da fila, ticks consumidos no nível atual e prioridade (usada só
//! em L2). As regras de mudança de nível vivem aqui; a movimentação entre
//! filas fica com o scheduler, que segura o lock da tabela.

use crate::sched::config::{
    L0_QUANTUM, L1_QUANTUM, L2_QUANTUM, PRIORITY_DEFAULT, PRIORITY_MAX, PRIORITY_MIN,
};

/// Nível MLFQ
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    L0 = 0,
    L1 = 1,
    L2 = 2,
}

impl Level {
    /// Ordem de varredura do scheduler
    pub const ALL: [Level; 3] = [Level::L0, Level::L1, Level::L2];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Level> {
        match index {
            0 => Some(Level::L0),
            1 => Some(Level::L1),
            2 => Some(Level::L2),
            _ => None,
        }
    }

    /// Quantum (ticks) do nível
    pub const fn quantum(self) -> u32 {
        match self {
            Level::L0 => L0_QUANTUM,
            Level::L1 => L1_QUANTUM,
            Level::L2 => L2_QUANTUM,
        }
    }

    /// Destino ao esgotar o quantum (L2 não desce)
    pub const fn next(self) -> Level {
        match self {
            Level::L0 => Level::L1,
            Level::L1 | Level::L2 => Level::L2,
        }
    }
}

/// Contabilidade de um descritor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accounting {
    /// Fila atual
    pub level: Level,
    /// Ticks consumidos no nível atual
    pub ticks: u32,
    /// Prioridade (0 = mais urgente), relevante só em L2
    pub priority: u8,
}

impl Accounting {
    pub const fn new() -> Self {
        Self {
            level: Level::L0,
            ticks: 0,
            priority: PRIORITY_DEFAULT,
        }
    }

    /// Um despacho consome um tick
    pub fn charge(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    pub fn quantum_expired(&self) -> bool {
        self.ticks >= self.level.quantum()
    }

    /// Volta ao estado inicial (boost, unlock)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Esgotou o quantum em L0/L1: desce um nível, ticks zerados
    pub fn demote(&mut self) -> Level {
        self.ticks = 0;
        self.level = self.level.next();
        self.level
    }

    /// Esgotou o quantum em L2: prioridade cai uma unidade.
    /// Valores fora de 1..=3 ficam como estão (0 é piso).
    pub fn age(&mut self) {
        self.ticks = 0;
        if self.priority > PRIORITY_MIN && self.priority <= PRIORITY_MAX {
            self.priority -= 1;
        }
    }
}

impl Default for Accounting {
    fn default() -> Self {
        Self::new()
    }
}
