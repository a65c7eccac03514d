//! Fila de execução de um nível MLFQ
//!
//! Lista duplamente encadeada intrusiva sobre índices de slot: inserção no
//! fim e remoção de qualquer posição em O(1), sem referências para a
//! tabela. Cada slot está em no máximo uma fila por vez.

use crate::sched::config::NPROC;

#[derive(Debug, Clone, Copy)]
struct Link {
    prev: Option<usize>,
    next: Option<usize>,
    linked: bool,
}

impl Link {
    const EMPTY: Link = Link {
        prev: None,
        next: None,
        linked: false,
    };
}

/// Fila FIFO de slots. O quantum do nível vem de `Level::quantum`.
pub struct RunQueue {
    head: Option<usize>,
    tail: Option<usize>,
    links: [Link; NPROC],
    len: usize,
}

impl RunQueue {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            links: [Link::EMPTY; NPROC],
            len: 0,
        }
    }

    /// Adiciona slot no fim da fila
    pub fn push_back(&mut self, slot: usize) {
        if self.links[slot].linked {
            self.remove(slot);
        }
        self.links[slot] = Link {
            prev: self.tail,
            next: None,
            linked: true,
        };
        match self.tail {
            Some(tail) => self.links[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Remove slot de qualquer posição. Retorna false se não estava na fila.
    pub fn remove(&mut self, slot: usize) -> bool {
        let link = self.links[slot];
        if !link.linked {
            return false;
        }
        match link.prev {
            Some(prev) => self.links[prev].next = link.next,
            None => self.head = link.next,
        }
        match link.next {
            Some(next) => self.links[next].prev = link.prev,
            None => self.tail = link.prev,
        }
        self.links[slot] = Link::EMPTY;
        self.len -= 1;
        true
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.links[slot].linked
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Número de slots na fila
    pub fn len(&self) -> usize {
        self.len
    }

    /// Verifica se está vazia
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Da cabeça à cauda (ordem de chegada)
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            cursor: self.head,
        }
    }
}

impl Default for RunQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a> {
    queue: &'a RunQueue,
    cursor: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let slot = self.cursor?;
        self.cursor = self.queue.links[slot].next;
        Some(slot)
    }
}
