//! Flags do descritor de processo

use bitflags::bitflags;

bitflags! {
    /// Estado booleano do descritor, protegido pelo lock da tabela
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcFlags: u8 {
        /// kill() pendente; verificado no retorno de syscall
        const KILLED = 1 << 0;
        /// Dono do scheduler lock (despacho exclusivo)
        const SCHED_LOCKED = 1 << 1;
        /// Entregue a uma CPU cujo scheduler ainda não terminou a contabilidade
        const ON_CPU = 1 << 2;
    }
}
