//! Estados de processo

/// Estado de um descritor de processo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    /// Slot livre
    Unused,
    /// Alocado, ainda sendo montado (fork/user_init)
    Embryo,
    /// Bloqueado em um canal
    Sleeping,
    /// Pronto para executar
    Runnable,
    /// Executando em alguma CPU
    Running,
    /// Terminado, esperando o pai (reap)
    Zombie,
}

impl ProcState {
    /// Verifica se pode ser escalonado
    pub const fn is_runnable(self) -> bool {
        matches!(self, Self::Runnable)
    }

    /// Slot ocupado (inclui zumbis ainda não coletados)
    pub const fn is_live(self) -> bool {
        !matches!(self, Self::Unused)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unused => "unused",
            Self::Embryo => "embryo",
            Self::Sleeping => "sleep ",
            Self::Runnable => "runble",
            Self::Running => "run   ",
            Self::Zombie => "zombie",
        }
    }
}
