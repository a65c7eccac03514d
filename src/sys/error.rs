//! # Process Errors
//!
//! Erros recuperáveis do núcleo de processos. Violações de invariante
//! (locks, estado do descritor, interrupções) não passam por aqui: são
//! `panic!`.
//!
//! Na fronteira de syscall todo erro vira `-1` (ver `syscall::dispatch`);
//! `as_isize` existe para logs e para chamadores internos que preferem o
//! código.

use core::fmt;

/// Erros do núcleo de processos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ProcError {
    /// Tabela de processos cheia
    NoFreeSlot = 1,
    /// Stack, espaço de endereçamento ou limite de memória
    OutOfMemory = 2,
    /// Nenhum descritor vivo com esse PID
    NotFound = 3,
    /// wait() sem filhos
    NoChildren = 4,
    /// wait()/sleep interrompido por kill
    Interrupted = 5,
    /// Chamada sem processo atual na CPU
    NoCurrent = 6,
    /// Argumento fora da faixa
    InvalidArgument = 7,
}

impl ProcError {
    /// Valor negativo para o registrador de retorno
    pub const fn as_isize(self) -> isize {
        -(self as i32 as isize)
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::NoFreeSlot),
            2 => Some(Self::OutOfMemory),
            3 => Some(Self::NotFound),
            4 => Some(Self::NoChildren),
            5 => Some(Self::Interrupted),
            6 => Some(Self::NoCurrent),
            7 => Some(Self::InvalidArgument),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoFreeSlot => "no free process slot",
            Self::OutOfMemory => "out of memory",
            Self::NotFound => "no such process",
            Self::NoChildren => "no children",
            Self::Interrupted => "interrupted",
            Self::NoCurrent => "no current process",
            Self::InvalidArgument => "invalid argument",
        }
    }
}

impl fmt::Display for ProcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resultado das operações de processo
pub type SysResult<T> = Result<T, ProcError>;
