//! # Syscall Arguments
//!
//! Registradores da syscall já extraídos do frame de trap pela camada de
//! arquitetura.

/// Máximo de argumentos suportados
pub const MAX_ARGS: usize = 6;

/// Argumentos de syscall
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyscallArgs {
    pub num: usize,
    pub arg1: usize,
    pub arg2: usize,
    pub arg3: usize,
    pub arg4: usize,
    pub arg5: usize,
    pub arg6: usize,
}

impl SyscallArgs {
    /// Argumentos vazios (para testes)
    pub const fn empty() -> Self {
        Self {
            num: 0,
            arg1: 0,
            arg2: 0,
            arg3: 0,
            arg4: 0,
            arg5: 0,
            arg6: 0,
        }
    }

    /// Syscall com até dois argumentos inteiros
    pub const fn new(num: usize, arg1: usize, arg2: usize) -> Self {
        Self {
            num,
            arg1,
            arg2,
            ..Self::empty()
        }
    }

    /// Argumento como `int` de usuário (registrador truncado)
    pub const fn int(&self, index: usize) -> i32 {
        let raw = match index {
            1 => self.arg1,
            2 => self.arg2,
            3 => self.arg3,
            4 => self.arg4,
            5 => self.arg5,
            6 => self.arg6,
            _ => 0,
        };
        raw as i32
    }
}
