//! # Syscall Numbers Registry
//!
//! Numeração estável das syscalls do núcleo de processos. As sete primeiras
//! seguem a tabela clássica do xv6, para que os binários de usuário antigos
//! continuem funcionando; as de escalonamento vêm depois do bloco de FS.
//!
//! | Número | Syscall          |
//! |--------|------------------|
//! | 1-13   | Processo/Memória |
//! | 22-27  | Escalonamento    |

// ============================================================================
// PROCESSO
// ============================================================================

pub const SYS_FORK: usize = 1;
pub const SYS_EXIT: usize = 2;
pub const SYS_WAIT: usize = 3;
pub const SYS_KILL: usize = 6;
pub const SYS_GETPID: usize = 11;

// ============================================================================
// MEMÓRIA E TEMPO
// ============================================================================

pub const SYS_SBRK: usize = 12;
pub const SYS_SLEEP: usize = 13;

// ============================================================================
// ESCALONAMENTO
// ============================================================================

pub const SYS_YIELD: usize = 22;
pub const SYS_GETLEVEL: usize = 23;
pub const SYS_SETPRIORITY: usize = 24;
pub const SYS_SCHEDULER_LOCK: usize = 25;
pub const SYS_SCHEDULER_UNLOCK: usize = 26;
pub const SYS_SETMEMORYLIMIT: usize = 27;
