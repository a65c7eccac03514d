//! # Syscall Table
//!
//! Tabela de handlers indexada por número de syscall.

use super::super::abi::SyscallArgs;
use super::super::numbers::*;
use super::super::process;
use crate::hal::Platform;
use crate::sched::Kernel;
use crate::sys::error::SysResult;

/// Tipo de handler de syscall
pub type SyscallHandler<H> = fn(&Kernel<H>, &SyscallArgs) -> SysResult<usize>;

/// Tamanho da tabela
pub const TABLE_SIZE: usize = 32;

/// Tabela de syscalls para a plataforma `H`.
/// None = syscall não implementada.
pub const fn syscall_table<H: Platform>() -> [Option<SyscallHandler<H>>; TABLE_SIZE] {
    let mut table: [Option<SyscallHandler<H>>; TABLE_SIZE] = [None; TABLE_SIZE];

    // === PROCESSO ===
    table[SYS_FORK] = Some(process::sys_fork_wrapper::<H>);
    table[SYS_EXIT] = Some(process::sys_exit_wrapper::<H>);
    table[SYS_WAIT] = Some(process::sys_wait_wrapper::<H>);
    table[SYS_KILL] = Some(process::sys_kill_wrapper::<H>);
    table[SYS_GETPID] = Some(process::sys_getpid_wrapper::<H>);

    // === MEMÓRIA E TEMPO ===
    table[SYS_SBRK] = Some(process::sys_sbrk_wrapper::<H>);
    table[SYS_SLEEP] = Some(process::sys_sleep_wrapper::<H>);
    table[SYS_SETMEMORYLIMIT] = Some(process::sys_setmemorylimit_wrapper::<H>);

    // === ESCALONAMENTO ===
    table[SYS_YIELD] = Some(process::sys_yield_wrapper::<H>);
    table[SYS_GETLEVEL] = Some(process::sys_getlevel_wrapper::<H>);
    table[SYS_SETPRIORITY] = Some(process::sys_setpriority_wrapper::<H>);
    table[SYS_SCHEDULER_LOCK] = Some(process::sys_scheduler_lock_wrapper::<H>);
    table[SYS_SCHEDULER_UNLOCK] = Some(process::sys_scheduler_unlock_wrapper::<H>);

    table
}
