//! # Scheduling Syscalls
//!
//! getLevel, setPriority, schedulerLock, schedulerUnlock

use super::lifecycle::pid_arg;
use crate::hal::Platform;
use crate::sched::Kernel;
use crate::sys::error::SysResult;
use crate::syscall::abi::SyscallArgs;

pub fn sys_getlevel_wrapper<H: Platform>(k: &Kernel<H>, _args: &SyscallArgs) -> SysResult<usize> {
    k.level().map(|level| level.index())
}

/// Sempre retorna 0; pedidos inválidos são ignorados em silêncio
pub fn sys_setpriority_wrapper<H: Platform>(k: &Kernel<H>, args: &SyscallArgs) -> SysResult<usize> {
    if let Some(pid) = pid_arg(args.int(1)) {
        k.set_priority(pid, args.int(2));
    }
    Ok(0)
}

pub fn sys_scheduler_lock_wrapper<H: Platform>(k: &Kernel<H>, args: &SyscallArgs) -> SysResult<usize> {
    k.scheduler_lock(args.int(1));
    Ok(0)
}

pub fn sys_scheduler_unlock_wrapper<H: Platform>(k: &Kernel<H>, args: &SyscallArgs) -> SysResult<usize> {
    k.scheduler_unlock(args.int(1));
    Ok(0)
}
