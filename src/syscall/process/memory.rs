//! # Memory Syscalls
//!
//! sbrk e setmemorylimit

use super::lifecycle::pid_arg;
use crate::hal::Platform;
use crate::sched::Kernel;
use crate::sys::error::{ProcError, SysResult};
use crate::syscall::abi::SyscallArgs;

/// Retorna o break anterior
pub fn sys_sbrk_wrapper<H: Platform>(k: &Kernel<H>, args: &SyscallArgs) -> SysResult<usize> {
    k.grow_memory(args.int(1) as isize)
}

pub fn sys_setmemorylimit_wrapper<H: Platform>(k: &Kernel<H>, args: &SyscallArgs) -> SysResult<usize> {
    let pid = pid_arg(args.int(1)).ok_or(ProcError::NotFound)?;
    let limit = args.int(2);
    if limit < 0 {
        return Err(ProcError::InvalidArgument);
    }
    k.set_memory_limit(pid, limit as usize).map(|_| 0)
}
