//! # Process Lifecycle
//!
//! fork, exit, wait, kill, getpid, yield, sleep

use crate::hal::Platform;
use crate::sched::Kernel;
use crate::sys::error::{ProcError, SysResult};
use crate::sys::types::Pid;
use crate::syscall::abi::SyscallArgs;

/// PID vindo de um `int` de usuário
pub(crate) fn pid_arg(raw: i32) -> Option<Pid> {
    if raw > 0 {
        Some(Pid::new(raw as u32))
    } else {
        None
    }
}

// === WRAPPERS ===

pub fn sys_fork_wrapper<H: Platform>(k: &Kernel<H>, _args: &SyscallArgs) -> SysResult<usize> {
    k.fork().map(|pid| pid.as_u32() as usize)
}

pub fn sys_exit_wrapper<H: Platform>(k: &Kernel<H>, _args: &SyscallArgs) -> SysResult<usize> {
    k.exit()
}

pub fn sys_wait_wrapper<H: Platform>(k: &Kernel<H>, _args: &SyscallArgs) -> SysResult<usize> {
    k.wait().map(|pid| pid.as_u32() as usize)
}

pub fn sys_kill_wrapper<H: Platform>(k: &Kernel<H>, args: &SyscallArgs) -> SysResult<usize> {
    let pid = pid_arg(args.int(1)).ok_or(ProcError::NotFound)?;
    k.kill(pid).map(|_| 0)
}

pub fn sys_getpid_wrapper<H: Platform>(k: &Kernel<H>, _args: &SyscallArgs) -> SysResult<usize> {
    k.current_pid()
        .map(|pid| pid.as_u32() as usize)
        .ok_or(ProcError::NoCurrent)
}

pub fn sys_yield_wrapper<H: Platform>(k: &Kernel<H>, _args: &SyscallArgs) -> SysResult<usize> {
    k.yield_now();
    Ok(0)
}

pub fn sys_sleep_wrapper<H: Platform>(k: &Kernel<H>, args: &SyscallArgs) -> SysResult<usize> {
    let n = args.int(1);
    if n < 0 {
        return Err(ProcError::InvalidArgument);
    }
    k.sleep_ticks(n as u64).map(|_| 0)
}
