//! Memória de usuário por processo: sbrk e limite (setmemorylimit)

use crate::hal::Platform;
use crate::sched::core::Kernel;
use crate::sys::error::{ProcError, SysResult};
use crate::sys::types::Pid;

impl<H: Platform> Kernel<H> {
    /// Cresce (n > 0) ou encolhe (n < 0) a memória do processo atual.
    /// Retorna o tamanho anterior, como o sbrk.
    pub fn grow_memory(&self, n: isize) -> SysResult<usize> {
        let slot = self.current_slot().ok_or(ProcError::NoCurrent)?;
        let mut table = self.acquire();
        let p = &mut table.procs[slot];
        let old = p.size;
        let space = p.space.as_ref().ok_or(ProcError::OutOfMemory)?;

        let new = if n > 0 {
            let target = old
                .checked_add(n.unsigned_abs())
                .ok_or(ProcError::InvalidArgument)?;
            if p.mem_limit != 0 && target > p.mem_limit {
                crate::kwarn!("(Proc) sbrk acima do limite de memória: PID=", p.pid.as_u32());
                return Err(ProcError::OutOfMemory);
            }
            self.hal
                .grow_space(space, old, target)
                .ok_or(ProcError::OutOfMemory)?
        } else if n < 0 {
            let target = old
                .checked_sub(n.unsigned_abs())
                .ok_or(ProcError::InvalidArgument)?;
            self.hal
                .shrink_space(space, old, target)
                .ok_or(ProcError::OutOfMemory)?
        } else {
            old
        };

        p.size = new;
        Ok(old)
    }

    /// Define o teto de memória de um processo (0 = sem limite).
    pub fn set_memory_limit(&self, pid: Pid, limit: usize) -> SysResult<()> {
        let mut table = self.acquire();
        let slot = table.slot_of(pid).ok_or(ProcError::NotFound)?;
        let p = &mut table.procs[slot];
        if limit != 0 && limit < p.size {
            return Err(ProcError::InvalidArgument);
        }
        p.mem_limit = limit;
        crate::kdebug!("(Proc) Limite de memória definido: PID=", pid.as_u32());
        Ok(())
    }
}
