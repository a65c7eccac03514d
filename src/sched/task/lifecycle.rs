//! Ciclo de vida de processos
//!
//! allocate -> (user_init | fork) -> Runnable -> ... -> exit (Zombie) ->
//! wait do pai (reap) -> Unused.
//!
//! Stacks, espaços de endereçamento e arquivos são da plataforma; aqui só
//! se decide quando criar, duplicar e devolver cada um.

use super::accounting::{Accounting, Level};
use super::entity::Proc;
use super::flags::ProcFlags;
use super::state::ProcState;
use super::table::ProcTable;
use crate::hal::Platform;
use crate::sched::config::{NOFILE, NPROC};
use crate::sched::core::Kernel;
use crate::sched::sync::Channel;
use crate::sys::error::{ProcError, SysResult};
use crate::sys::types::{FileRef, Pid};

impl<H: Platform> Kernel<H> {
    // =========================================================================
    // CRIAÇÃO
    // =========================================================================

    /// Reserva um slot Embryo em L0 com stack de kernel pronta.
    ///
    /// A primeira retomada da stack cai no stub de entrada (`fork_return`).
    fn allocate(&self) -> SysResult<usize> {
        let mut table = self.acquire();
        let slot = match table.find_unused() {
            Some(slot) => slot,
            None => {
                crate::kwarn!("(Proc) Tabela de processos cheia");
                return Err(ProcError::NoFreeSlot);
            }
        };
        let pid = table.alloc_pid();
        let p = &mut table.procs[slot];
        p.pid = pid;
        p.state = ProcState::Embryo;
        p.flags = ProcFlags::empty();
        p.sched = Accounting::new();
        self.enqueue(Level::L0, slot);
        drop(table);

        let stack = match self.hal.alloc_stack() {
            Some(stack) => stack,
            None => {
                crate::kwarn!("(Proc) Sem memória para stack de kernel: PID=", pid.as_u32());
                let mut table = self.acquire();
                self.reclaim(&mut table, slot);
                return Err(ProcError::OutOfMemory);
            }
        };
        self.hal.prepare_context(&stack);

        let mut table = self.acquire();
        let p = &mut table.procs[slot];
        p.kstack = Some(stack);
        p.stack_pages = 1;
        Ok(slot)
    }

    /// Cria o processo raiz (initcode). Alvo de re-parenting de órfãos.
    pub fn user_init(&self) -> SysResult<Pid> {
        let slot = self.allocate()?;

        let space = match self.hal.setup_space() {
            Some(space) => space,
            None => {
                let mut table = self.acquire();
                self.reclaim(&mut table, slot);
                return Err(ProcError::OutOfMemory);
            }
        };
        let size = self.hal.load_init(&space);
        let cwd = self.hal.resolve_root();

        let mut table = self.acquire();
        if let Some(stack) = table.procs[slot].kstack.as_ref() {
            self.hal.init_frame(stack);
        }
        let p = &mut table.procs[slot];
        p.space = Some(space);
        p.size = size;
        p.cwd = cwd;
        p.set_name("initcode");
        p.state = ProcState::Runnable;
        let pid = p.pid;
        table.init = Some(slot);

        crate::kinfo!("(Proc) Processo init criado: PID=", pid.as_u32());
        Ok(pid)
    }

    /// Duplica o processo atual. O filho volta do mesmo ponto com retorno 0.
    ///
    /// Memória, arquivos e cwd do pai saem da tabela enquanto são copiados:
    /// a cópia roda sem o lock global e só o próprio pai mexe nesses campos.
    pub fn fork(&self) -> SysResult<Pid> {
        let parent = self.current_slot().ok_or(ProcError::NoCurrent)?;
        let child = self.allocate()?;

        let (space, size, files, cwd) = {
            let mut table = self.acquire();
            let p = &mut table.procs[parent];
            let files: [Option<FileRef>; NOFILE] = core::array::from_fn(|fd| p.ofile[fd].take());
            (p.space.take(), p.size, files, p.cwd.take())
        };

        let copy = space
            .as_ref()
            .and_then(|space| self.hal.copy_space(space, size));
        let child_space = match copy {
            Some(copy) => copy,
            None => {
                let mut table = self.acquire();
                let p = &mut table.procs[parent];
                p.space = space;
                p.ofile = files;
                p.cwd = cwd;
                crate::kwarn!("(Proc) fork: falha ao copiar memória do PID=", p.pid.as_u32());
                self.reclaim(&mut table, child);
                return Err(ProcError::OutOfMemory);
            }
        };
        let child_files: [Option<FileRef>; NOFILE] =
            core::array::from_fn(|fd| files[fd].as_ref().map(|file| self.hal.dup_file(file)));
        let child_cwd = cwd.as_ref().map(|inode| self.hal.dup_inode(inode));

        let mut table = self.acquire();
        let (mem_limit, stack_pages, name) = {
            let p = &mut table.procs[parent];
            p.space = space;
            p.ofile = files;
            p.cwd = cwd;
            (p.mem_limit, p.stack_pages, p.name)
        };

        if let (Some(from), Some(to)) = (
            table.procs[parent].kstack.as_ref(),
            table.procs[child].kstack.as_ref(),
        ) {
            self.hal.copy_frame(from, to);
        }

        let c = &mut table.procs[child];
        c.space = Some(child_space);
        c.size = size;
        c.mem_limit = mem_limit;
        c.stack_pages = stack_pages;
        c.ofile = child_files;
        c.cwd = child_cwd;
        c.name = name;
        c.parent = Some(parent);
        c.state = ProcState::Runnable;
        let pid = c.pid;

        crate::kinfo!("(Proc) fork: novo PID=", pid.as_u32());
        Ok(pid)
    }

    // =========================================================================
    // TÉRMINO
    // =========================================================================

    /// Termina o processo atual. Vira Zombie até o pai chamar `wait`.
    pub fn exit(&self) -> ! {
        let slot = match self.current_slot() {
            Some(slot) => slot,
            None => panic!("(Proc) exit sem processo atual"),
        };

        let (files, cwd) = {
            let mut table = self.acquire();
            if table.init == Some(slot) {
                panic!("(Proc) init exiting");
            }
            let p = &mut table.procs[slot];
            let files: [Option<FileRef>; NOFILE] = core::array::from_fn(|fd| p.ofile[fd].take());
            let cwd = p.cwd.take();
            (files, cwd)
        };

        // close/iput podem dormir: fora do lock da tabela
        for file in files.into_iter().flatten() {
            self.hal.close_file(file);
        }
        if let Some(cwd) = cwd {
            self.hal.begin_op();
            self.hal.put_inode(cwd);
            self.hal.end_op();
        }

        let mut table = self.acquire();
        let init = match table.init {
            Some(init) => init,
            None => panic!("(Proc) exit sem processo init"),
        };

        let parent = table.procs[slot].parent;
        if let Some(parent) = parent {
            table.wakeup(Channel::Proc(parent));
        }

        // Órfãos vão para o init
        let mut orphan_zombie = false;
        for child in 0..NPROC {
            let c = &mut table.procs[child];
            if c.parent == Some(slot) && c.state.is_live() {
                c.parent = Some(init);
                orphan_zombie |= c.state == ProcState::Zombie;
            }
        }
        if orphan_zombie {
            table.wakeup(Channel::Proc(init));
        }

        let p = &mut table.procs[slot];
        p.flags.remove(ProcFlags::SCHED_LOCKED);
        p.state = ProcState::Zombie;
        let level = p.sched.level;
        let _pid = p.pid;
        self.dequeue(level, slot);
        crate::kinfo!("(Proc) exit: PID=", _pid.as_u32());

        let _table = self.sched(table, slot);
        panic!("(Proc) zombie exit");
    }

    /// Espera um filho terminar. Retorna o PID coletado.
    pub fn wait(&self) -> SysResult<Pid> {
        let slot = self.current_slot().ok_or(ProcError::NoCurrent)?;
        let mut table = self.acquire();
        loop {
            let mut have_kids = false;
            for child in 0..NPROC {
                let c = &table.procs[child];
                if c.parent != Some(slot) || !c.state.is_live() {
                    continue;
                }
                have_kids = true;
                // Ainda na CPU: o scheduler de lá acorda o pai ao terminar
                if c.state == ProcState::Zombie && !c.is_on_cpu() {
                    let pid = c.pid;
                    self.reclaim(&mut table, child);
                    crate::kdebug!("(Proc) wait: coletado PID=", pid.as_u32());
                    return Ok(pid);
                }
            }

            if !have_kids {
                return Err(ProcError::NoChildren);
            }
            if table.procs[slot].is_killed() {
                return Err(ProcError::Interrupted);
            }

            table = self.sleep_locked(Channel::Proc(slot), slot, table);
        }
    }

    /// Marca o processo como morto. Um Sleeping acorda para ver a flag.
    pub fn kill(&self, pid: Pid) -> SysResult<()> {
        let mut table = self.acquire();
        let slot = table.slot_of(pid).ok_or(ProcError::NotFound)?;
        table.kill(slot);
        crate::kinfo!("(Proc) kill: PID=", pid.as_u32());
        Ok(())
    }

    /// Devolve stack e memória de um slot e o marca Unused.
    pub(crate) fn reclaim(&self, table: &mut ProcTable, slot: usize) {
        let p = &mut table.procs[slot];
        let level = p.sched.level;
        if let Some(stack) = p.kstack.take() {
            self.hal.free_stack(stack);
        }
        if let Some(space) = p.space.take() {
            self.hal.free_space(space, p.size);
        }
        *p = Proc::UNUSED;
        self.dequeue(level, slot);
    }

    // =========================================================================
    // CONSULTAS
    // =========================================================================

    /// PID do processo atual
    pub fn current_pid(&self) -> Option<Pid> {
        let slot = self.current_slot()?;
        let table = self.acquire();
        Some(table.procs[slot].pid)
    }

    /// O processo atual recebeu kill? (checado no retorno de syscall)
    pub fn killed(&self) -> bool {
        match self.current_slot() {
            Some(slot) => self.acquire().procs[slot].is_killed(),
            None => false,
        }
    }
}
