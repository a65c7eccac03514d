//! Process Control Block

use super::accounting::Accounting;
use super::flags::ProcFlags;
use super::state::ProcState;
use crate::sched::config::{NOFILE, PROC_NAME_LEN};
use crate::sched::sync::Channel;
use crate::sys::types::{AddressSpace, FileRef, InodeRef, KernelStack, Pid};

/// Descritor de processo
///
/// Vive num slot fixo da tabela; todos os campos são protegidos pelo lock
/// da tabela, exceto os handles de um Embryo (exclusivos de quem o alocou).
pub struct Proc {
    /// ID único (0 = slot livre)
    pub pid: Pid,
    /// Estado atual
    pub state: ProcState,
    pub flags: ProcFlags,
    /// Stack de kernel; o contexto salvo mora nela
    pub kstack: Option<KernelStack>,
    /// Espaço de endereçamento de usuário
    pub space: Option<AddressSpace>,
    /// Tamanho da memória de usuário (bytes)
    pub size: usize,
    /// Teto de memória (0 = sem limite)
    pub mem_limit: usize,
    /// Páginas de stack de usuário (listagem)
    pub stack_pages: usize,
    /// Slot do pai (referência fraca)
    pub parent: Option<usize>,
    /// Canal de espera, só enquanto Sleeping
    pub chan: Option<Channel>,
    /// Nível, ticks e prioridade MLFQ
    pub sched: Accounting,
    /// Arquivos abertos
    pub ofile: [Option<FileRef>; NOFILE],
    /// Diretório atual
    pub cwd: Option<InodeRef>,
    /// Nome (debug), terminado em NUL
    pub name: [u8; PROC_NAME_LEN],
}

impl Proc {
    const NO_FILE: Option<FileRef> = None;

    /// Slot vazio
    pub const UNUSED: Proc = Proc {
        pid: Pid::NONE,
        state: ProcState::Unused,
        flags: ProcFlags::empty(),
        kstack: None,
        space: None,
        size: 0,
        mem_limit: 0,
        stack_pages: 0,
        parent: None,
        chan: None,
        sched: Accounting::new(),
        ofile: [Self::NO_FILE; NOFILE],
        cwd: None,
        name: [0; PROC_NAME_LEN],
    };

    pub fn set_name(&mut self, name: &str) {
        self.name = [0; PROC_NAME_LEN];
        let bytes = name.as_bytes();
        let len = bytes.len().min(PROC_NAME_LEN - 1);
        self.name[..len].copy_from_slice(&bytes[..len]);
    }

    pub fn name_str(&self) -> &str {
        name_str(&self.name)
    }

    pub fn is_killed(&self) -> bool {
        self.flags.contains(ProcFlags::KILLED)
    }

    pub fn is_pinned(&self) -> bool {
        self.flags.contains(ProcFlags::SCHED_LOCKED)
    }

    pub fn is_on_cpu(&self) -> bool {
        self.flags.contains(ProcFlags::ON_CPU)
    }
}

/// Nome até o primeiro NUL
pub fn name_str(name: &[u8]) -> &str {
    let len = name.iter().position(|&b| b == 0).unwrap_or(name.len());
    core::str::from_utf8(&name[..len]).unwrap_or("?")
}
