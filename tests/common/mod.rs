//! Plataforma simulada para testes de host.
//!
//! Cada descritor roda na sua própria thread do SO. A troca de contexto é
//! um bastão: `switch_to` acorda a thread do descritor e bloqueia o
//! scheduler da CPU; `switch_to_scheduler` faz o caminho inverso. Só uma
//! das duas pontas executa de cada vez.
//!
//! A thread do teste é o scheduler da CPU 0 e avança a máquina chamando
//! `Kernel::run_once()`.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex, OnceLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use forge_mlfq::hal::{ContextOps, CpuOps, FsOps, MemOps};
use forge_mlfq::sched::config::{NCPU, PAGE_SIZE};
use forge_mlfq::sys::{AddressSpace, FileRef, InodeRef, KernelStack, Pid};
use forge_mlfq::{Dispatch, Kernel};

thread_local! {
    static CPU: Cell<usize> = const { Cell::new(0) };
}

/// Corpo de um processo simulado
pub type Program = Box<dyn FnOnce(&'static Kernel<Sim>) + Send>;

/// Passagem de CPU entre duas threads
#[derive(Default)]
struct Baton {
    cpu: Mutex<Option<usize>>,
    cv: Condvar,
}

impl Baton {
    fn pass(&self, cpu: usize) {
        *self.cpu.lock().unwrap() = Some(cpu);
        self.cv.notify_one();
    }

    fn take(&self) -> usize {
        let mut slot = self.cpu.lock().unwrap();
        loop {
            if let Some(cpu) = slot.take() {
                return cpu;
            }
            slot = self.cv.wait(slot).unwrap();
        }
    }
}

/// Ponto de parada dentro de `copy_space`: avisa `notify` e espera o
/// número de processos que outra CPU conseguiu listar.
pub struct CopyGate {
    pub notify: Sender<()>,
    pub ack: Receiver<usize>,
}

enum Stack {
    Fresh,
    Live(Arc<Baton>),
}

pub struct Sim {
    kernel: OnceLock<&'static Kernel<Sim>>,
    irq: [AtomicBool; NCPU],
    schedulers: [Baton; NCPU],
    stacks: Mutex<HashMap<u64, Stack>>,
    programs: Mutex<HashMap<u32, Program>>,
    next_handle: AtomicU64,
    pub fail_stack: AtomicBool,
    pub fail_copy: AtomicBool,
    pub live_spaces: AtomicUsize,
    pub freed_stacks: AtomicUsize,
    pub frames_copied: AtomicUsize,
    pub copy_gate: Mutex<Option<CopyGate>>,
    /// Resposta recebida em `copy_space` (`usize::MAX` = tabela travada)
    pub copy_observed: AtomicUsize,
}

impl Sim {
    fn new() -> Self {
        Self {
            kernel: OnceLock::new(),
            irq: std::array::from_fn(|_| AtomicBool::new(false)),
            schedulers: std::array::from_fn(|_| Baton::default()),
            stacks: Mutex::new(HashMap::new()),
            programs: Mutex::new(HashMap::new()),
            next_handle: AtomicU64::new(100),
            fail_stack: AtomicBool::new(false),
            fail_copy: AtomicBool::new(false),
            live_spaces: AtomicUsize::new(0),
            freed_stacks: AtomicUsize::new(0),
            frames_copied: AtomicUsize::new(0),
            copy_gate: Mutex::new(None),
            copy_observed: AtomicUsize::new(0),
        }
    }

    fn handle(&self) -> u64 {
        self.next_handle.fetch_add(1, Ordering::Relaxed)
    }

    fn start(&self, cpu: usize) {
        let kernel = *self.kernel.get().expect("kernel not booted");
        thread::spawn(move || {
            CPU.with(|c| c.set(cpu));
            kernel.fork_return();
            let pid = kernel.current_pid().expect("new process has no pid");
            let program = kernel.hal().programs.lock().unwrap().remove(&pid.as_u32());
            match program {
                Some(program) => program(kernel),
                None => loop {
                    kernel.yield_now();
                },
            }
            kernel.exit();
        });
    }

    /// Registra o corpo do processo que receber `pid`
    pub fn program(&self, pid: u32, body: impl FnOnce(&'static Kernel<Sim>) + Send + 'static) {
        self.programs.lock().unwrap().insert(pid, Box::new(body));
    }
}

impl CpuOps for Sim {
    fn cpu_id(&self) -> usize {
        CPU.with(|c| c.get())
    }

    fn interrupts_enabled(&self) -> bool {
        self.irq[self.cpu_id()].load(Ordering::SeqCst)
    }

    fn enable_interrupts(&self) {
        self.irq[self.cpu_id()].store(true, Ordering::SeqCst);
    }

    fn disable_interrupts(&self) {
        self.irq[self.cpu_id()].store(false, Ordering::SeqCst);
    }

    fn wait_for_interrupt(&self) {
        thread::yield_now();
    }
}

impl ContextOps for Sim {
    fn prepare_context(&self, stack: &KernelStack) {
        self.stacks.lock().unwrap().insert(stack.as_u64(), Stack::Fresh);
    }

    fn init_frame(&self, _stack: &KernelStack) {}

    fn copy_frame(&self, _from: &KernelStack, _to: &KernelStack) {
        self.frames_copied.fetch_add(1, Ordering::Relaxed);
    }

    unsafe fn switch_to(&self, cpu: usize, stack: &KernelStack) {
        let key = stack.as_u64();
        let mut stacks = self.stacks.lock().unwrap();
        match stacks.get(&key) {
            Some(Stack::Live(baton)) => {
                let baton = baton.clone();
                drop(stacks);
                baton.pass(cpu);
            }
            Some(Stack::Fresh) => {
                stacks.insert(key, Stack::Live(Arc::new(Baton::default())));
                drop(stacks);
                self.start(cpu);
            }
            None => panic!("switch_to: unknown stack {key}"),
        }
        self.schedulers[cpu].take();
    }

    unsafe fn switch_to_scheduler(&self, stack: &KernelStack) {
        let baton = match self.stacks.lock().unwrap().get(&stack.as_u64()) {
            Some(Stack::Live(baton)) => baton.clone(),
            _ => panic!("switch_to_scheduler: stack not running"),
        };
        let cpu = self.cpu_id();
        self.schedulers[cpu].pass(cpu);
        let resumed_on = baton.take();
        CPU.with(|c| c.set(resumed_on));
    }
}

impl MemOps for Sim {
    fn alloc_stack(&self) -> Option<KernelStack> {
        if self.fail_stack.load(Ordering::SeqCst) {
            return None;
        }
        Some(KernelStack::from_raw(self.handle()))
    }

    fn free_stack(&self, stack: KernelStack) {
        self.stacks.lock().unwrap().remove(&stack.as_u64());
        self.freed_stacks.fetch_add(1, Ordering::SeqCst);
    }

    fn setup_space(&self) -> Option<AddressSpace> {
        self.live_spaces.fetch_add(1, Ordering::SeqCst);
        Some(AddressSpace::from_raw(self.handle()))
    }

    fn load_init(&self, _space: &AddressSpace) -> usize {
        PAGE_SIZE
    }

    fn copy_space(&self, _space: &AddressSpace, _size: usize) -> Option<AddressSpace> {
        if self.fail_copy.load(Ordering::SeqCst) {
            return None;
        }
        if let Some(gate) = self.copy_gate.lock().unwrap().as_ref() {
            gate.notify.send(()).unwrap();
            let seen = gate
                .ack
                .recv_timeout(Duration::from_secs(2))
                .unwrap_or(usize::MAX);
            self.copy_observed.store(seen, Ordering::SeqCst);
        }
        self.live_spaces.fetch_add(1, Ordering::SeqCst);
        Some(AddressSpace::from_raw(self.handle()))
    }

    fn free_space(&self, _space: AddressSpace, _size: usize) {
        self.live_spaces.fetch_sub(1, Ordering::SeqCst);
    }

    fn grow_space(&self, _space: &AddressSpace, _old: usize, new: usize) -> Option<usize> {
        Some(new)
    }

    fn shrink_space(&self, _space: &AddressSpace, _old: usize, new: usize) -> Option<usize> {
        Some(new)
    }
}

impl FsOps for Sim {
    fn dup_file(&self, file: &FileRef) -> FileRef {
        FileRef::from_raw(file.as_u64())
    }

    fn close_file(&self, _file: FileRef) {}

    fn dup_inode(&self, inode: &InodeRef) -> InodeRef {
        InodeRef::from_raw(inode.as_u64())
    }

    fn put_inode(&self, _inode: InodeRef) {}

    fn resolve_root(&self) -> Option<InodeRef> {
        Some(InodeRef::from_raw(1))
    }

    fn begin_op(&self) {}

    fn end_op(&self) {}
}

// =============================================================================
// HELPERS
// =============================================================================

/// Kernel novo, sem processos. A thread atual vira a CPU 0.
pub fn boot() -> &'static Kernel<Sim> {
    set_cpu(0);
    let kernel: &'static Kernel<Sim> = Box::leak(Box::new(Kernel::new(Sim::new())));
    if kernel.hal().kernel.set(kernel).is_err() {
        unreachable!("fresh sim already booted");
    }
    kernel
}

/// A thread atual passa a ser a CPU `cpu`
pub fn set_cpu(cpu: usize) {
    CPU.with(|c| c.set(cpu));
}

/// Scheduler da CPU `cpu` numa thread própria, até `stop`
pub fn spawn_cpu(
    kernel: &'static Kernel<Sim>,
    cpu: usize,
    stop: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        set_cpu(cpu);
        while !stop.load(Ordering::SeqCst) {
            if kernel.run_once() == Dispatch::Idle {
                thread::yield_now();
            }
        }
    })
}

/// Kernel com o init rodando `init_body`
pub fn boot_with_init(
    init_body: impl FnOnce(&'static Kernel<Sim>) + Send + 'static,
) -> &'static Kernel<Sim> {
    let kernel = boot();
    kernel.hal().program(Pid::INIT.as_u32(), init_body);
    let pid = kernel.user_init().expect("user_init");
    assert_eq!(pid, Pid::INIT);
    kernel
}

/// Init que só cede a CPU para sempre
pub fn idle_init(kernel: &'static Kernel<Sim>) {
    loop {
        kernel.yield_now();
    }
}

/// Roda `n` iterações do scheduler
pub fn run(kernel: &Kernel<Sim>, n: usize) -> Vec<Dispatch> {
    (0..n).map(|_| kernel.run_once()).collect()
}

/// Roda o scheduler até chegar uma mensagem em `rx`
pub fn run_until<T>(kernel: &Kernel<Sim>, rx: &Receiver<T>, max: usize) -> T {
    for _ in 0..max {
        if let Ok(msg) = rx.try_recv() {
            return msg;
        }
        kernel.run_once();
    }
    rx.try_recv()
        .unwrap_or_else(|_| panic!("no message after {max} scheduler iterations"))
}

/// Roda o scheduler até `done` valer
pub fn run_while(kernel: &Kernel<Sim>, max: usize, mut pending: impl FnMut() -> bool) {
    for _ in 0..max {
        if !pending() {
            return;
        }
        kernel.run_once();
    }
    assert!(!pending(), "condition still pending after {max} iterations");
}

pub fn channel<T>() -> (Sender<T>, Receiver<T>) {
    mpsc::channel()
}

/// Pids na ordem da fila
pub fn queue_pids(kernel: &Kernel<Sim>, level: forge_mlfq::Level) -> Vec<Pid> {
    let mut pids = Vec::new();
    kernel.for_each_queued(level, |pid| pids.push(pid));
    pids
}
