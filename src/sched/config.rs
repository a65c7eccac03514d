//! Constantes de configuração do Scheduler

/// Capacidade da tabela de processos
pub const NPROC: usize = 64;

/// Máximo de CPUs
pub const NCPU: usize = 8;

/// Arquivos abertos por processo
pub const NOFILE: usize = 16;

/// Tamanho do nome de processo (bytes, com NUL)
pub const PROC_NAME_LEN: usize = 16;

/// Número de filas MLFQ
pub const LEVELS: usize = 3;

/// Quantum (ticks) da fila L0
pub const L0_QUANTUM: u32 = 4;

/// Quantum (ticks) da fila L1
pub const L1_QUANTUM: u32 = 6;

/// Quantum (ticks) da fila L2
pub const L2_QUANTUM: u32 = 8;

/// Prioridade mínima (mais urgente em L2)
pub const PRIORITY_MIN: u8 = 0;

/// Prioridade máxima
pub const PRIORITY_MAX: u8 = 3;

/// Prioridade padrão de processos novos e após boost
pub const PRIORITY_DEFAULT: u8 = 3;

/// Senha do schedulerLock/schedulerUnlock
pub const SCHED_LOCK_PASSWORD: i32 = 2021038122;

/// Período do priority boost (ticks globais)
pub const BOOST_INTERVAL: u64 = 100;

/// Tamanho de página
pub const PAGE_SIZE: usize = 4096;
