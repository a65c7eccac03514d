//! Interface Abstrata de CPU (HAL).
//!
//! O núcleo de processos só precisa saber em que CPU está e controlar as
//! interrupções locais; o resto da arquitetura fica fora.

pub trait CpuOps {
    /// ID da CPU atual (`0..NCPU`). Só é estável com interrupções desligadas.
    fn cpu_id(&self) -> usize;

    /// Verifica se as interrupções estão habilitadas nesta CPU.
    fn interrupts_enabled(&self) -> bool;

    /// Habilita interrupções (STI).
    fn enable_interrupts(&self);

    /// Desabilita interrupções (CLI).
    fn disable_interrupts(&self);

    /// Espera a próxima interrupção (HLT). Chamado pelo scheduler ocioso.
    fn wait_for_interrupt(&self);
}
