//! Troca de contexto (primitiva de plataforma)
//!
//! O contexto salvo de um descritor mora na sua stack de kernel. O núcleo
//! nunca inspeciona esse conteúdo: só decide quem entra e quem sai.

use crate::sys::types::KernelStack;

pub trait ContextOps {
    /// Prepara uma stack nova: a primeira retomada cai no stub de entrada
    /// do kernel, que deve chamar `Kernel::fork_return` antes de voltar ao
    /// usuário.
    fn prepare_context(&self, stack: &KernelStack);

    /// Frame de usuário inicial do processo raiz (initcode no endereço 0).
    fn init_frame(&self, stack: &KernelStack);

    /// Copia o frame de trap do pai para o filho, com retorno zero no filho.
    fn copy_frame(&self, from: &KernelStack, to: &KernelStack);

    /// Scheduler da CPU `cpu` -> descritor dono de `stack`.
    /// Retorna quando o descritor devolve a CPU (`switch_to_scheduler`).
    ///
    /// # Safety
    /// Interrupções desligadas, lock da tabela já solto e `stack` pertencente
    /// a um descritor marcado `Running` nesta CPU.
    unsafe fn switch_to(&self, cpu: usize, stack: &KernelStack);

    /// Descritor dono de `stack` -> scheduler da CPU atual.
    /// Retorna quando o descritor for retomado (possivelmente em outra CPU).
    ///
    /// # Safety
    /// Interrupções desligadas, lock da tabela já solto e `stack` é a stack
    /// em execução.
    unsafe fn switch_to_scheduler(&self, stack: &KernelStack);
}
