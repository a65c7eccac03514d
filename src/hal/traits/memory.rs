//! Alocador de stacks e espaços de endereçamento

use crate::sys::types::{AddressSpace, KernelStack};

pub trait MemOps {
    /// Nova stack de kernel. `None` = sem memória.
    fn alloc_stack(&self) -> Option<KernelStack>;

    fn free_stack(&self, stack: KernelStack);

    /// Espaço de endereçamento vazio (só o mapeamento do kernel).
    fn setup_space(&self) -> Option<AddressSpace>;

    /// Carrega o initcode no espaço; retorna o tamanho ocupado (uma página).
    fn load_init(&self, space: &AddressSpace) -> usize;

    /// Duplica `size` bytes de memória de usuário.
    fn copy_space(&self, space: &AddressSpace, size: usize) -> Option<AddressSpace>;

    fn free_space(&self, space: AddressSpace, size: usize);

    /// Cresce de `old` para `new` bytes; retorna o novo tamanho.
    fn grow_space(&self, space: &AddressSpace, old: usize, new: usize) -> Option<usize>;

    /// Encolhe de `old` para `new` bytes; retorna o novo tamanho.
    fn shrink_space(&self, space: &AddressSpace, old: usize, new: usize) -> Option<usize>;
}
