//! Processos: descritor, tabela e ciclo de vida

pub mod accounting;
pub mod entity;
pub mod flags;
pub mod lifecycle;
pub mod memory;
pub mod state;
pub mod table;

pub use accounting::{Accounting, Level};
pub use entity::Proc;
pub use flags::ProcFlags;
pub use state::ProcState;
pub use table::ProcTable;
