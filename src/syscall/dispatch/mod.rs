//! # Syscall Dispatcher
//!
//! Table-based dispatcher. O valor devolvido vai direto para o registrador
//! de retorno: o resultado em sucesso, `-1` em qualquer erro.

pub mod table;

use super::abi::SyscallArgs;
use crate::hal::Platform;
use crate::sched::Kernel;

pub use table::{syscall_table, SyscallHandler, TABLE_SIZE};

/// Executa a syscall `args.num` em nome do processo atual
pub fn dispatch<H: Platform>(kernel: &Kernel<H>, args: &SyscallArgs) -> isize {
    crate::ktrace!("[SYSCALL] num=", args.num);

    let handler = if args.num < TABLE_SIZE {
        syscall_table::<H>()[args.num]
    } else {
        None
    };

    match handler {
        Some(handler) => match handler(kernel, args) {
            Ok(value) => value as isize,
            Err(_err) => {
                crate::ktrace!("[SYSCALL] Handler retornou erro: ", _err.as_isize());
                -1
            }
        },
        None => {
            crate::kwarn!("[SYSCALL] Syscall desconhecida: ", args.num);
            -1
        }
    }
}
