//! Arquivos e inodes (camada de FS)

use crate::sys::types::{FileRef, InodeRef};

pub trait FsOps {
    /// Nova referência para o mesmo arquivo aberto.
    fn dup_file(&self, file: &FileRef) -> FileRef;

    /// Pode dormir: nunca chamar com o lock da tabela.
    fn close_file(&self, file: FileRef);

    fn dup_inode(&self, inode: &InodeRef) -> InodeRef;

    /// Pode dormir; deve ficar dentro de `begin_op`/`end_op`.
    fn put_inode(&self, inode: InodeRef);

    /// Inode de `/`.
    fn resolve_root(&self) -> Option<InodeRef>;

    /// Início de transação do log do FS.
    fn begin_op(&self);

    fn end_op(&self);
}
