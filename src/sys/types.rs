//! Tipos fundamentais do núcleo de processos
//!
//! Ids e handles opacos trocados com as camadas de plataforma. Os handles
//! não são `Copy`: cada um pertence a exatamente um descritor, e a posse só
//! muda explicitamente (fork duplica, reap devolve).

/// Process ID
///
/// `0` marca slot livre; ids vivos são sempre positivos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Pid(pub u32);

impl Pid {
    pub const NONE: Pid = Pid(0);
    pub const INIT: Pid = Pid(1);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

macro_rules! opaque_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, PartialEq, Eq)]
        #[repr(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }
    };
}

opaque_handle!(
    /// Stack de kernel de um descritor (contexto salvo mora nela)
    KernelStack
);
opaque_handle!(
    /// Espaço de endereçamento de usuário
    AddressSpace
);
opaque_handle!(
    /// Arquivo aberto (entrada da tabela de arquivos do FS)
    FileRef
);
opaque_handle!(
    /// Inode referenciado (diretório de trabalho)
    InodeRef
);
