//! Canais de espera

/// Token que um descritor espera enquanto Sleeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// "Meu filho terminou": canal do pai, pelo slot
    Proc(usize),
    /// Tick do timer (sleep_ticks)
    Ticks,
    /// Canais de outros subsistemas (endereço de um objeto, por exemplo)
    Custom(usize),
}
