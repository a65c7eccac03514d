// =============================================================================
// KERNEL LOGGING - ZERO OVERHEAD
// =============================================================================
//
// Macros de log do núcleo de escalonamento.
//
// ARQUITETURA:
// - Filtragem em tempo de compilação via features do Cargo
// - Com a feature "no_logs" TODOS os macros viram expressões vazias
// - A saída vai para a fachada `log`; o binário do kernel instala o logger
//   (serial) e este crate nunca escolhe destino
//
// NÍVEIS (do mais crítico ao menos):
// - ERROR: invariantes violadas, recursos esgotados
// - WARN:  situações suspeitas mas recuperáveis
// - INFO:  ciclo de vida (fork, exit, lock do scheduler)
// - DEBUG: decisões de política (boost, migração de fila)
// - TRACE: cada despacho
//
// COMO USAR:
//   kinfo!("(Proc) Inicializando...");        // Apenas string
//   kinfo!("(Proc) fork: PID=", pid.as_u32()); // String + hex
//
// =============================================================================

/// Target usado em todos os registros do crate.
pub const TARGET: &str = "forge::sched";

// =============================================================================
// ERROR
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {{
        $crate::__log::error!(target: $crate::klib::logging::TARGET, "{}", $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::__log::error!(target: $crate::klib::logging::TARGET, "{}{:#x}", $msg, $val as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {{
        $crate::__log::warn!(target: $crate::klib::logging::TARGET, "{}", $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::__log::warn!(target: $crate::klib::logging::TARGET, "{}{:#x}", $msg, $val as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// INFO
// =============================================================================
//
// Ativo com log_info, log_debug ou log_trace.
//

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {{
        $crate::__log::info!(target: $crate::klib::logging::TARGET, "{}", $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::__log::info!(target: $crate::klib::logging::TARGET, "{}{:#x}", $msg, $val as u64);
    }};
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// DEBUG
// =============================================================================

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {{
        $crate::__log::debug!(target: $crate::klib::logging::TARGET, "{}", $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::__log::debug!(target: $crate::klib::logging::TARGET, "{}{:#x}", $msg, $val as u64);
    }};
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// TRACE
// =============================================================================
//
// Apenas com log_trace (padrão de desenvolvimento).
//

#[cfg(all(not(feature = "no_logs"), feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {{
        $crate::__log::trace!(target: $crate::klib::logging::TARGET, "{}", $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::__log::trace!(target: $crate::klib::logging::TARGET, "{}{:#x}", $msg, $val as u64);
    }};
}

#[cfg(not(all(not(feature = "no_logs"), feature = "log_trace")))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}
