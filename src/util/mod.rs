pub mod difficulty;
pub mod float_ext;
pub mod strains_vec;

/// Forwards to `tracing::debug` if the `tracing` feature is enabled.
macro_rules! log_debug {
    ( $( $arg:tt )* ) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!( $( $arg )* );
        }
    };
}

/// Forwards to `tracing::warn` if the `tracing` feature is enabled.
macro_rules! log_warn {
    ( $( $arg:tt )* ) => {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!( $( $arg )* );
        }
    };
}

pub(crate) use {log_debug, log_warn};
