//! Process-level error handling.

/// Extension for `Result`s a driver binary cannot recover from.
///
/// A standalone job has nowhere to propagate an unusable configuration or a
/// dead input; rendering the full error chain and aborting beats bubbling
/// `Result`s up through `main`.
pub trait SpikewatchFatal<T, E>: Sized + sealed::Sealed {
    /// Abort the process with a readable report of this error.
    fn spikewatch_fatal(self) -> T;
}

impl<T, E> SpikewatchFatal<T, E> for Result<T, E>
where
    E: std::fmt::Debug + std::error::Error + Send + Sync + 'static,
{
    fn spikewatch_fatal(self) -> T {
        match self {
            Ok(x) => x,
            Err(e) => {
                let report = eyre::Report::new(e);
                panic!("{report:?}")
            }
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}
}
