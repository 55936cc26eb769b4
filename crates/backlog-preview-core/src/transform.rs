//! The text to HTML transformation contract.
//!
//! A port is initialized asynchronously exactly once with [`initialize`], which
//! hands back a [`Ready`] wrapper. Everything that renders takes `Ready<T>`
//! rather than `T`, so nothing can call into a port that has not finished
//! initializing.

use crate::error::TransformError;

/// Synchronous text to HTML conversion.
///
/// Implementations should be total and side-effect free. The returned markup
/// is assigned to the preview verbatim.
pub trait Transform {
    fn transform(&self, text: &str) -> Result<String, TransformError>;
}

impl<F> Transform for F
where
    F: Fn(&str) -> String,
{
    fn transform(&self, text: &str) -> Result<String, TransformError> {
        Ok(self(text))
    }
}

/// A transformation that needs asynchronous setup before first use.
#[allow(async_fn_in_trait)]
pub trait TransformPort: Transform {
    /// Resolves once the port can serve `transform` calls.
    async fn ready(&self) -> Result<(), TransformError> {
        Ok(())
    }
}

impl<F> TransformPort for F where F: Fn(&str) -> String {}

/// A port that has completed initialization.
#[derive(Debug)]
pub struct Ready<T> {
    port: T,
}

impl<T> Ready<T> {
    pub fn port(&self) -> &T {
        &self.port
    }

    pub fn into_inner(self) -> T {
        self.port
    }
}

impl<T: Transform> Transform for Ready<T> {
    fn transform(&self, text: &str) -> Result<String, TransformError> {
        self.port.transform(text)
    }
}

/// Await the port's readiness signal and return the gated handle.
pub async fn initialize<T: TransformPort>(port: T) -> Result<Ready<T>, TransformError> {
    port.ready().await?;
    tracing::debug!("transformation port ready");
    Ok(Ready { port })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct CountingPort {
        readied: Cell<u32>,
    }

    impl Transform for CountingPort {
        fn transform(&self, text: &str) -> Result<String, TransformError> {
            Ok(text.to_uppercase())
        }
    }

    impl TransformPort for CountingPort {
        async fn ready(&self) -> Result<(), TransformError> {
            self.readied.set(self.readied.get() + 1);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BrokenPort;

    impl Transform for BrokenPort {
        fn transform(&self, _text: &str) -> Result<String, TransformError> {
            Err("unreachable".into())
        }
    }

    impl TransformPort for BrokenPort {
        async fn ready(&self) -> Result<(), TransformError> {
            Err(TransformError::new("wasm module failed to load"))
        }
    }

    #[test]
    fn initialize_awaits_ready_once() {
        let port = CountingPort {
            readied: Cell::new(0),
        };
        let ready = pollster::block_on(initialize(port)).unwrap();
        assert_eq!(ready.port().readied.get(), 1);
        assert_eq!(ready.transform("abc").unwrap(), "ABC");
    }

    #[test]
    fn initialize_surfaces_readiness_failure() {
        let err = pollster::block_on(initialize(BrokenPort)).unwrap_err();
        assert_eq!(err.message(), "wasm module failed to load");
    }

    #[test]
    fn closures_are_ports() {
        let ready = pollster::block_on(initialize(|text: &str| format!("<p>{text}</p>"))).unwrap();
        assert_eq!(ready.transform("").unwrap(), "<p></p>");
    }
}
