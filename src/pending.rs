//! Single-resolution handles for in-flight asynchronous requests.

use crate::error::Error;
use crate::response::Outcome;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// A single-resolution future for one in-flight request.
///
/// The dispatch task resolves it with the classified [`Outcome`] or rejects
/// it with the error that ended the exchange — exactly one of the two, exactly
/// once, always on a later reactor turn. Dropping the handle abandons the
/// result; the request itself still runs to completion.
#[derive(Debug)]
pub struct PendingCall {
    rx: oneshot::Receiver<crate::Result<Outcome>>,
}

impl PendingCall {
    pub(crate) fn new(rx: oneshot::Receiver<crate::Result<Outcome>>) -> Self {
        Self { rx }
    }
}

impl Future for PendingCall {
    type Output = crate::Result<Outcome>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| match received {
            Ok(result) => result,
            // The dispatch task always sends before dropping its end; a
            // closed channel means the reactor tore the task down.
            Err(_) => Err(Error::Network(
                "request task ended before delivering a response".to_string(),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn resolves_with_the_sent_outcome() {
        let (tx, rx) = oneshot::channel();
        let pending = PendingCall::new(rx);

        tx.send(Ok(Outcome::Accepted)).unwrap();
        assert_eq!(block_on(pending).unwrap(), Outcome::Accepted);
    }

    #[test]
    fn rejects_with_the_sent_error() {
        let (tx, rx) = oneshot::channel();
        let pending = PendingCall::new(rx);

        tx.send(Err(Error::Authentication("invalid key".to_string())))
            .unwrap();
        let err = block_on(pending).unwrap_err();
        assert_eq!(err.to_string(), "invalid key");
    }

    #[test]
    fn a_torn_down_task_reads_as_a_network_error() {
        let (tx, rx) = oneshot::channel::<crate::Result<Outcome>>();
        let pending = PendingCall::new(rx);

        drop(tx);
        assert!(matches!(block_on(pending).unwrap_err(), Error::Network(_)));
    }
}
