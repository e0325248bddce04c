//! Producer/consumer hand-off for one collection
//!
//! The producer thread reads and decodes; the calling thread consumes. A
//! single-slot channel sits between them so at most one decoded record is
//! waiting while the consumer works.

use std::io::Read;
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread;

use serde::de::DeserializeOwned;

use crate::decode::decode_records;
use crate::errors::{io_error, Result};
use mixtape_core::MixtapeError;

/// Decode `reader` on a producer thread and feed each record to `consume`
///
/// `consume` runs on the calling thread, in record order. If it fails,
/// the producer is told to stop and that failure is returned. Otherwise
/// any decode or transport failure from the producer is returned.
///
/// Returns the number of records consumed.
///
/// # Errors
/// * `Transport` / `Decode` - From the producer
/// * `Io` - If the producer thread cannot be started
/// * Whatever `consume` returns
pub fn stream_records<T, F>(reader: Box<dyn Read + Send>, resource: &str, mut consume: F) -> Result<u64>
where
    T: DeserializeOwned + Send + 'static,
    F: FnMut(T) -> Result<()>,
{
    let (tx, rx) = mpsc::sync_channel::<T>(1);

    let producer_resource = resource.to_string();
    let producer = thread::Builder::new()
        .name(format!("decode-{}", resource))
        .spawn(move || {
            decode_records(reader, &producer_resource, |record| match tx.send(record) {
                Ok(()) => ControlFlow::Continue(()),
                // Consumer hung up
                Err(_) => ControlFlow::Break(()),
            })
        })
        .map_err(|e| io_error("spawn decoder", e))?;

    let mut consumed = 0;
    let mut outcome = Ok(());
    for record in rx.iter() {
        if let Err(e) = consume(record) {
            outcome = Err(e);
            break;
        }
        consumed += 1;
    }
    drop(rx);

    let produced = producer.join().map_err(|_| MixtapeError::Internal {
        message: format!("decoder thread for {} panicked", resource),
    })?;

    outcome?;
    produced?;
    Ok(consumed)
}
