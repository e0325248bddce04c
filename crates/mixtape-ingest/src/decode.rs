//! Incremental record decoding
//!
//! A collection body is either one top-level JSON array or a sequence of
//! concatenated JSON values. Either way records are decoded one at a time
//! and handed to a callback; the body is never buffered whole.

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::marker::PhantomData;
use std::ops::ControlFlow;

use serde::de::{DeserializeOwned, Deserializer as _, SeqAccess, Visitor};
use serde_json::Deserializer;

use crate::errors::{decode_error, transport_error, Result};

/// Decode every record in `reader`, calling `on_record` for each
///
/// Returns the number of records handed to `on_record`. Returning
/// `ControlFlow::Break` stops decoding early; whatever is left of the body
/// is not read and not reported.
///
/// # Errors
/// * `Transport` - If reading the body fails
/// * `Decode` - If the body is not JSON or a record has the wrong shape
pub fn decode_records<T, R, F>(reader: R, resource: &str, mut on_record: F) -> Result<u64>
where
    T: DeserializeOwned,
    R: Read,
    F: FnMut(T) -> ControlFlow<()>,
{
    let mut reader = BufReader::new(reader);

    let first = match first_significant_byte(&mut reader) {
        Ok(Some(byte)) => byte,
        Ok(None) => return Ok(0),
        Err(e) => return Err(transport_error(resource, e)),
    };

    let mut stopped = false;
    let mut forward = |record: T| {
        let flow = on_record(record);
        stopped = flow.is_break();
        flow
    };

    let result = if first == b'[' {
        decode_array(reader, &mut forward)
    } else {
        decode_stream(reader, &mut forward)
    };

    match result {
        Ok(count) => Ok(count),
        // Breaking out mid-array leaves the closing bracket unread
        Err((count, _)) if stopped => Ok(count),
        Err((_, err)) => Err(decode_error(resource, err)),
    }
}

type DecodeResult = std::result::Result<u64, (u64, serde_json::Error)>;

fn decode_array<T, R, F>(reader: R, on_record: &mut F) -> DecodeResult
where
    T: DeserializeOwned,
    R: Read,
    F: FnMut(T) -> ControlFlow<()>,
{
    let mut count = 0;
    let mut de = Deserializer::from_reader(reader);
    let visitor = RecordVisitor {
        on_record,
        count: &mut count,
        marker: PhantomData,
    };

    let result = (&mut de).deserialize_seq(visitor).and_then(|()| de.end());
    result.map(|()| count).map_err(|e| (count, e))
}

fn decode_stream<T, R, F>(reader: R, on_record: &mut F) -> DecodeResult
where
    T: DeserializeOwned,
    R: Read,
    F: FnMut(T) -> ControlFlow<()>,
{
    let mut count = 0;
    for record in Deserializer::from_reader(reader).into_iter::<T>() {
        let record = record.map_err(|e| (count, e))?;
        count += 1;
        if on_record(record).is_break() {
            break;
        }
    }
    Ok(count)
}

struct RecordVisitor<'a, T, F> {
    on_record: &'a mut F,
    count: &'a mut u64,
    marker: PhantomData<fn() -> T>,
}

impl<'de, T, F> Visitor<'de> for RecordVisitor<'_, T, F>
where
    T: DeserializeOwned,
    F: FnMut(T) -> ControlFlow<()>,
{
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of records")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        while let Some(record) = seq.next_element::<T>()? {
            *self.count += 1;
            if (self.on_record)(record).is_break() {
                break;
            }
        }
        Ok(())
    }
}

/// Skip leading whitespace and peek at the first byte, if any
fn first_significant_byte<R: Read>(reader: &mut BufReader<R>) -> std::io::Result<Option<u8>> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(pos) => {
                let byte = buf[pos];
                reader.consume(pos);
                return Ok(Some(byte));
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}
