//! Structured decoding of loosely formatted JSON exports.
//!
//! A buffer is decoded in two steps. First it is parsed into generic records
//! (`serde_json::Map`), and every field whose *name* is in the configured
//! time-field set and whose value is a string is run through
//! [`time::resolve`](crate::time::resolve). Resolved values are replaced by
//! their canonical RFC 3339 form; unresolved ones are left exactly as they
//! were. Each rewritten record is then converted into the target type `T`.
//!
//! Multiple buffers (paginated responses, batched exports) are merged by
//! identity with last-write-wins semantics across the whole call.
//!
//! # Decode Flow
//!
//! ```text
//! &[u8] ──parse──▶ Vec<Map<String, Value>>
//!                        │
//!                        ▼  rewrite_time_fields (per record, recursive)
//!                  Vec<Map<String, Value>>
//!                        │
//!                        ▼  serde_json::from_value::<T>
//!                      Vec<T>
//!
//! [buf0, buf1, ...] ──decode each──▶ BTreeMap<identity, T> ──▶ Vec<T>
//! ```
//!
//! # Examples
//!
//! ```rust
//! use hsds_types::{decode_merged, Unit};
//!
//! let page_one = br#"[{"id": "u-1", "name": "beds", "created_at": "2024-03-28 15:00:00+00"}]"#;
//! let page_two = br#"[{"id": "u-1", "name": "cots"}, {"id": "u-2", "name": "meals"}]"#;
//!
//! let units: Vec<Unit> = decode_merged(&[&page_one[..], &page_two[..]]).unwrap();
//! assert_eq!(units.len(), 2);
//! assert_eq!(units[0].name, "cots");
//! ```
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info, trace, warn, Level};

use crate::config::{ConfigError, DecodeConfig, MergePolicy};
use crate::error::DecodeError;
use crate::time;

/// Records that carry a string identity used for deduplication.
pub trait Identified {
    /// The identity of this record; two records with equal identities are
    /// the same entity.
    fn identity(&self) -> &str;
}

/// Compiled form of a [`DecodeConfig`].
///
/// Holds no mutable state; a single `Decoder` can be shared across threads
/// and reused for any number of calls.
#[derive(Debug, Clone)]
pub struct Decoder {
    time_fields: HashSet<String>,
    recurse_into_arrays: bool,
    merge_policy: MergePolicy,
    max_buffer_bytes: Option<usize>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::from_config(DecodeConfig::default())
    }
}

impl Decoder {
    /// Validates `cfg` and builds a decoder from it.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] reported by [`DecodeConfig::validate`].
    pub fn new(cfg: DecodeConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::from_config(cfg))
    }

    fn from_config(cfg: DecodeConfig) -> Self {
        Self {
            time_fields: cfg.time_fields.into_iter().collect(),
            recurse_into_arrays: cfg.recurse_into_arrays,
            merge_policy: cfg.merge_policy,
            max_buffer_bytes: cfg.max_buffer_bytes,
        }
    }

    /// Whether `name` is in this decoder's time-field set.
    pub fn is_time_field(&self, name: &str) -> bool {
        self.time_fields.contains(name)
    }

    /// Rewrites time-like fields of `record` in place, at every nesting depth.
    ///
    /// Returns the number of fields that resolved and were rewritten. Fields
    /// that do not resolve keep their original string.
    pub fn rewrite_time_fields(&self, record: &mut Map<String, Value>) -> usize {
        let mut rewritten = 0;
        for (key, value) in record.iter_mut() {
            match value {
                Value::String(raw) if self.is_time_field(key) => match time::resolve(raw) {
                    Some(instant) => {
                        *raw = time::encode_instant(&instant);
                        rewritten += 1;
                    }
                    None => trace!(field = %key, "time_field_unresolved"),
                },
                Value::Object(nested) => rewritten += self.rewrite_time_fields(nested),
                Value::Array(items) if self.recurse_into_arrays => {
                    for item in items.iter_mut() {
                        if let Value::Object(nested) = item {
                            rewritten += self.rewrite_time_fields(nested);
                        }
                    }
                }
                _ => {}
            }
        }
        rewritten
    }

    /// Decodes one buffer holding a JSON array of objects into `Vec<T>`.
    ///
    /// Output order matches input order.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::BufferTooLarge`] if the buffer exceeds the configured limit
    /// - [`DecodeError::MalformedInput`] if the buffer is not an array of objects
    /// - [`DecodeError::TypeConversion`] if a record does not fit `T`
    pub fn decode_one<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<Vec<T>, DecodeError> {
        let start = Instant::now();
        match self.decode_buffer(raw) {
            Ok((records, rewritten)) => {
                let elapsed_micros = start.elapsed().as_micros();
                debug!(
                    bytes = raw.len(),
                    records = records.len(),
                    rewritten,
                    elapsed_micros,
                    "decode_success"
                );
                Ok(records)
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(
                    bytes = raw.len(),
                    error = %err,
                    stage = ?err.stage(),
                    elapsed_micros,
                    "decode_failure"
                );
                Err(err)
            }
        }
    }

    /// Decodes every buffer and merges the records by identity.
    ///
    /// Buffers are processed in order; within a buffer, records in order. A
    /// later record with an already seen identity replaces the earlier one.
    /// The result is sorted by identity. An empty `buffers` slice yields an
    /// empty result.
    ///
    /// # Errors
    ///
    /// Under [`MergePolicy::FailFast`], the first failing buffer aborts the
    /// merge with [`DecodeError::InBuffer`]. Under
    /// [`MergePolicy::SkipFailedBuffers`] this never fails.
    pub fn decode_merged<T, B>(&self, buffers: &[B]) -> Result<Vec<T>, DecodeError>
    where
        T: DeserializeOwned + Identified,
        B: AsRef<[u8]>,
    {
        let start = Instant::now();
        let span = tracing::span!(Level::DEBUG, "decode.merged", buffers = buffers.len());
        let _guard = span.enter();

        let mut merged = BTreeMap::new();
        let mut tally = MergeTally::default();
        for (index, buffer) in buffers.iter().enumerate() {
            let outcome = self.decode_buffer(buffer.as_ref()).map(|(records, _)| records);
            self.absorb(&mut merged, &mut tally, index, outcome)?;
        }

        Ok(finish(merged, tally, buffers.len(), start))
    }

    /// Parallel variant of [`decode_merged`](Self::decode_merged).
    ///
    /// Buffers are decoded on the rayon pool; merging happens afterwards in
    /// buffer order, so last-write-wins is identical to the sequential path.
    /// Under [`MergePolicy::FailFast`] every buffer is still decoded, and the
    /// failure with the lowest buffer index is reported.
    #[cfg(feature = "parallel")]
    pub fn par_decode_merged<T, B>(&self, buffers: &[B]) -> Result<Vec<T>, DecodeError>
    where
        T: DeserializeOwned + Identified + Send,
        B: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;

        let start = Instant::now();
        let span = tracing::span!(Level::DEBUG, "decode.merged", buffers = buffers.len());
        let _guard = span.enter();

        let decoded: Vec<Result<Vec<T>, DecodeError>> = buffers
            .par_iter()
            .map(|buffer| {
                self.decode_buffer(buffer.as_ref())
                    .map(|(records, _)| records)
            })
            .collect();

        let mut merged = BTreeMap::new();
        let mut tally = MergeTally::default();
        for (index, outcome) in decoded.into_iter().enumerate() {
            self.absorb(&mut merged, &mut tally, index, outcome)?;
        }

        Ok(finish(merged, tally, buffers.len(), start))
    }

    fn decode_buffer<T: DeserializeOwned>(
        &self,
        raw: &[u8],
    ) -> Result<(Vec<T>, usize), DecodeError> {
        if let Some(limit) = self.max_buffer_bytes {
            if raw.len() > limit {
                return Err(DecodeError::BufferTooLarge {
                    size: raw.len(),
                    limit,
                });
            }
        }

        let generic: Vec<Map<String, Value>> =
            serde_json::from_slice(raw).map_err(|err| DecodeError::MalformedInput {
                message: err.to_string(),
            })?;

        let mut rewritten = 0;
        let mut records = Vec::with_capacity(generic.len());
        for (index, mut record) in generic.into_iter().enumerate() {
            rewritten += self.rewrite_time_fields(&mut record);
            let typed = serde_json::from_value(Value::Object(record)).map_err(|err| {
                DecodeError::TypeConversion {
                    record: index,
                    message: err.to_string(),
                }
            })?;
            records.push(typed);
        }

        Ok((records, rewritten))
    }

    fn absorb<T: Identified>(
        &self,
        merged: &mut BTreeMap<String, T>,
        tally: &mut MergeTally,
        index: usize,
        outcome: Result<Vec<T>, DecodeError>,
    ) -> Result<(), DecodeError> {
        match outcome {
            Ok(records) => {
                tally.records += records.len();
                upsert_all(merged, records);
                Ok(())
            }
            Err(err) => match self.merge_policy {
                MergePolicy::FailFast => {
                    warn!(
                        buffer = index,
                        error = %err,
                        stage = ?err.stage(),
                        "decode_merged_failure"
                    );
                    Err(err.in_buffer(index))
                }
                MergePolicy::SkipFailedBuffers => {
                    warn!(
                        buffer = index,
                        error = %err,
                        stage = ?err.stage(),
                        "buffer_skipped"
                    );
                    tally.skipped += 1;
                    Ok(())
                }
            },
        }
    }
}

#[derive(Debug, Default)]
struct MergeTally {
    records: usize,
    skipped: usize,
}

fn finish<T>(
    merged: BTreeMap<String, T>,
    tally: MergeTally,
    buffers: usize,
    start: Instant,
) -> Vec<T> {
    let elapsed_micros = start.elapsed().as_micros();
    info!(
        buffers,
        skipped = tally.skipped,
        records = tally.records,
        unique = merged.len(),
        elapsed_micros,
        "decode_merged_success"
    );
    merged.into_values().collect()
}

fn upsert_all<T: Identified>(merged: &mut BTreeMap<String, T>, records: Vec<T>) {
    for record in records {
        merged.insert(record.identity().to_owned(), record);
    }
}

/// Merges already decoded batches by identity, last write wins.
///
/// Batches are applied in iteration order. The result is sorted by identity.
///
/// ```rust
/// use hsds_types::{merge_by_identity, Identified};
///
/// #[derive(Debug, PartialEq)]
/// struct Row(&'static str, u8);
///
/// impl Identified for Row {
///     fn identity(&self) -> &str {
///         self.0
///     }
/// }
///
/// let merged = merge_by_identity(vec![vec![Row("b", 1), Row("a", 1)], vec![Row("b", 2)]]);
/// assert_eq!(merged, vec![Row("a", 1), Row("b", 2)]);
/// ```
pub fn merge_by_identity<T, I>(batches: I) -> Vec<T>
where
    T: Identified,
    I: IntoIterator<Item = Vec<T>>,
{
    let mut merged = BTreeMap::new();
    for batch in batches {
        upsert_all(&mut merged, batch);
    }
    merged.into_values().collect()
}

fn default_decoder() -> &'static Decoder {
    static DEFAULT: OnceLock<Decoder> = OnceLock::new();
    DEFAULT.get_or_init(Decoder::default)
}

/// [`Decoder::decode_one`] with the default configuration.
pub fn decode_one<T: DeserializeOwned>(raw: &[u8]) -> Result<Vec<T>, DecodeError> {
    default_decoder().decode_one(raw)
}

/// [`Decoder::decode_merged`] with the default configuration.
pub fn decode_merged<T, B>(buffers: &[B]) -> Result<Vec<T>, DecodeError>
where
    T: DeserializeOwned + Identified,
    B: AsRef<[u8]>,
{
    default_decoder().decode_merged(buffers)
}
