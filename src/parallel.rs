//! Data-parallel map over checked offsets.
//!
//! Each worker owns one contiguous chunk and reports it back over a channel
//! tagged with its chunk number; chunks are stitched back in offset order.

use crossbeam_channel::unbounded;

/// Evaluates `eval` at every offset, preserving order.
///
/// Falls back to a plain loop when one worker is requested or there are too
/// few offsets to give each worker at least two.
pub(crate) fn map_offsets<F>(offsets: &[usize], threads: usize, eval: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync,
{
    if threads <= 1 || offsets.len() < 2 * threads {
        return offsets.iter().map(|&k| eval(k)).collect();
    }

    let chunk_len = offsets.len().div_ceil(threads);
    let (tx, rx) = unbounded::<(usize, Vec<f64>)>();
    let eval = &eval;

    std::thread::scope(|scope| {
        for (chunk, part) in offsets.chunks(chunk_len).enumerate() {
            let tx = tx.clone();
            scope.spawn(move || {
                log::trace!("chunk {chunk}: {} offsets", part.len());
                let values = part.iter().map(|&k| eval(k)).collect();
                let _ = tx.send((chunk, values));
            });
        }
    });
    drop(tx);

    let mut chunks: Vec<(usize, Vec<f64>)> = rx.iter().collect();
    chunks.sort_unstable_by_key(|(chunk, _)| *chunk);
    let mut out = Vec::with_capacity(offsets.len());
    for (_, values) in chunks {
        out.extend(values);
    }
    out
}
