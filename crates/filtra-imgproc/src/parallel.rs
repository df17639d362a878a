use std::ops::Range;

use thiserror::Error;

/// Default thread count when available parallelism cannot be queried.
const DEFAULT_THREADS: usize = 4;

/// Upper bound on auto-detected thread counts to avoid oversubscription.
const MAX_AUTO_THREADS: usize = 64;

/// Upper bound accepted for an explicit thread-count hint.
const MAX_THREAD_HINT: usize = 1024;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride must divide the buffer evenly.
    #[error("buffer length {0} is not a multiple of the row stride {1}")]
    InvalidRowStride(usize, usize),
}

/// Divide `rows` into `num_chunks` contiguous ranges of near-equal size.
///
/// The ranges are disjoint, gap-free and cover `0..rows` exactly; their
/// sizes differ by at most one row, with the first `rows % num_chunks`
/// ranges taking the extra row. The partition is deterministic for a given
/// `(rows, num_chunks)` pair.
///
/// `num_chunks` is clamped to `1..=rows`, so every returned range is
/// non-empty.
///
/// # Examples
///
/// ```
/// use filtra_imgproc::parallel::partition_rows;
///
/// let ranges = partition_rows(10, 4);
/// assert_eq!(ranges, vec![0..3, 3..6, 6..8, 8..10]);
/// ```
pub fn partition_rows(rows: usize, num_chunks: usize) -> Vec<Range<usize>> {
    let num_chunks = num_chunks.clamp(1, rows.max(1));
    let base = rows / num_chunks;
    let rem = rows % num_chunks;

    let mut ranges = Vec::with_capacity(num_chunks);
    let mut cur = 0;
    for i in 0..num_chunks {
        let take = base + usize::from(i < rem);
        ranges.push(cur..cur + take);
        cur += take;
    }
    ranges
}

/// Process the rows of a flat row-major buffer on a fixed number of threads.
///
/// The buffer is split into one disjoint mutable chunk per row range from
/// [`partition_rows`], and `f(range, chunk)` runs once per chunk on a
/// thread pool sized for this call. Each worker writes only into its own
/// chunk, so no synchronization is needed on the shared buffer, and the
/// call does not return until every worker has finished.
///
/// `num_threads` is clamped to the number of rows; a single thread runs
/// the work serially on the caller's thread without building a pool.
pub fn par_process_rows<T, F>(
    dst: &mut [T],
    row_stride: usize,
    num_threads: usize,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(Range<usize>, &mut [T]) + Send + Sync,
{
    if num_threads == 0 {
        return Err(ParallelError::InvalidThreadCount(num_threads));
    }
    if row_stride == 0 || dst.len() % row_stride != 0 {
        return Err(ParallelError::InvalidRowStride(dst.len(), row_stride));
    }

    let rows = dst.len() / row_stride;
    let ranges = partition_rows(rows, num_threads);

    if ranges.len() == 1 {
        f(0..rows, dst);
        return Ok(());
    }

    // split the buffer into one disjoint chunk per range
    let mut jobs = Vec::with_capacity(ranges.len());
    let mut rest = dst;
    for range in ranges {
        let (chunk, tail) = rest.split_at_mut(range.len() * row_stride);
        jobs.push((range, chunk));
        rest = tail;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.len())
        .build()
        .map_err(|e| ParallelError::BuildError(e.to_string()))?;

    // the scope joins all spawned workers before returning
    pool.scope(|s| {
        for (range, chunk) in jobs {
            let f = &f;
            s.spawn(move |_| f(range, chunk));
        }
    });

    Ok(())
}

/// Resolve the number of worker threads to use.
///
/// An explicit hint in `1..=1024` wins; otherwise the available hardware
/// parallelism is used (default 4 when it cannot be queried), capped at 64.
pub fn resolve_thread_count(hint: Option<usize>) -> usize {
    if let Some(t) = hint {
        if (1..=MAX_THREAD_HINT).contains(&t) {
            return t;
        }
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(DEFAULT_THREADS)
        .min(MAX_AUTO_THREADS)
}
