//! Chunked processing of identifier lists.

/// Splits `items` into consecutive chunks of at most `size` elements and passes them to
/// `on_batch` one at a time, in order.
///
/// Stops at the first error returned by `on_batch` and returns it; the chunks after it are
/// not processed and the side effects of the chunks before it are not undone.
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use mssql_uuid::{batch, Uuid};
///
/// let ids = vec![Uuid::NIL; 10];
/// let mut sizes = Vec::new();
/// batch(&ids, 3, |chunk| {
///     sizes.push(chunk.len());
///     Ok::<_, std::convert::Infallible>(())
/// })?;
/// assert_eq!(sizes, [3, 3, 3, 1]);
/// # Ok::<(), std::convert::Infallible>(())
/// ```
pub fn batch<T, E>(
    items: &[T],
    size: usize,
    mut on_batch: impl FnMut(&[T]) -> Result<(), E>,
) -> Result<(), E> {
    assert!(size > 0, "batch size must be positive");
    for chunk in items.chunks(size) {
        on_batch(chunk)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::batch;
    use crate::Uuid;

    fn prepare_ids(n: u128) -> Vec<Uuid> {
        (0..n).map(Uuid::from).collect()
    }

    /// Passes contiguous chunks in order
    #[test]
    fn passes_contiguous_chunks_in_order() {
        let ids = prepare_ids(10);
        let mut seen = Vec::new();
        batch(&ids, 3, |chunk| {
            seen.push(chunk.to_vec());
            Ok::<_, ()>(())
        })
        .unwrap();

        assert_eq!(
            seen.iter().map(Vec::len).collect::<Vec<_>>(),
            [3, 3, 3, 1]
        );
        assert_eq!(seen.concat(), ids);
    }

    /// Stops at first error
    #[test]
    fn stops_at_first_error() {
        let ids = prepare_ids(10);
        let mut calls = 0;
        let result = batch(&ids, 3, |chunk| {
            calls += 1;
            if calls == 2 {
                Err(format!("failed at {}", chunk[0]))
            } else {
                Ok(())
            }
        });

        assert_eq!(calls, 2);
        assert_eq!(
            result,
            Err("failed at 00000000-0000-0000-0000-000000000003".to_owned())
        );
    }

    /// Handles empty and undersized inputs
    #[test]
    fn handles_empty_and_undersized_inputs() {
        let mut calls = Vec::new();
        batch(&prepare_ids(0), 3, |chunk| {
            calls.push(chunk.len());
            Ok::<_, ()>(())
        })
        .unwrap();
        assert!(calls.is_empty());

        batch(&prepare_ids(2), 3, |chunk| {
            calls.push(chunk.len());
            Ok::<_, ()>(())
        })
        .unwrap();
        batch(&prepare_ids(6), 3, |chunk| {
            calls.push(chunk.len());
            Ok::<_, ()>(())
        })
        .unwrap();
        assert_eq!(calls, [2, 3, 3]);
    }

    /// Panics on zero size
    #[test]
    #[should_panic(expected = "batch size must be positive")]
    fn panics_on_zero_size() {
        let _ = batch(&prepare_ids(1), 0, |_| Ok::<_, ()>(()));
    }
}
