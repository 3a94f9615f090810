//! Population utilities.

use super::EvolutionError;

/// Generate `n` items from `factory`.
///
/// With `unique`, an item equal to one already collected is discarded and
/// redrawn. All items share one budget of `n * max_attempts` draws; once it
/// is spent the call fails with [`EvolutionError::DuplicateExhausted`].
pub fn generate<T, F>(
    n: usize,
    mut factory: F,
    unique: bool,
    max_attempts: usize,
) -> Result<Vec<T>, EvolutionError>
where
    T: PartialEq,
    F: FnMut() -> Result<T, EvolutionError>,
{
    let mut items = Vec::with_capacity(n);

    if !unique {
        for _ in 0..n {
            items.push(factory()?);
        }
        return Ok(items);
    }

    let budget = n.saturating_mul(max_attempts.max(1));
    let mut attempts = 0;
    while items.len() < n {
        if attempts >= budget {
            return Err(EvolutionError::DuplicateExhausted {
                wanted: n,
                attempts,
            });
        }
        attempts += 1;

        let item = factory()?;
        if !items.contains(&item) {
            items.push(item);
        }
    }

    if attempts > n {
        log::trace!("generate: {} duplicate draws discarded", attempts - n);
    }

    Ok(items)
}
