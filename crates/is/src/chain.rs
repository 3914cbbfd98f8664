//! Error chains and sentinel matching.

use std::error::Error;
use std::io;
use std::iter;

/// Anything that can be viewed as a `'static` error trait object.
///
/// Implemented for every concrete error type and for the common trait
/// objects, so `&io::Error`, `&dyn Error` and `anyhow::Error::as_ref()` can
/// all be passed as the actual error of an assertion. Boxed errors are
/// passed as `&*boxed`.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + 'static> AsDynError for E {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + 'static {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + 'static {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + Sync + 'static {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// Iterates over `err` and every error it wraps, outermost first.
///
/// An `io::Error` carrying a custom payload yields that payload as the next
/// link. `io::Error::source()` alone would skip it.
pub fn chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    iter::successors(Some(err), next_link)
}

fn next_link<'a>(link: &&'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    let link: &'a (dyn Error + 'static) = *link;
    if let Some(payload) = link.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
        let payload: &'a (dyn Error + 'static) = payload;
        return Some(payload);
    }
    link.source()
}

/// Whether `actual` is, or transitively wraps, an error equal to `expected`.
pub fn matches<E>(expected: &E, actual: &(dyn Error + 'static)) -> bool
where
    E: Error + PartialEq + 'static,
{
    chain(actual).any(|link| link.downcast_ref::<E>() == Some(expected))
}
