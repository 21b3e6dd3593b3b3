//! Accumulating validation results.
//!
//! Unlike `Result`, combining two [`Validation`]s keeps every failure
//! instead of stopping at the first one.

/// Non-empty, ordered list of failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failures<E> {
    first: E,
    rest: Vec<E>,
}

impl<E> Failures<E> {
    pub fn new(first: E) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        std::iter::once(&self.first).chain(&self.rest)
    }

    /// Append all of `other` after the failures already held.
    pub fn concat(mut self, other: Failures<E>) -> Self {
        self.rest.push(other.first);
        self.rest.extend(other.rest);
        self
    }

    pub fn into_vec(self) -> Vec<E> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.first);
        all.extend(self.rest);
        all
    }
}

/// Either a success value or at least one failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<E, T> {
    Valid(T),
    Invalid(Failures<E>),
}

impl<E, T> Validation<E, T> {
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    pub fn invalid(error: E) -> Self {
        Self::Invalid(Failures::new(error))
    }

    /// Pass with `value` when `condition` holds, fail with `error` otherwise.
    pub fn check(condition: bool, value: T, error: E) -> Self {
        if condition {
            Self::valid(value)
        } else {
            Self::invalid(error)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<E, U> {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(failures) => Validation::Invalid(failures),
        }
    }

    /// Merge with another validation.
    ///
    /// Both sides are always considered: failures are concatenated in
    /// order (`self` first), and two successes are joined with `f`.
    pub fn combine<U, V>(
        self,
        other: Validation<E, U>,
        f: impl FnOnce(T, U) -> V,
    ) -> Validation<E, V> {
        match (self, other) {
            (Self::Valid(left), Validation::Valid(right)) => Validation::Valid(f(left, right)),
            (Self::Valid(_), Validation::Invalid(failures))
            | (Self::Invalid(failures), Validation::Valid(_)) => Validation::Invalid(failures),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.concat(right))
            }
        }
    }

    pub fn fold<R>(
        self,
        on_invalid: impl FnOnce(Failures<E>) -> R,
        on_valid: impl FnOnce(T) -> R,
    ) -> R {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(failures) => on_invalid(failures),
        }
    }
}
