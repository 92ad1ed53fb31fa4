use std::{
    collections::HashMap,
    fmt::{self, Debug, Display},
};

use crate::{
    error::{Error, Result},
    util::argmax,
};

use super::Hashable;

/// A sparse table of action values, one fixed-size row of `A` values per observed state
///
/// Rows are materialized lazily: a state has no row until [`ensure`](Self::ensure) is called for
/// it, at which point it receives `A` zeros. Every read and write on a state that was never
/// ensured fails with [`Error::UnknownState`] rather than implicitly creating the row.
#[derive(Debug, Clone)]
pub struct ValueTable<S: Hashable, const A: usize> {
    rows: HashMap<S, [f64; A]>,
}

impl<S: Hashable, const A: usize> Default for ValueTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Hashable, const A: usize> ValueTable<S, A> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Create a zeroed row for `state` unless it already has one
    pub fn ensure(&mut self, state: S) {
        self.rows.entry(state).or_insert([0.0; A]);
    }

    pub fn contains(&self, state: &S) -> bool {
        self.rows.contains_key(state)
    }

    /// Get the value of `action` in `state`
    pub fn get(&self, state: &S, action: usize) -> Result<f64> {
        check_action::<A>(action)?;
        Ok(self.row(state)?[action])
    }

    /// Overwrite the value of `action` in `state`, leaving the rest of the row untouched
    pub fn set(&mut self, state: &S, action: usize, value: f64) -> Result<()> {
        check_action::<A>(action)?;
        let row = self.rows.get_mut(state).ok_or(Error::UnknownState)?;
        row[action] = value;
        Ok(())
    }

    /// The largest action value in `state`
    pub fn max_value(&self, state: &S) -> Result<f64> {
        let row = self.row(state)?;
        Ok(row[argmax(row)])
    }

    /// The action with the largest value in `state`, ties broken by the lowest index
    pub fn best_action(&self, state: &S) -> Result<usize> {
        Ok(argmax(self.row(state)?))
    }

    /// The full row of action values for `state`
    pub fn row(&self, state: &S) -> Result<&[f64; A]> {
        self.rows.get(state).ok_or(Error::UnknownState)
    }

    /// Number of materialized states
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &[f64; A])> {
        self.rows.iter()
    }
}

fn check_action<const A: usize>(action: usize) -> Result<()> {
    if action < A {
        Ok(())
    } else {
        Err(Error::InvalidAction {
            action,
            num_actions: A,
        })
    }
}

/// One line per state, sorted by state
impl<S, const A: usize> Display for ValueTable<S, A>
where
    S: Hashable + Ord + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = self.rows.iter().collect::<Vec<_>>();
        rows.sort_unstable_by_key(|(state, _)| **state);
        for (state, values) in rows {
            writeln!(f, "{state:?} : {values:?}")?;
        }
        Ok(())
    }
}
