use rand::seq::IndexedRandom as _;
use std::{fmt, sync::Arc};

use super::UserAgentFilter;

/// A User Agent string paired with its popularity rank.
///
/// Rank is the position within the catalog, 0 = most popular.
/// Entries are never mutated once the catalog is constructed.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    ua: Arc<str>,
    rank: usize,
}

impl CatalogEntry {
    /// returns the User Agent string of this entry.
    #[must_use]
    pub fn ua_str(&self) -> &str {
        &self.ua
    }

    /// returns the popularity rank of this entry, 0 = most popular.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }
}

/// Ranked, immutable catalog of User Agent strings.
///
/// Constructed once from an ordered sequence of User Agent strings
/// (most popular first) and read-only thereafter, so it can be shared
/// freely across callers. Uniqueness of the strings is neither
/// guaranteed nor required.
#[derive(Debug, Default)]
pub struct UserAgentCatalog {
    entries: Vec<CatalogEntry>,
}

impl UserAgentCatalog {
    /// returns the entry at the given rank, if any.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&CatalogEntry> {
        self.entries.get(rank)
    }

    /// returns the number of entries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// returns `true` if the catalog contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Iterate over all User Agent strings in rank order.
    pub fn iter_ua_str(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.ua_str())
    }

    /// The most popular User Agent string of the catalog.
    ///
    /// Returns [`SelectError::EmptyCatalog`] if the catalog has zero entries.
    pub fn top_user_agent(&self) -> Result<&str, SelectError> {
        self.entries
            .first()
            .map(|entry| entry.ua_str())
            .ok_or(SelectError::EmptyCatalog)
    }

    /// The `n` most popular User Agent strings of the catalog, in rank order.
    ///
    /// An `n` exceeding the catalog size is not an error:
    /// the whole catalog is returned in that case. Requesting anything
    /// from a catalog with zero entries returns [`SelectError::EmptyCatalog`].
    pub fn top_n_user_agents(&self, n: usize) -> Result<Vec<&str>, SelectError> {
        if self.entries.is_empty() {
            return Err(SelectError::EmptyCatalog);
        }
        Ok(self.iter_ua_str().take(n).collect())
    }

    /// Select a User Agent string uniformly at random among the entries
    /// matching the given filter.
    ///
    /// Returns [`SelectError::NoMatch`] if no entry satisfies
    /// every filter constraint.
    pub fn random(&self, filter: &UserAgentFilter) -> Result<&str, SelectError> {
        self.random_with_rng(&mut rand::rng(), filter)
    }

    /// Select a User Agent string uniformly at random among the entries
    /// matching the given filter, driving the choice with the given RNG.
    ///
    /// This is the deterministic sibling of [`random`](Self::random):
    /// hand it a seeded RNG to make selection reproducible.
    pub fn random_with_rng<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
        filter: &UserAgentFilter,
    ) -> Result<&str, SelectError> {
        let candidates: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| filter.matches(entry.ua_str()))
            .map(|(index, _)| index)
            .collect();

        match candidates
            .choose(rng)
            .and_then(|index| self.entries.get(*index))
        {
            Some(entry) => {
                tracing::trace!(
                    ua = entry.ua_str(),
                    rank = entry.rank,
                    "selected random user agent",
                );
                Ok(entry.ua_str())
            }
            None => {
                tracing::debug!(?filter, "no user agent matched the given filter");
                Err(SelectError::NoMatch)
            }
        }
    }
}

impl<S> FromIterator<S> for UserAgentCatalog
where
    S: Into<Arc<str>>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (lb, _) = iter.size_hint();

        let mut catalog = Self {
            entries: Vec::with_capacity(lb),
        };

        for ua in iter {
            let rank = catalog.entries.len();
            catalog.entries.push(CatalogEntry {
                ua: ua.into(),
                rank,
            });
        }

        catalog
    }
}

/// error that can be returned when selecting
/// a User Agent string from a [`UserAgentCatalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The catalog contains no entries at all.
    EmptyCatalog,
    /// No catalog entry satisfied the given filter combination.
    ///
    /// A business condition rather than a fault: the caller is expected
    /// to relax the filter or treat the combination as nonexistent.
    NoMatch,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "user agent catalog is empty"),
            Self::NoMatch => write!(f, "no matching user agent found"),
        }
    }
}

impl std::error::Error for SelectError {}
