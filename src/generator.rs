//! Batch generation of unique synthetic users.
//!
//! Usernames are two capitalized words drawn with replacement from a word
//! list. Each user is given a random non-empty subset of the service list and
//! a default service picked from that subset.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::record::UserRecord;

/// Default bound on username draws for a single record.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Produces batches of [`UserRecord`]s from a validated word and service list.
#[derive(Debug, Clone)]
pub struct Generator {
    words: Vec<String>,
    services: Vec<String>,
    max_attempts: usize,
}

impl Generator {
    /// Builds a generator, capitalizing the words up front.
    ///
    /// # Errors
    ///
    /// Returns `EmptyWordList` or `EmptyServices` when either list is empty,
    /// `BlankWord` for a blank word, `InvalidService` for a service id that
    /// is blank or contains `,`, and `DuplicateService` when a service id is
    /// repeated.
    pub fn new<W, S>(words: &[W], services: &[S]) -> Result<Self>
    where
        W: AsRef<str>,
        S: AsRef<str>,
    {
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        if services.is_empty() {
            return Err(Error::EmptyServices);
        }
        if words.iter().any(|w| w.as_ref().trim().is_empty()) {
            return Err(Error::BlankWord);
        }

        let mut seen = HashSet::new();
        for service in services {
            let id = service.as_ref();
            if id.trim().is_empty() || id.contains(',') {
                return Err(Error::InvalidService { service: id.to_string() });
            }
            if !seen.insert(id) {
                return Err(Error::DuplicateService { service: service.as_ref().to_string() });
            }
        }

        Ok(Self {
            words: words.iter().map(|w| capitalize(w.as_ref())).collect(),
            services: services.iter().map(|s| s.as_ref().to_string()).collect(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Sets the number of draws allowed per record before giving up.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Upper bound on the number of distinct usernames this word list can form.
    #[must_use]
    pub fn username_space(&self) -> usize {
        let distinct: HashSet<&str> = self.words.iter().map(String::as_str).collect();
        distinct.len().saturating_mul(distinct.len())
    }

    /// Generates `count` records in generation order.
    ///
    /// # Errors
    ///
    /// Returns `GenerationExhausted` when `count` exceeds the username space,
    /// or when no unused username is found within the attempt bound.
    pub fn generate_batch<R>(&self, count: usize, rng: &mut R) -> Result<Vec<UserRecord>>
    where
        R: Rng + ?Sized,
    {
        let space = self.username_space();
        if count > space {
            return Err(Error::GenerationExhausted {
                produced: 0,
                requested: count,
                attempts: self.max_attempts,
            });
        }

        let mut records = Vec::with_capacity(count);
        let mut usernames = HashSet::with_capacity(count);

        for produced in 0..count {
            let username = self.unique_username(&usernames, rng).ok_or(
                Error::GenerationExhausted {
                    produced,
                    requested: count,
                    attempts: self.max_attempts,
                },
            )?;
            let (allowed_services, default_service) = self.assign_services(rng);
            debug!(%username, ?allowed_services, %default_service, "generated user");

            usernames.insert(username.clone());
            records.push(UserRecord { username, allowed_services, default_service });
        }

        info!(count = records.len(), "generated batch");
        Ok(records)
    }

    fn unique_username<R>(&self, taken: &HashSet<String>, rng: &mut R) -> Option<String>
    where
        R: Rng + ?Sized,
    {
        for attempt in 1..=self.max_attempts {
            let first = self.words.choose(rng)?;
            let second = self.words.choose(rng)?;
            let candidate = format!("{first}{second}");
            if !taken.contains(&candidate) {
                if attempt > self.max_attempts / 2 {
                    warn!(attempt, max = self.max_attempts, "username space nearly exhausted");
                }
                return Some(candidate);
            }
        }
        None
    }

    fn assign_services<R>(&self, rng: &mut R) -> (Vec<String>, String)
    where
        R: Rng + ?Sized,
    {
        let k = rng.random_range(1..=self.services.len());
        let allowed: Vec<String> = self.services.choose_multiple(rng, k).cloned().collect();
        // allowed holds k >= 1 entries.
        let default = allowed[rng.random_range(0..allowed.len())].clone();
        (allowed, default)
    }
}

/// Generates `count` records with the default attempt bound.
///
/// # Errors
///
/// See [`Generator::new`] and [`Generator::generate_batch`].
pub fn generate_batch<W, S, R>(
    count: usize,
    words: &[W],
    services: &[S],
    rng: &mut R,
) -> Result<Vec<UserRecord>>
where
    W: AsRef<str>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    Generator::new(words, services)?.generate_batch(count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SessionRng;

    const SERVICES: [&str; 3] = ["a", "b", "c"];

    #[test]
    fn capitalizes_like_title_case_word() {
        assert_eq!(capitalize("apple"), "Apple");
        assert_eq!(capitalize("bAKER"), "Baker");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn single_record_from_two_words() {
        let mut rng = SessionRng::new(1);
        let batch = generate_batch(1, &["apple", "baker"], &SERVICES, &mut rng).unwrap();
        assert_eq!(batch.len(), 1);
        let name = batch[0].username.as_str();
        assert!(["AppleApple", "AppleBaker", "BakerApple", "BakerBaker"].contains(&name));
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = SessionRng::new(1);
        let batch = generate_batch(0, &["apple"], &SERVICES, &mut rng).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn empty_services_fail_fast() {
        let mut rng = SessionRng::new(1);
        let empty: [&str; 0] = [];
        let err = generate_batch(3, &["apple"], &empty, &mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptyServices));
    }

    #[test]
    fn empty_words_fail_fast() {
        let mut rng = SessionRng::new(1);
        let empty: [&str; 0] = [];
        let err = generate_batch(3, &empty, &SERVICES, &mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptyWordList));
    }

    #[test]
    fn duplicate_service_rejected() {
        let err = Generator::new(&["apple"], &["a", "b", "a"]).unwrap_err();
        assert!(matches!(err, Error::DuplicateService { ref service } if service == "a"));
    }

    #[test]
    fn unjoinable_services_rejected() {
        let err = Generator::new(&["apple"], &["a,b"]).unwrap_err();
        assert!(matches!(err, Error::InvalidService { ref service } if service == "a,b"));

        let err = Generator::new(&["apple"], &["a", " "]).unwrap_err();
        assert!(matches!(err, Error::InvalidService { ref service } if service == " "));
    }

    #[test]
    fn blank_word_rejected() {
        let err = Generator::new(&["apple", ""], &SERVICES).unwrap_err();
        assert!(matches!(err, Error::BlankWord));
    }

    #[test]
    fn accepted_services_survive_csv_round_trip() {
        let mut rng = SessionRng::new(2);
        let batch = generate_batch(3, &["apple", "baker"], &["gemini-direct", "x"], &mut rng)
            .unwrap();
        let decoded = crate::csv_io::decode_csv(&crate::csv_io::encode_csv(&batch).unwrap());
        assert_eq!(decoded.unwrap(), batch);
    }

    #[test]
    fn fills_entire_username_space() {
        let mut rng = SessionRng::new(9);
        let batch = Generator::new(&["apple", "baker"], &SERVICES)
            .unwrap()
            .with_max_attempts(10_000)
            .generate_batch(4, &mut rng)
            .unwrap();
        let mut names: Vec<_> = batch.iter().map(|r| r.username.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["AppleApple", "AppleBaker", "BakerApple", "BakerBaker"]);
    }

    #[test]
    fn count_beyond_space_is_exhausted() {
        let mut rng = SessionRng::new(9);
        let err = generate_batch(5, &["apple", "baker"], &SERVICES, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::GenerationExhausted { produced: 0, requested: 5, .. }
        ));
    }

    #[test]
    fn case_variants_share_username_space() {
        let generator = Generator::new(&["apple", "APPLE"], &SERVICES).unwrap();
        assert_eq!(generator.username_space(), 1);
    }

    #[test]
    fn retry_bound_reports_progress() {
        // "1"+"11" and "11"+"1" collide, so only 3 of the 4 pairs are distinct.
        let mut rng = SessionRng::new(3);
        let generator = Generator::new(&["1", "11"], &SERVICES).unwrap().with_max_attempts(200);
        assert_eq!(generator.username_space(), 4);
        let err = generator.generate_batch(4, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::GenerationExhausted { produced: 3, requested: 4, attempts: 200 }
        ));
    }

    #[test]
    fn same_seed_same_batch() {
        let words = ["apple", "baker", "candy", "delta"];
        let a = generate_batch(10, &words, &SERVICES, &mut SessionRng::new(77)).unwrap();
        let b = generate_batch(10, &words, &SERVICES, &mut SessionRng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn services_respect_invariants() {
        let words = ["apple", "baker", "candy", "delta", "eagle"];
        let batch = generate_batch(25, &words, &SERVICES, &mut SessionRng::new(5)).unwrap();
        for record in &batch {
            assert!(!record.allowed_services.is_empty());
            assert!(record.allowed_services.len() <= SERVICES.len());
            assert!(record.duplicate_service().is_none());
            assert!(record.default_is_allowed());
            assert!(record.allowed_services.iter().all(|s| SERVICES.contains(&s.as_str())));
        }
    }
}
