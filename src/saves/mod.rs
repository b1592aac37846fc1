//! Contains the various places the best score can be kept.
//!
//! The game only ever persists one thing: the lowest number of tries anyone has won in on this machine. The
//! [`ScoreStore`] trait is the whole interface to that, and [`BestScore`] layers the "only save improvements" rule on
//! top so no individual store has to get it right.
//!
//! - [`Memory`] keeps it in memory, for tests and for playing without saving.
//! - [`fs::KeyFile`] keeps it in a small key/value file on disk.

pub mod fs;

use crate::error::Result;

/// A standard interface to everywhere a best score can be loaded from and saved to.
pub trait ScoreStore {
    /// Load the stored best score, if any.
    ///
    /// A store which exists but holds no (usable) score returns `Ok(None)`. Errors are reserved for the store itself
    /// being unreachable or unreadable.
    fn load(&self) -> Result<Option<u32>>;

    /// Overwrite the stored best score.
    ///
    /// This does *not* check whether `tries` is actually an improvement; see [`BestScore::record_win`].
    fn save(&mut self, tries: u32) -> Result<()>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> Result<Option<u32>> {
        (**self).load()
    }

    fn save(&mut self, tries: u32) -> Result<()> {
        (**self).save(tries)
    }
}

/// Keeps the score in memory. Nothing survives the process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory(Option<u32>);

impl Memory {
    pub fn new() -> Self {
        Self(None)
    }

    /// A store that already holds a score, as if a previous game had saved it.
    pub fn with(best: u32) -> Self {
        Self(Some(best))
    }
}

impl ScoreStore for Memory {
    fn load(&self) -> Result<Option<u32>> {
        Ok(self.0)
    }

    fn save(&mut self, tries: u32) -> Result<()> {
        self.0 = Some(tries);
        Ok(())
    }
}

/// The best score, as loaded from a [`ScoreStore`] at startup, plus the store to write improvements back to.
#[derive(Debug)]
pub struct BestScore<S: ScoreStore> {
    best: Option<u32>,
    store: S,
}

impl<S: ScoreStore> BestScore<S> {
    /// Load the current best from the store.
    pub fn open(store: S) -> Result<Self> {
        let best = store.load()?;
        log::debug!("loaded best score {:?}", best);
        Ok(Self { best, store })
    }

    pub fn get(&self) -> Option<u32> {
        self.best
    }

    /// Whether winning in `tries` would beat the current best.
    pub fn would_improve(&self, tries: u32) -> bool {
        match self.best {
            Some(best) => tries < best,
            None => true,
        }
    }

    /// A game was just won in `tries`. If that's strictly better than the best so far (or there wasn't one), it
    /// becomes the new best and is saved.
    ///
    /// Returns whether the best changed. The in-memory best is updated even if saving fails; the error is returned
    /// so the caller can tell the player, but nothing retries it.
    pub fn record_win(&mut self, tries: u32) -> Result<bool> {
        if !self.would_improve(tries) {
            return Ok(false);
        }
        log::info!("new best score: {} (was {:?})", tries, self.best);
        self.best = Some(tries);
        if let Err(e) = self.store.save(tries) {
            log::warn!("failed to save best score: {}", e);
            return Err(e);
        }
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;

    use super::*;

    /// Accepts loads, refuses every save.
    struct ReadOnly(Option<u32>);

    impl ScoreStore for ReadOnly {
        fn load(&self) -> Result<Option<u32>> {
            Ok(self.0)
        }

        fn save(&mut self, _tries: u32) -> Result<()> {
            Err("read-only".into())
        }
    }

    #[test]
    fn memory_starts_empty() {
        assert_eq!(Memory::new().load().unwrap(), None);
        assert_eq!(Memory::default(), Memory::new());
    }

    #[test]
    fn memory_roundtrip() {
        let mut mem = Memory::new();
        mem.save(7).unwrap();
        assert_eq!(mem.load().unwrap(), Some(7));
        mem.save(9).unwrap();
        assert_eq!(mem.load().unwrap(), Some(9));
    }

    #[test]
    fn first_win_always_recorded() {
        let mut best = BestScore::open(Memory::new()).unwrap();
        assert_eq!(best.get(), None);
        assert!(best.record_win(4).unwrap());
        assert_eq!(best.get(), Some(4));
        assert_eq!(best.store().load().unwrap(), Some(4));
    }

    #[test]
    fn only_strictly_lower_replaces() {
        let mut best = BestScore::open(Memory::new()).unwrap();
        assert!(best.record_win(4).unwrap());
        assert!(!best.record_win(6).unwrap());
        assert_eq!(best.get(), Some(4));
        assert!(!best.record_win(4).unwrap());
        assert_eq!(best.get(), Some(4));
        assert!(best.record_win(2).unwrap());
        assert_eq!(best.get(), Some(2));
        assert_eq!(best.into_store().load().unwrap(), Some(2));
    }

    #[test]
    fn existing_best_is_loaded() {
        let mut best = BestScore::open(Memory::with(3)).unwrap();
        assert_eq!(best.get(), Some(3));
        assert!(!best.would_improve(3));
        assert!(best.would_improve(2));
        assert!(!best.record_win(5).unwrap());
        assert_eq!(best.store().load().unwrap(), Some(3));
    }

    #[test]
    fn failed_save_still_updates_memory() {
        let mut best = BestScore::open(ReadOnly(None)).unwrap();
        let res = best.record_win(5);
        assert!(matches!(res, Err(Error::Bare(_))));
        assert_eq!(best.get(), Some(5));
        // a worse score afterwards is still judged against the in-memory best, and never hits the store
        assert!(!best.record_win(6).unwrap());
    }
}
