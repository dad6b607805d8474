// Status rotation - picks which configured status is shown next

use rand::Rng;

/// Owns the rotation cursor. `None` means nothing has been shown yet.
#[derive(Debug, Clone, Default)]
pub struct StatusRotator {
    randomize: bool,
    cursor: Option<usize>,
}

impl StatusRotator {
    pub fn new(randomize: bool) -> Self {
        Self {
            randomize,
            cursor: None,
        }
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Index of the next status for a list of `len` entries.
    ///
    /// Randomized mode never repeats the previous index unless the list has a
    /// single entry.
    pub fn next_index<R: Rng>(&self, len: usize, rng: &mut R) -> Option<usize> {
        if len == 0 {
            return None;
        }

        if !self.randomize {
            return Some(self.cursor.map_or(0, |i| (i + 1) % len));
        }

        if len == 1 {
            return Some(0);
        }

        loop {
            let index = rng.random_range(0..len);
            if Some(index) != self.cursor {
                return Some(index);
            }
        }
    }

    /// Pick, render and submit the next status.
    ///
    /// The cursor only moves when `submit` succeeds. Returns the index that
    /// was shown, or `None` for an empty list.
    pub fn rotate<R, F, E>(
        &mut self,
        statuses: &[String],
        rng: &mut R,
        submit: F,
    ) -> Result<Option<usize>, E>
    where
        R: Rng,
        F: FnOnce(&str) -> Result<(), E>,
    {
        let Some(index) = self.next_index(statuses.len(), rng) else {
            return Ok(None);
        };

        submit(&statuses[index])?;
        self.cursor = Some(index);
        Ok(Some(index))
    }
}
