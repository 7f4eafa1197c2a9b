//! Small numeric helpers shared by the aggregators.

use reel_common::ViewEvent;
use std::collections::HashMap;

/// A genre with how many times it appeared.
pub type GenreCount = (String, u32);

/// Round to `places` decimals, ties to even (`7.25` becomes `7.2`).
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Running mean over the rated events of a bucket. Unrated events are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingAccumulator {
    sum: f64,
    rated: u32,
}

impl RatingAccumulator {
    /// Record the event's rating, if it has one.
    pub fn add(&mut self, event: &ViewEvent) {
        if let Some(rating) = event.rating {
            self.sum += rating;
            self.rated += 1;
        }
    }

    /// Exact mean, `None` without rated events.
    pub fn mean(&self) -> Option<f64> {
        (self.rated > 0).then(|| self.sum / f64::from(self.rated))
    }

    /// Mean rounded to one decimal.
    pub fn rounded_mean(&self) -> Option<f64> {
        self.mean().map(|m| round_to(m, 1))
    }
}

impl<'a> FromIterator<&'a ViewEvent> for RatingAccumulator {
    fn from_iter<I: IntoIterator<Item = &'a ViewEvent>>(iter: I) -> Self {
        let mut acc = Self::default();
        for event in iter {
            acc.add(event);
        }
        acc
    }
}

/// Genre frequency counter that remembers first-seen order.
#[derive(Debug, Clone, Default)]
pub struct GenreTally {
    counts: Vec<GenreCount>,
    index: HashMap<String, usize>,
}

impl GenreTally {
    /// Count every genre token of `event`.
    pub fn add(&mut self, event: &ViewEvent) {
        for genre in event.genres() {
            match self.index.get(genre) {
                Some(&slot) => self.counts[slot].1 += 1,
                None => {
                    self.index.insert(genre.to_string(), self.counts.len());
                    self.counts.push((genre.to_string(), 1));
                }
            }
        }
    }

    /// The `n` most frequent genres; ties keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<GenreCount> {
        let mut ranked = self.counts.clone();
        // sort_by is stable, so equal counts stay in insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<'a> FromIterator<&'a ViewEvent> for GenreTally {
    fn from_iter<I: IntoIterator<Item = &'a ViewEvent>>(iter: I) -> Self {
        let mut tally = Self::default();
        for event in iter {
            tally.add(event);
        }
        tally
    }
}
