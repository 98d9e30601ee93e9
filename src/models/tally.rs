use std::collections::HashMap;

use rust_decimal::Decimal;

/// Values a `Tally` can sum without panicking on overflow
pub trait Accumulate: Copy {
    fn checked_accumulate(self, rhs: Self) -> Option<Self>;
}

impl Accumulate for usize {
    fn checked_accumulate(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs)
    }
}

impl Accumulate for Decimal {
    fn checked_accumulate(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs)
    }
}

/// Keyed accumulator that remembers the order keys were first seen in
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<V> {
    entries: Vec<(String, V)>,
    /// Position of each key in `entries`
    positions: HashMap<String, usize>,
}

impl<V> Tally<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.positions.get(key).map(|&position| &self.entries[position].1)
    }

    /// Iterate entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Accumulate> Tally<V> {
    /// Add `value` to the running total for `key`, creating the entry if needed
    /// Returns false and leaves the total unchanged if the sum would overflow
    pub fn add(&mut self, key: &str, value: V) -> bool {
        match self.positions.get(key) {
            Some(&position) => {
                let entry = &mut self.entries[position].1;
                match entry.checked_accumulate(value) {
                    Some(total) => {
                        *entry = total;
                        true
                    }
                    None => false,
                }
            }
            None => {
                self.positions.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), value));
                true
            }
        }
    }
}

impl<V: PartialOrd> Tally<V> {
    /// Entry with the largest value
    /// An entry only takes the lead by being strictly greater, so ties go to
    /// whichever key was seen first
    pub fn leader(&self) -> Option<(&str, &V)> {
        let mut best: Option<(&str, &V)> = None;

        for (key, value) in self.iter() {
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((key, value));
            }
        }

        best
    }
}

impl<V> Default for Tally<V> {
    fn default() -> Self {
        Self::new()
    }
}
