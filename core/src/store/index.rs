use std::collections::BTreeMap;

/// Incrementally maintained label -> live-item count map.
///
/// Every mutation decrements the labels the item used to carry and
/// increments the ones it carries now, so counts stay exact without scanning
/// the collection. Entries are pruned the moment their count reaches zero;
/// listings never show stale labels.
#[derive(Debug)]
pub(crate) struct LabelIndex<T: Ord> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord + Clone> LabelIndex<T> {
    pub(crate) fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    pub(crate) fn increment(&mut self, label: T) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    pub(crate) fn decrement(&mut self, label: &T) {
        if let Some(count) = self.counts.get_mut(label) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(label);
            }
        }
    }

    /// Entries ordered by descending count, then ascending label.
    pub(crate) fn entries(&self) -> Vec<(T, usize)> {
        let mut out: Vec<_> = self
            .counts
            .iter()
            .map(|(label, count)| (label.clone(), *count))
            .collect();

        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out
    }

    #[cfg(test)]
    pub(crate) fn count(&self, label: &T) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }
}
