use super::{AudioFilter, Filter};

/// Ordered sequence of filters queued on a media handle
///
/// Filters are stored in the order they were added. [`FilterQueue::by_priority`]
/// yields them the way they are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQueue {
    filters: Vec<AudioFilter>,
}

impl FilterQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        FilterQueue::default()
    }

    /// Append a filter
    pub fn push(&mut self, filter: AudioFilter) {
        self.filters.push(filter);
    }

    /// Filters in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, AudioFilter> {
        self.filters.iter()
    }

    /// Filters sorted by descending priority; insertion order breaks ties
    pub fn by_priority(&self) -> Vec<&AudioFilter> {
        let mut sorted: Vec<&AudioFilter> = self.filters.iter().collect();
        sorted.sort_by_key(|f| std::cmp::Reverse(f.priority()));
        sorted
    }

    /// Number of queued filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if no filters are queued
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<'a> IntoIterator for &'a FilterQueue {
    type Item = &'a AudioFilter;
    type IntoIter = std::slice::Iter<'a, AudioFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeCode;
    use crate::filter::{ClipFilter, MetadataFilter, ResampleFilter};

    #[test]
    fn test_priority_order_is_stable() {
        let mut queue = FilterQueue::new();
        queue.push(ResampleFilter::new(44100).into());
        queue.push(ClipFilter::new(TimeCode::new(0, 0, 5, 0), None).into());
        queue.push(MetadataFilter::new(None).into());

        let names: Vec<&str> = queue.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["resample", "clip", "metadata"]);

        let names: Vec<&str> = queue.by_priority().into_iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["metadata", "resample", "clip"]);
    }
}
