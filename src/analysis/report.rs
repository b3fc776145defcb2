use std::collections::BTreeMap;
use std::f64::consts::TAU;

// ---------------------------------------------------------------------------
// Distribution – label frequencies of one batch
// ---------------------------------------------------------------------------

/// Label → count, ordered by count (descending) then label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    counts: Vec<(String, usize)>,
}

/// One wedge of the proportional chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    /// Share of the total in `[0, 1]`.
    pub fraction: f64,
    /// Start angle in radians, counter-clockwise from the positive x axis.
    pub start_angle: f64,
    /// Angular size in radians, proportional to `fraction`.
    pub sweep_angle: f64,
}

impl Slice {
    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }

    /// Chart annotation: `"<label> <pct>%"`.
    pub fn annotation(&self) -> String {
        format!("{} {}", self.label, format_percentage(self.percentage()))
    }
}

impl Distribution {
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
        for label in labels {
            *tally.entry(label).or_default() += 1;
        }
        let mut counts: Vec<(String, usize)> = tally
            .into_iter()
            .map(|(label, n)| (label.to_string(), n))
            .collect();
        // BTreeMap already sorted by label; a stable sort keeps that for ties.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Self { counts }
    }

    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Chart wedges in distribution order. Sweeps add up to a full turn.
    pub fn slices(&self) -> Vec<Slice> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut start = 0.0;
        self.counts
            .iter()
            .map(|(label, count)| {
                let fraction = *count as f64 / total as f64;
                let sweep = fraction * TAU;
                let slice = Slice {
                    label: label.clone(),
                    fraction,
                    start_angle: start,
                    sweep_angle: sweep,
                };
                start += sweep;
                slice
            })
            .collect()
    }
}

/// Percentage with one decimal place, e.g. `33.3%`.
pub fn format_percentage(pct: f64) -> String {
    format!("{pct:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_ordered_by_frequency_then_label() {
        let dist = Distribution::from_labels(["NEGATIVE", "POSITIVE", "UNKNOWN", "POSITIVE"]);
        assert_eq!(
            dist.counts(),
            [
                ("POSITIVE".to_string(), 2),
                ("NEGATIVE".to_string(), 1),
                ("UNKNOWN".to_string(), 1),
            ]
        );
        assert_eq!(dist.total(), 4);
        assert_eq!(dist.count_of("UNKNOWN"), 1);
        assert_eq!(dist.count_of("NEUTRAL"), 0);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let dist = Distribution::from_labels(["a", "b", "b", "c", "c", "c", "d"]);
        let slices = dist.slices();
        let pct: f64 = slices.iter().map(Slice::percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);

        let sweep: f64 = slices.iter().map(|s| s.sweep_angle).sum();
        assert!((sweep - TAU).abs() < 1e-9);

        let last = slices.last().unwrap();
        assert!((last.start_angle + last.sweep_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn annotations_use_one_decimal() {
        let dist = Distribution::from_labels(["POSITIVE", "NEGATIVE", "NEGATIVE"]);
        let notes: Vec<String> = dist.slices().iter().map(Slice::annotation).collect();
        assert_eq!(notes, ["NEGATIVE 66.7%", "POSITIVE 33.3%"]);
        assert_eq!(format_percentage(100.0), "100.0%");
    }

    #[test]
    fn empty_distribution_has_no_slices() {
        let dist = Distribution::from_labels(std::iter::empty());
        assert!(dist.is_empty());
        assert!(dist.slices().is_empty());
    }
}
