use serde::Serialize;

pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ClassMetrics {
    fn new(precision: f64, recall: f64) -> Self {
        Self {
            precision,
            recall,
            f1: safe_div(2.0 * precision * recall, precision + recall),
        }
    }
}

/// Binary confusion counts for the positive/negative review task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Confusion {
    pub true_pos: usize,
    pub true_neg: usize,
    pub false_pos: usize,
    pub false_neg: usize,
}

impl Confusion {
    pub fn record(&mut self, is_positive: bool, predicted_positive: bool) {
        match (is_positive, predicted_positive) {
            (true, true) => self.true_pos += 1,
            (true, false) => self.false_neg += 1,
            (false, true) => self.false_pos += 1,
            (false, false) => self.true_neg += 1,
        }
    }

    pub fn samples(&self) -> usize {
        self.true_pos + self.true_neg + self.false_pos + self.false_neg
    }

    pub fn accuracy(&self) -> f64 {
        safe_div(
            (self.true_pos + self.true_neg) as f64,
            self.samples() as f64,
        )
    }

    pub fn positive_metrics(&self) -> ClassMetrics {
        ClassMetrics::new(
            safe_div(
                self.true_pos as f64,
                (self.true_pos + self.false_pos) as f64,
            ),
            safe_div(
                self.true_pos as f64,
                (self.true_pos + self.false_neg) as f64,
            ),
        )
    }

    pub fn negative_metrics(&self) -> ClassMetrics {
        ClassMetrics::new(
            safe_div(
                self.true_neg as f64,
                (self.true_neg + self.false_neg) as f64,
            ),
            safe_div(
                self.true_neg as f64,
                (self.true_neg + self.false_pos) as f64,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_div_guards_zero_denominators() {
        assert_eq!(safe_div(1.0, 0.0), 0.0);
        assert_eq!(safe_div(3.0, 2.0), 1.5);
    }

    #[test]
    fn counts_land_in_the_right_cells() {
        let mut confusion = Confusion::default();
        confusion.record(true, true);
        confusion.record(true, false);
        confusion.record(false, true);
        confusion.record(false, false);

        assert_eq!(confusion.true_pos, 1);
        assert_eq!(confusion.false_neg, 1);
        assert_eq!(confusion.false_pos, 1);
        assert_eq!(confusion.true_neg, 1);
        assert_eq!(confusion.samples(), 4);
        assert_eq!(confusion.accuracy(), 0.5);
    }

    #[test]
    fn metrics_match_hand_computed_fixture() {
        // TP=6, FP=2, TN=8, FN=4.
        let confusion = Confusion {
            true_pos: 6,
            true_neg: 8,
            false_pos: 2,
            false_neg: 4,
        };

        let positives = confusion.positive_metrics();
        assert!((positives.precision - 0.75).abs() < 1e-9);
        assert!((positives.recall - 0.6).abs() < 1e-9);
        assert!((positives.f1 - 2.0 / 3.0).abs() < 1e-9);

        let negatives = confusion.negative_metrics();
        assert!((negatives.precision - 8.0 / 12.0).abs() < 1e-9);
        assert!((negatives.recall - 0.8).abs() < 1e-9);

        assert!((confusion.accuracy() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn perfect_predictions_score_one() {
        let confusion = Confusion {
            true_pos: 5,
            true_neg: 5,
            false_pos: 0,
            false_neg: 0,
        };
        assert_eq!(confusion.accuracy(), 1.0);
        assert_eq!(confusion.positive_metrics().f1, 1.0);
        assert_eq!(confusion.negative_metrics().f1, 1.0);
    }

    #[test]
    fn degenerate_all_negative_predictions() {
        let mut confusion = Confusion::default();
        confusion.record(true, false);
        confusion.record(false, false);

        let positives = confusion.positive_metrics();
        assert_eq!(positives.precision, 0.0);
        assert_eq!(positives.recall, 0.0);
        assert_eq!(positives.f1, 0.0);
    }
}
