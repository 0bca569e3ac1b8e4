use crate::classifiers::split_criteria::SplitCriterion;

pub struct InformationGainCriterion {}

impl InformationGainCriterion {
    pub fn new() -> Self {
        Self {}
    }

    pub fn compute_entropy(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        if distribution_sum_of_weights <= 0.0 {
            return 0.0;
        }
        let mut entropy = 0.0;
        for i in distribution {
            if *i > 0.0 {
                let rel_freq = i / distribution_sum_of_weights;
                entropy -= rel_freq * rel_freq.log2();
            }
        }
        entropy
    }
}

impl SplitCriterion for InformationGainCriterion {
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64 {
        let mut total_weight = 0.0;
        let mut dist_weights = Vec::with_capacity(post_split_dists.len());

        for dist in post_split_dists.iter() {
            let w: f64 = dist.iter().sum();
            dist_weights.push(w);
            total_weight += w;
        }

        if total_weight <= 0.0 {
            return 0.0;
        }

        let mut post_split_entropy = 0.0;
        for (i, dist) in post_split_dists.iter().enumerate() {
            post_split_entropy +=
                (dist_weights[i] / total_weight) * self.compute_entropy(dist, dist_weights[i]);
        }

        let pre_split_weight: f64 = pre_split_distribution.iter().sum();
        self.compute_entropy(pre_split_distribution, pre_split_weight) - post_split_entropy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_entropy_of_balanced_distribution_is_one_bit() {
        let criterion = InformationGainCriterion::new();
        assert!(approx(criterion.compute_entropy(&[2.0, 2.0], 4.0), 1.0));
    }

    #[test]
    fn test_entropy_of_pure_distribution_is_zero() {
        let criterion = InformationGainCriterion::new();
        assert!(approx(criterion.compute_entropy(&[4.0, 0.0], 4.0), 0.0));
    }

    #[test]
    fn test_entropy_of_empty_distribution_is_zero() {
        let criterion = InformationGainCriterion::new();
        assert!(approx(criterion.compute_entropy(&[0.0, 0.0], 0.0), 0.0));
    }

    #[test]
    fn test_perfect_split_recovers_full_entropy() {
        let criterion = InformationGainCriterion::new();
        let merit = criterion.get_merit_of_split(&[2.0, 2.0], &[vec![2.0, 0.0], vec![0.0, 2.0]]);
        assert!(approx(merit, 1.0));
    }

    #[test]
    fn test_uninformative_split_has_zero_merit() {
        let criterion = InformationGainCriterion::new();
        let merit = criterion.get_merit_of_split(&[2.0, 2.0], &[vec![1.0, 1.0], vec![1.0, 1.0]]);
        assert!(approx(merit, 0.0));
    }

    #[test]
    fn test_partial_split_merit_matches_hand_computation() {
        let criterion = InformationGainCriterion::new();
        let merit = criterion
            .get_merit_of_split(&[4.0, 4.0], &[vec![4.0, 0.0], vec![0.0, 4.0], vec![0.0, 0.0]]);
        assert!(approx(merit, 1.0));

        let merit = criterion.get_merit_of_split(&[3.0, 1.0], &[vec![3.0, 0.0], vec![0.0, 1.0]]);
        let pre = criterion.compute_entropy(&[3.0, 1.0], 4.0);
        assert!(approx(merit, pre));
    }

    #[test]
    fn test_empty_partitions_yield_zero_merit() {
        let criterion = InformationGainCriterion::new();
        let merit = criterion.get_merit_of_split(&[2.0, 2.0], &[vec![0.0, 0.0], vec![0.0, 0.0]]);
        assert!(approx(merit, 0.0));
    }
}
