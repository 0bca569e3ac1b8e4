pub(crate) struct SmoParameters {
    pub(crate) complexity: f64,
    pub(crate) tolerance: f64,
    pub(crate) max_passes: usize,
}

impl Default for SmoParameters {
    fn default() -> Self {
        Self {
            complexity: 1.0,
            tolerance: 1e-3,
            max_passes: 10,
        }
    }
}

pub(crate) struct LinearDecisionFunction {
    weights: Vec<f64>,
    bias: f64,
}

impl LinearDecisionFunction {
    pub(crate) fn evaluate(&self, features: &[f64]) -> f64 {
        dot(&self.weights, features) + self.bias
    }
}

pub(crate) fn solve(
    features: &[Vec<f64>],
    labels: &[f64],
    parameters: &SmoParameters,
) -> LinearDecisionFunction {
    let n = features.len();
    let mut alphas = vec![0.0; n];
    let mut bias = 0.0;
    let mut passes = 0;

    while passes < parameters.max_passes {
        let mut changed = 0;
        for i in 0..n {
            let error_i = decision(features, labels, &alphas, bias, &features[i]) - labels[i];
            let violates = (labels[i] * error_i < -parameters.tolerance
                && alphas[i] < parameters.complexity)
                || (labels[i] * error_i > parameters.tolerance && alphas[i] > 0.0);
            if !violates {
                continue;
            }
            let j = match second_choice(features, labels, &alphas, bias, i, error_i) {
                Some(j) => j,
                None => continue,
            };
            let error_j = decision(features, labels, &alphas, bias, &features[j]) - labels[j];

            let (low, high) = if labels[i] == labels[j] {
                let sum = alphas[i] + alphas[j];
                (
                    (sum - parameters.complexity).max(0.0),
                    sum.min(parameters.complexity),
                )
            } else {
                let diff = alphas[j] - alphas[i];
                (diff.max(0.0), (parameters.complexity + diff).min(parameters.complexity))
            };
            if low >= high {
                continue;
            }

            let eta = 2.0 * dot(&features[i], &features[j])
                - dot(&features[i], &features[i])
                - dot(&features[j], &features[j]);
            if eta >= 0.0 {
                continue;
            }

            let old_i = alphas[i];
            let old_j = alphas[j];
            let new_j = (old_j - labels[j] * (error_i - error_j) / eta).clamp(low, high);
            if (new_j - old_j).abs() < 1e-5 {
                continue;
            }
            let new_i = old_i + labels[i] * labels[j] * (old_j - new_j);
            alphas[i] = new_i;
            alphas[j] = new_j;

            let b1 = bias
                - error_i
                - labels[i] * (new_i - old_i) * dot(&features[i], &features[i])
                - labels[j] * (new_j - old_j) * dot(&features[i], &features[j]);
            let b2 = bias
                - error_j
                - labels[i] * (new_i - old_i) * dot(&features[i], &features[j])
                - labels[j] * (new_j - old_j) * dot(&features[j], &features[j]);
            bias = if new_i > 0.0 && new_i < parameters.complexity {
                b1
            } else if new_j > 0.0 && new_j < parameters.complexity {
                b2
            } else {
                (b1 + b2) / 2.0
            };
            changed += 1;
        }
        if changed == 0 {
            passes += 1;
        } else {
            passes = 0;
        }
    }

    let mut weights = vec![0.0; features.first().map_or(0, Vec::len)];
    for i in 0..n {
        if alphas[i] > 0.0 {
            for (weight, x) in weights.iter_mut().zip(&features[i]) {
                *weight += alphas[i] * labels[i] * x;
            }
        }
    }
    LinearDecisionFunction { weights, bias }
}

fn second_choice(
    features: &[Vec<f64>],
    labels: &[f64],
    alphas: &[f64],
    bias: f64,
    i: usize,
    error_i: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for j in 0..features.len() {
        if j == i {
            continue;
        }
        let error_j = decision(features, labels, alphas, bias, &features[j]) - labels[j];
        let gap = (error_i - error_j).abs();
        let improved = match best {
            Some((_, best_gap)) => gap > best_gap,
            None => true,
        };
        if improved {
            best = Some((j, gap));
        }
    }
    best.map(|(j, _)| j)
}

fn decision(features: &[Vec<f64>], labels: &[f64], alphas: &[f64], bias: f64, x: &[f64]) -> f64 {
    let mut sum = bias;
    for i in 0..features.len() {
        if alphas[i] > 0.0 {
            sum += alphas[i] * labels[i] * dot(&features[i], x);
        }
    }
    sum
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_point_problem_finds_the_midpoint_boundary() {
        let features = vec![vec![0.0], vec![2.0]];
        let labels = vec![1.0, -1.0];
        let decision = solve(&features, &labels, &SmoParameters::default());

        assert!(decision.evaluate(&[0.0]) > 0.0);
        assert!(decision.evaluate(&[2.0]) < 0.0);
        assert!(decision.evaluate(&[1.0]).abs() < 1e-9);
    }

    #[test]
    fn test_duplicated_points_separate_by_sign() {
        let features = vec![vec![0.0], vec![0.0], vec![1.0], vec![1.0]];
        let labels = vec![1.0, 1.0, -1.0, -1.0];
        let decision = solve(&features, &labels, &SmoParameters::default());

        assert!(decision.evaluate(&[0.0]) > 0.0);
        assert!(decision.evaluate(&[1.0]) < 0.0);
    }

    #[test]
    fn test_two_dimensional_separation() {
        let features = vec![vec![0.0, 0.0], vec![0.0, 2.0], vec![2.0, 0.0], vec![2.0, 2.0]];
        let labels = vec![1.0, 1.0, -1.0, -1.0];
        let decision = solve(&features, &labels, &SmoParameters::default());

        assert!(decision.evaluate(&[0.0, 1.0]) > 0.0);
        assert!(decision.evaluate(&[2.0, 1.0]) < 0.0);
    }

    #[test]
    fn test_dot_product() {
        assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
        assert_eq!(dot(&[], &[]), 0.0);
    }
}
