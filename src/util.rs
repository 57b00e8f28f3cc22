use crate::error::{TapwiseError, TwResult};

pub fn array_sum(a: &[f64]) -> f64 {
    a.iter().sum()
}

pub fn count_non_zero(a: &[f64]) -> usize {
    a.iter().filter(|&&v| v > 0.0).count()
}

pub fn scale(c: f64, a: &[f64]) -> Vec<f64> {
    a.iter().map(|v| c * v).collect()
}

/// Element-wise sum. Both vectors must be the same length.
pub fn add(a: &[f64], b: &[f64]) -> TwResult<Vec<f64>> {
    check_len(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Element-wise product. Both vectors must be the same length.
pub fn multiply(a: &[f64], b: &[f64]) -> TwResult<Vec<f64>> {
    check_len(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

fn check_len(a: &[f64], b: &[f64]) -> TwResult<()> {
    if a.len() != b.len() {
        return Err(TapwiseError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Edit distance after trimming and lowercasing both strings.
pub fn levenshtein_ignore_case_and_padding(s1: &str, s2: &str) -> usize {
    levenshtein(&s1.trim().to_lowercase(), &s2.trim().to_lowercase())
}

fn levenshtein(lhs: &str, rhs: &str) -> usize {
    let lhs: Vec<char> = lhs.chars().collect();
    let rhs: Vec<char> = rhs.chars().collect();

    let mut cost: Vec<usize> = (0..=lhs.len()).collect();
    let mut new_cost = vec![0; lhs.len() + 1];

    for j in 1..=rhs.len() {
        new_cost[0] = j;
        for i in 1..=lhs.len() {
            let matched = if lhs[i - 1] == rhs[j - 1] { 0 } else { 1 };
            let replace = cost[i - 1] + matched;
            let insert = cost[i] + 1;
            let delete = new_cost[i - 1] + 1;
            new_cost[i] = replace.min(insert).min(delete);
        }
        std::mem::swap(&mut cost, &mut new_cost);
    }

    cost[lhs.len()]
}
