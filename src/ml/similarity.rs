use crate::error::MathError;

/// Cosine similarity of two embedding vectors.
///
/// There is no zero-magnitude guard: a zero vector yields `NaN`.
///
/// # Errors
/// Returns [`MathError::ShapeMismatch`] when the lengths differ
pub fn compute_similarity(a: &[f32], b: &[f32]) -> Result<f32, MathError> {
    if a.len() != b.len() {
        return Err(MathError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}
