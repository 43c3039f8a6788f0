use crate::error::{Error, Result};

/// Real-valued vector aligned to the vocabulary.
///
/// Raw term frequencies, the corpus IDF and TF-IDF weights all share this type;
/// which one a value holds is determined by how it was built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector(Vec<f64>);

impl TermVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Add one occurrence to dimension `index`.
    pub(crate) fn increment(&mut self, index: usize) {
        self.0[index] += 1.0;
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &TermVector) -> Result<f64> {
        self.check_len(other)?;
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum())
    }

    /// Element-wise product.
    pub fn hadamard(&self, other: &TermVector) -> Result<TermVector> {
        self.check_len(other)?;
        Ok(TermVector(self.0.iter().zip(&other.0).map(|(a, b)| a * b).collect()))
    }

    /// Cosine of the angle between two vectors, clamped to [-1, 1].
    ///
    /// A zero vector on either side has no direction; the similarity is 0.
    pub fn cosine(&self, other: &TermVector) -> Result<f64> {
        let dot = self.dot(other)?;
        let norms = self.norm() * other.norm();
        if norms == 0.0 {
            return Ok(0.0);
        }
        Ok((dot / norms).clamp(-1.0, 1.0))
    }

    fn check_len(&self, other: &TermVector) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::Ranking { expected: self.len(), found: other.len() });
        }
        Ok(())
    }
}

impl From<Vec<f64>> for TermVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
