//! Loading and evaluation of the pre-trained liver-disease classifier.
//!
//! The classifier is trained offline; this module only deserializes the
//! artifact once at startup and evaluates it. The artifact pins the input
//! contract: seven raw features in the order listed by `feature_names`,
//! with no scaling or imputation on either side of that boundary.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Number of inputs the classifier was fitted against.
pub const FEATURE_COUNT: usize = 7;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read classifier artifact at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("classifier artifact at {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("classifier artifact declares {found} features, expected {FEATURE_COUNT}")]
    FeatureCount { found: usize },
    #[error("classifier artifact declares {names} feature names but {coefficients} coefficients")]
    ShapeMismatch { names: usize, coefficients: usize },
    #[error("classifier artifact declares {found} classes, expected 2")]
    ClassCount { found: usize },
}

/// On-disk form of the trained classifier: a linear decision function plus
/// the raw class values it emits.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    /// Input order the coefficients were fitted against.
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Class emitted below and above the decision boundary, in that order.
    pub classes: Vec<i64>,
}

/// Anything that maps a feature vector to a raw class value.
///
/// The production implementation is [`Classifier`]; tests substitute fixed
/// stubs through this seam.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> i64;
}

/// The in-memory predictor. Immutable after [`Classifier::load`], so it is
/// shared across requests behind an `Arc` without synchronization.
#[derive(Debug, Clone)]
pub struct Classifier {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    classes: [i64; 2],
}

impl Classifier {
    /// Reads and validates the artifact. Any failure here is fatal at
    /// startup; the service must not accept traffic without a usable model.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: ClassifierArtifact =
            serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self, ModelError> {
        if artifact.feature_names.len() != FEATURE_COUNT {
            return Err(ModelError::FeatureCount {
                found: artifact.feature_names.len(),
            });
        }
        if artifact.coefficients.len() != artifact.feature_names.len() {
            return Err(ModelError::ShapeMismatch {
                names: artifact.feature_names.len(),
                coefficients: artifact.coefficients.len(),
            });
        }
        if artifact.classes.len() != 2 {
            return Err(ModelError::ClassCount {
                found: artifact.classes.len(),
            });
        }

        let mut coefficients = [0.0; FEATURE_COUNT];
        coefficients.copy_from_slice(&artifact.coefficients);

        Ok(Self {
            coefficients,
            intercept: artifact.intercept,
            classes: [artifact.classes[0], artifact.classes[1]],
        })
    }
}

impl Predictor for Classifier {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> i64 {
        let score: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(coefficient, feature)| coefficient * feature)
            .sum::<f64>()
            + self.intercept;

        if score > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn artifact_json() -> &'static str {
        r#"{
            "feature_names": ["age", "gender", "alcohol_intake", "bmi", "drug_use", "smoking_status", "stress_levels"],
            "coefficients": [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            "intercept": -2.0,
            "classes": [0, 1]
        }"#
    }

    #[test]
    fn loads_artifact_from_disk_and_respects_decision_boundary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(artifact_json().as_bytes()).unwrap();

        let classifier = Classifier::load(file.path()).unwrap();

        // alcohol_intake is the only weighted feature; boundary sits at 2.0.
        assert_eq!(classifier.predict(&[45.0, 1.0, 3.5, 27.3, 0.0, 1.0, 3.0]), 1);
        assert_eq!(classifier.predict(&[45.0, 1.0, 1.5, 27.3, 0.0, 1.0, 3.0]), 0);
    }

    #[test]
    fn missing_artifact_is_a_read_error() {
        let err = Classifier::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ModelError::Read { .. }));
    }

    #[test]
    fn malformed_artifact_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let err = Classifier::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Parse { .. }));
    }

    #[test]
    fn rejects_wrong_feature_count() {
        let artifact = ClassifierArtifact {
            feature_names: vec!["age".into(), "bmi".into()],
            coefficients: vec![0.1, 0.2],
            intercept: 0.0,
            classes: vec![0, 1],
        };
        let err = Classifier::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, ModelError::FeatureCount { found: 2 }));
    }

    #[test]
    fn rejects_coefficient_shape_mismatch() {
        let artifact = ClassifierArtifact {
            feature_names: (0..FEATURE_COUNT).map(|i| format!("f{i}")).collect(),
            coefficients: vec![0.1; FEATURE_COUNT - 1],
            intercept: 0.0,
            classes: vec![0, 1],
        };
        let err = Classifier::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, ModelError::ShapeMismatch { .. }));
    }

    #[test]
    fn rejects_wrong_class_count() {
        let artifact = ClassifierArtifact {
            feature_names: (0..FEATURE_COUNT).map(|i| format!("f{i}")).collect(),
            coefficients: vec![0.0; FEATURE_COUNT],
            intercept: 0.0,
            classes: vec![0, 1, 2],
        };
        let err = Classifier::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, ModelError::ClassCount { found: 3 }));
    }

    #[test]
    fn passes_through_whatever_class_values_the_artifact_declares() {
        // A mis-authored artifact can emit values outside {0, 1}; the
        // pipeline is responsible for rejecting them.
        let artifact = ClassifierArtifact {
            feature_names: (0..FEATURE_COUNT).map(|i| format!("f{i}")).collect(),
            coefficients: vec![0.0; FEATURE_COUNT],
            intercept: 1.0,
            classes: vec![3, 7],
        };
        let classifier = Classifier::from_artifact(artifact).unwrap();
        assert_eq!(classifier.predict(&[0.0; FEATURE_COUNT]), 7);
    }
}
