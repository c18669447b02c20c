//! Named axes and the ordered axis set shared by every box of a computation.
//!
//! An [`Axes`] value fixes which dimensions exist and in what order. Every
//! [`Constraints`](crate::constraints::Constraints) carries one, and the order
//! is significant: box difference decomposes along it, and points are plain
//! `&[i64]` slices indexed the same way.

use std::fmt::Display;
use std::sync::Arc;

use crate::constraints::ConstraintError;

/// Name of one integer dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis(Arc<str>);

impl Axis {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Axis {
    fn from(name: &str) -> Self {
        Axis::new(name)
    }
}

impl From<char> for Axis {
    fn from(name: char) -> Self {
        Axis::new(name.encode_utf8(&mut [0; 4]))
    }
}

/// Fixed, ordered set of axes.
///
/// Cloning is cheap (shared slice), so boxes built from the same `Axes`
/// share one allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axes(Arc<[Axis]>);

impl Axes {
    /// Creates an axis set in the given order.
    ///
    /// # Panics
    ///
    /// Panics if an axis name appears twice.
    pub fn new<I, A>(axes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Axis>,
    {
        let axes: Vec<Axis> = axes.into_iter().map(Into::into).collect();
        for (i, axis) in axes.iter().enumerate() {
            assert!(
                !axes[..i].contains(axis),
                "Axis `{}` declared more than once",
                axis
            );
        }
        Self(axes.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Axis> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Axis] {
        &self.0
    }

    /// Position of `axis` in the order, if declared.
    pub fn position(&self, axis: &str) -> Option<usize> {
        self.0.iter().position(|a| a.name() == axis)
    }

    /// Like [`position`](Self::position), but unknown axes are an error.
    pub fn index_of(&self, axis: &str) -> Result<usize, ConstraintError> {
        self.position(axis)
            .ok_or_else(|| ConstraintError::UnknownAxis(axis.to_string()))
    }
}

impl<'a> IntoIterator for &'a Axes {
    type Item = &'a Axis;
    type IntoIter = std::slice::Iter<'a, Axis>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Axes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let axes = Vec::<Axis>::deserialize(deserializer)?;
        for (i, axis) in axes.iter().enumerate() {
            if axes[..i].contains(axis) {
                return Err(serde::de::Error::custom(format!(
                    "Axis `{}` declared more than once",
                    axis
                )));
            }
        }
        Ok(Self(axes.into()))
    }
}

impl Display for Axes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, axis) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", axis)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_follows_declaration_order() {
        let axes = Axes::new(['x', 'm', 'a', 's']);
        assert_eq!(axes.len(), 4);
        assert_eq!(axes.position("x"), Some(0));
        assert_eq!(axes.position("s"), Some(3));
        assert_eq!(axes.position("q"), None);
    }

    #[test]
    fn index_of_unknown_axis_is_error() {
        let axes = Axes::new(["width", "height"]);
        assert_eq!(axes.index_of("height"), Ok(1));
        assert_eq!(
            axes.index_of("depth"),
            Err(ConstraintError::UnknownAxis("depth".to_string()))
        );
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Axes::new(['x', 'm']), Axes::new(["x", "m"]));
        assert_ne!(Axes::new(['x', 'm']), Axes::new(['m', 'x']));
    }

    #[test]
    #[should_panic(expected = "declared more than once")]
    fn duplicate_axis_panics() {
        let _ = Axes::new(['x', 'x']);
    }

    #[test]
    fn display_lists_axes() {
        assert_eq!(Axes::new(['x', 'm']).to_string(), "[x, m]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_duplicate_axes() {
        let axes: Axes = serde_json::from_str(r#"["x","m"]"#).unwrap();
        assert_eq!(axes, Axes::new(['x', 'm']));
        let err = serde_json::from_str::<Axes>(r#"["x","x"]"#).unwrap_err();
        assert!(err.to_string().contains("declared more than once"), "{}", err);
    }
}
