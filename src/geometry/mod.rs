// SPDX-License-Identifier: MPL-2.0
//! Triangle model and the classical center constructions.
//!
//! The geometry layer is pure: it knows nothing about widgets, events, or
//! rendering. Centers are computed from scratch on every request; there is
//! no caching and no guard against degenerate (collinear) input, so the
//! circumcenter and orthocenter of a flat triangle come back non-finite.

pub mod centers;

use crate::config::DEFAULT_VERTICES;
use iced::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered triple of vertices in board coordinates.
///
/// The order is only meaningful for labeling and formula correspondence
/// (vertex 0 is "A"), not for the geometry itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle([Point; 3]);

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.0
    }

    pub fn vertex(&self, index: usize) -> Point {
        self.0[index]
    }

    /// Moves a single vertex, leaving the other two untouched.
    pub fn set_vertex(&mut self, index: usize, position: Point) {
        self.0[index] = position;
    }
}

impl Default for Triangle {
    fn default() -> Self {
        let [a, b, c] = DEFAULT_VERTICES;
        Self([a.into(), b.into(), c.into()])
    }
}

/// The classical triangle centers the explorer can display.
///
/// A closed set, dispatched exhaustively: adding a variant without teaching
/// the UI and geometry about it is a compile error, not a runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CenterKind {
    #[default]
    Centroid,
    Circumcenter,
    Incenter,
    Orthocenter,
}

impl CenterKind {
    /// Every center kind, in selector display order.
    pub const ALL: [CenterKind; 4] = [
        CenterKind::Centroid,
        CenterKind::Circumcenter,
        CenterKind::Incenter,
        CenterKind::Orthocenter,
    ];

    /// Computes this center for the given triangle.
    ///
    /// May return non-finite coordinates for degenerate input; callers that
    /// render the result are expected to check finiteness themselves.
    #[must_use]
    pub fn position(self, triangle: &Triangle) -> Point {
        match self {
            CenterKind::Centroid => centers::centroid(triangle),
            CenterKind::Circumcenter => centers::circumcenter(triangle),
            CenterKind::Incenter => centers::incenter(triangle),
            CenterKind::Orthocenter => centers::orthocenter(triangle),
        }
    }

    /// Returns the i18n message key for this center's display name.
    pub fn name_key(self) -> &'static str {
        match self {
            CenterKind::Centroid => "center-name-centroid",
            CenterKind::Circumcenter => "center-name-circumcenter",
            CenterKind::Incenter => "center-name-incenter",
            CenterKind::Orthocenter => "center-name-orthocenter",
        }
    }

    /// Returns the i18n message key for this center's explanatory paragraph.
    pub fn description_key(self) -> &'static str {
        match self {
            CenterKind::Centroid => "center-description-centroid",
            CenterKind::Circumcenter => "center-description-circumcenter",
            CenterKind::Incenter => "center-description-incenter",
            CenterKind::Orthocenter => "center-description-orthocenter",
        }
    }
}

impl fmt::Display for CenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CenterKind::Centroid => "Centroid",
            CenterKind::Circumcenter => "Circumcenter",
            CenterKind::Incenter => "Incenter",
            CenterKind::Orthocenter => "Orthocenter",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BOARD_SIZE;

    #[test]
    fn default_triangle_sits_inside_the_board() {
        let triangle = Triangle::default();
        for vertex in triangle.vertices() {
            assert!(vertex.x >= 0.0 && vertex.x <= BOARD_SIZE);
            assert!(vertex.y >= 0.0 && vertex.y <= BOARD_SIZE);
        }
    }

    #[test]
    fn set_vertex_moves_only_the_requested_vertex() {
        let mut triangle = Triangle::default();
        let before = *triangle.vertices();

        triangle.set_vertex(0, Point::new(42.0, 24.0));

        assert_eq!(triangle.vertex(0), Point::new(42.0, 24.0));
        assert_eq!(triangle.vertex(1), before[1]);
        assert_eq!(triangle.vertex(2), before[2]);
    }

    #[test]
    fn all_lists_each_kind_exactly_once() {
        for kind in CenterKind::ALL {
            assert_eq!(
                CenterKind::ALL.iter().filter(|k| **k == kind).count(),
                1,
                "{kind} should appear once"
            );
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let serialized = toml::to_string(&toml::Table::from_iter([(
            "center".to_string(),
            toml::Value::try_from(CenterKind::Circumcenter).unwrap(),
        )]))
        .unwrap();
        assert!(serialized.contains("circumcenter"));
    }

    #[test]
    fn name_and_description_keys_are_distinct_per_kind() {
        let mut keys: Vec<&str> = CenterKind::ALL
            .iter()
            .flat_map(|k| [k.name_key(), k.description_key()])
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CenterKind::ALL.len() * 2);
    }
}
