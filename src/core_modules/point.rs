// THEORY:
// The `point` module holds the most basic unit of the system: one sample of a
// trajectory. Like a pixel in an image, a `TrajectoryPoint` is a "dumb" data
// container. It knows where it is and what the animal was doing, nothing more.
//
// Key principles:
// 1.  **Implicit Time**: Points carry no timestamp. Their position in the
//     `Trajectory` is their time step, so order is significant everywhere.
// 2.  **Raw Labels**: The mode is kept exactly as it was read. Deciding whether
//     a label is known happens later, when a style is resolved for it.
// 3.  **Immutability**: A `Trajectory` is built once and then only read. All
//     higher layers (grouping, rendering) borrow from it.

pub mod point {
    use crate::core_modules::segment::segment::{Segment, group_segments};

    /// A single labelled sample of a 2D trajectory.
    #[derive(Debug, Clone, PartialEq)]
    pub struct TrajectoryPoint {
        /// Horizontal position.
        pub x: f64,
        /// Vertical position.
        pub y: f64,
        /// Behavioural state at this sample, e.g. `waggle` or `turn_left`.
        pub mode: String,
    }

    impl TrajectoryPoint {
        pub fn new(x: f64, y: f64, mode: impl Into<String>) -> Self {
            Self {
                x,
                y,
                mode: mode.into(),
            }
        }

        pub fn coordinates(&self) -> (f64, f64) {
            (self.x, self.y)
        }
    }

    /// A time-ordered, immutable sequence of `TrajectoryPoint`s.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Trajectory {
        points: Vec<TrajectoryPoint>,
    }

    impl Trajectory {
        pub fn new(points: Vec<TrajectoryPoint>) -> Self {
            Self { points }
        }

        pub fn points(&self) -> &[TrajectoryPoint] {
            &self.points
        }

        pub fn len(&self) -> usize {
            self.points.len()
        }

        pub fn is_empty(&self) -> bool {
            self.points.is_empty()
        }

        /// Splits the trajectory into its maximal runs of equal mode.
        pub fn segments(&self) -> Vec<Segment<'_>> {
            group_segments(&self.points)
        }
    }

    impl From<Vec<TrajectoryPoint>> for Trajectory {
        fn from(points: Vec<TrajectoryPoint>) -> Self {
            Self::new(points)
        }
    }

    impl FromIterator<TrajectoryPoint> for Trajectory {
        fn from_iter<I: IntoIterator<Item = TrajectoryPoint>>(iter: I) -> Self {
            Self::new(iter.into_iter().collect())
        }
    }
}
