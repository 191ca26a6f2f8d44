// THEORY:
// The `segment` module is the grouping layer. It takes a whole trajectory and
// cuts it wherever the behavioural mode changes, producing `Segment`s: maximal
// runs of consecutive samples that share one mode.
//
// Key principles:
// 1.  **Consecutive, not global**: Two runs of `waggle` separated by a turn are
//     two segments. Grouping only ever compares a point with its predecessor.
// 2.  **Exact Partition**: Segments borrow contiguous slices of the trajectory.
//     Laid end to end they are the trajectory, with nothing dropped or repeated.
// 3.  **Stateless Utility**: `group_segments` has no memory. It is one linear
//     pass over the input and can be re-run on any slice, including the
//     concatenation of earlier segments.

pub mod segment {
    use crate::core_modules::point::point::TrajectoryPoint;

    /// A maximal contiguous run of trajectory samples sharing one mode.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Segment<'a> {
        /// Index of the first sample of this run in the source trajectory.
        start: usize,
        /// The samples of this run. Never empty.
        points: &'a [TrajectoryPoint],
    }

    /// Owned, lightweight description of a segment for reporting.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SegmentSummary {
        pub mode: String,
        pub start: usize,
        pub len: usize,
    }

    impl<'a> Segment<'a> {
        pub fn mode(&self) -> &'a str {
            &self.points[0].mode
        }

        pub fn points(&self) -> &'a [TrajectoryPoint] {
            self.points
        }

        pub fn start(&self) -> usize {
            self.start
        }

        /// Index one past the last sample of this run.
        pub fn end(&self) -> usize {
            self.start + self.points.len()
        }

        pub fn len(&self) -> usize {
            self.points.len()
        }

        pub fn is_empty(&self) -> bool {
            self.points.is_empty()
        }

        pub fn coordinates(&self) -> Vec<(f64, f64)> {
            self.points.iter().map(TrajectoryPoint::coordinates).collect()
        }

        pub fn summary(&self) -> SegmentSummary {
            SegmentSummary {
                mode: self.mode().to_string(),
                start: self.start,
                len: self.len(),
            }
        }
    }

    /// Partitions `points` into maximal runs of equal mode, in order.
    pub fn group_segments(points: &[TrajectoryPoint]) -> Vec<Segment<'_>> {
        let mut segments = Vec::new();
        let mut start = 0;

        for run in points.chunk_by(|previous, current| previous.mode == current.mode) {
            segments.push(Segment { start, points: run });
            start += run.len();
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::segment::*;
    use crate::core_modules::point::point::TrajectoryPoint;

    fn points_from_modes(modes: &[&str]) -> Vec<TrajectoryPoint> {
        modes
            .iter()
            .enumerate()
            .map(|(i, mode)| TrajectoryPoint::new(i as f64, (i * i) as f64, *mode))
            .collect()
    }

    fn assert_partition(points: &[TrajectoryPoint], segments: &[Segment<'_>]) {
        let rebuilt: Vec<TrajectoryPoint> = segments
            .iter()
            .flat_map(|s| s.points().iter().cloned())
            .collect();
        assert_eq!(rebuilt, points);

        for segment in segments {
            assert!(!segment.is_empty());
            assert!(segment.points().iter().all(|p| p.mode == segment.mode()));
        }
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
            assert_ne!(pair[0].mode(), pair[1].mode());
        }
        if let Some(first) = segments.first() {
            assert_eq!(first.start(), 0);
        }
    }

    #[test]
    fn splits_where_mode_changes() {
        let points = vec![
            TrajectoryPoint::new(0.0, 0.0, "waggle"),
            TrajectoryPoint::new(1.0, 1.0, "waggle"),
            TrajectoryPoint::new(2.0, 2.0, "turn_left"),
        ];

        let segments = group_segments(&points);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].points(), &points[0..2]);
        assert_eq!(segments[0].mode(), "waggle");
        assert_eq!(segments[1].points(), &points[2..3]);
        assert_eq!(segments[1].mode(), "turn_left");
        assert_eq!(segments[1].coordinates(), vec![(2.0, 2.0)]);
    }

    #[test]
    fn identical_modes_form_one_segment() {
        let points = points_from_modes(&["turn_right"; 7]);
        let segments = group_segments(&points);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 7);
        assert_eq!(segments[0].start(), 0);
        assert_eq!(segments[0].end(), 7);
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(group_segments(&[]).is_empty());
    }

    #[test]
    fn single_point_is_one_segment() {
        let points = points_from_modes(&["waggle"]);
        let segments = group_segments(&points);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 1);
    }

    #[test]
    fn repeated_mode_runs_stay_separate() {
        let points = points_from_modes(&["waggle", "waggle", "turn_left", "waggle"]);
        let segments = group_segments(&points);

        let summaries: Vec<SegmentSummary> = segments.iter().map(|s| s.summary()).collect();
        assert_eq!(
            summaries,
            vec![
                SegmentSummary { mode: "waggle".into(), start: 0, len: 2 },
                SegmentSummary { mode: "turn_left".into(), start: 2, len: 1 },
                SegmentSummary { mode: "waggle".into(), start: 3, len: 1 },
            ]
        );
    }

    #[test]
    fn partition_and_contiguity_hold_for_mixed_sequences() {
        let cases: [&[&str]; 5] = [
            &["waggle"],
            &["waggle", "turn_left"],
            &["turn_left", "turn_left", "turn_right", "turn_right", "turn_left"],
            &["waggle", "turn_left", "waggle", "turn_right", "waggle", "waggle"],
            &["hover", "hover", "waggle", "hover"],
        ];

        for modes in cases {
            let points = points_from_modes(modes);
            let segments = group_segments(&points);
            assert_partition(&points, &segments);
        }
    }

    #[test]
    fn regrouping_two_segments_returns_them_unchanged() {
        let points = points_from_modes(&["waggle", "waggle", "waggle", "turn_right", "turn_right"]);
        let segments = group_segments(&points);
        assert_eq!(segments.len(), 2);

        let joined: Vec<TrajectoryPoint> = segments[0]
            .points()
            .iter()
            .chain(segments[1].points())
            .cloned()
            .collect();
        let regrouped = group_segments(&joined);

        assert_eq!(regrouped.len(), 2);
        assert_eq!(regrouped[0].points(), segments[0].points());
        assert_eq!(regrouped[1].points(), segments[1].points());
    }
}
