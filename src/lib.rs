// THEORY:
// This file is the main entry point for the `waggle_trace` library crate.
// It exposes the `TrajectoryPipeline` and its configuration as the high-level
// interface: load a labelled trajectory, cut it into runs of equal mode, draw
// each run in its mode's colour, and write the picture to disk.
//
// The individual stages live in `core_modules` and are public so they can be
// used on their own, e.g. grouping without rendering.

pub mod core_modules;
pub mod pipeline;
