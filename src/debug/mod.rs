//! SVG snapshots of intermediate algorithm state, configured through environment variables.
//!
//! `POLYTRI_SVG_OUTPUT_PATH` names the directory to write into (nothing is written when unset),
//! `POLYTRI_SVG_OUTPUT_LEVEL` picks how much is written (`0` nothing, `1` results, `2` major steps, `3` every
//! step), and setting `POLYTRI_SVG_HIDE_LABELS` omits vertex labels.

pub(crate) mod env;
pub(crate) mod svg;
