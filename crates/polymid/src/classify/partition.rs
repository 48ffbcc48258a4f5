//! Maximal equal-flag runs with no singleton sections.

use crate::geom2::Vec2;

use super::policy::MedialAxisPoint;

/// Contiguous run of path points sharing one flag.
///
/// Every section after the first starts with the last point of the previous
/// one (the shared anchor), so stitching sections back drops exactly that
/// point.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub interior: bool,
    pub points: Vec<MedialAxisPoint>,
}

impl Section {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|m| m.point).collect()
    }
}

/// Group flagged points into runs.
///
/// - A flag change starts a new run, except right after a run of length 1:
///   the point is absorbed and the run takes its flag.
/// - The last point always joins the previous run.
/// - Afterwards every point carries its run's flag, and each run after the
///   first is prefixed with the previous run's last point.
pub fn partition_sections(points: &[MedialAxisPoint]) -> Vec<Section> {
    let n = points.len();
    let mut runs: Vec<Section> = Vec::new();
    for (i, &m) in points.iter().enumerate() {
        let last = i + 1 == n;
        let joins = runs.last().is_some_and(|run| {
            run.interior == m.interior || run.points.len() == 1 || last
        });
        if let (true, Some(run)) = (joins, runs.last_mut()) {
            if run.points.len() == 1 {
                run.interior = m.interior;
            }
            run.points.push(m);
            continue;
        }
        runs.push(Section {
            interior: m.interior,
            points: vec![m],
        });
    }

    let mut anchor: Option<MedialAxisPoint> = None;
    for run in &mut runs {
        for m in &mut run.points {
            m.interior = run.interior;
        }
        if let Some(mut a) = anchor {
            a.interior = run.interior;
            run.points.insert(0, a);
        }
        anchor = run.points.last().copied();
    }
    runs
}
