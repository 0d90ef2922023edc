//! Output model handed to a plotting front-end, plus a plain-text rendering.

use std::fmt::Write as _;

use quaterp_core::{angular_steps, ComponentOrder, Endpoints, Samples, Strategy};
use serde::Serialize;

use crate::args::Settings;
use crate::view::{self, Camera, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Layout of every `quat` array below.
    pub order: ComponentOrder,
    pub endpoints: Endpoints,
    pub view: ViewReport,
    pub paths: Vec<PathReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewReport {
    pub mode: ViewMode,
    pub camera: Option<Camera>,
    pub equal_aspect: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub strategy: Strategy,
    pub title: &'static str,
    pub samples: Vec<SampleReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub index: usize,
    pub t: f64,
    pub quat: [f64; 4],
    pub direction: [f64; 3],
    /// Position on the colour map, `index / n`.
    pub color: f64,
    /// Arc from the previous sample on the unit 3-sphere, radians.
    pub step: Option<f64>,
}

fn title(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Lerp => "LERP (Linear Interpolation) Path",
        Strategy::Slerp => "SLERP (Spherical Interpolation) Path",
    }
}

impl Report {
    pub fn build(samples: &Samples, settings: &Settings) -> Self {
        let n = samples.len() as f64;
        let paths = [Strategy::Lerp, Strategy::Slerp]
            .into_iter()
            .map(|strategy| {
                let seq = samples.get(strategy);
                let steps = angular_steps(seq);
                let rows = seq
                    .iter()
                    .zip(&samples.params)
                    .enumerate()
                    .map(|(index, (&q, &t))| SampleReport {
                        index,
                        t,
                        quat: q.to_array(settings.order),
                        direction: view::direction(q),
                        color: index as f64 / n,
                        step: index.checked_sub(1).map(|prev| steps[prev]),
                    })
                    .collect();
                PathReport {
                    strategy,
                    title: title(strategy),
                    samples: rows,
                }
            })
            .collect();

        Self {
            order: settings.order,
            endpoints: samples.endpoints,
            view: ViewReport {
                mode: settings.view,
                camera: view::camera(settings.view, &samples.endpoints),
                equal_aspect: settings.equal_aspect,
            },
            paths,
        }
    }

    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let ep = &self.endpoints;
        let _ = writeln!(
            out,
            "theta0 = {:.6} rad ({:.2} deg), dot = {:.6}{}",
            ep.theta0,
            ep.theta0.to_degrees(),
            ep.dot,
            if ep.flipped { ", q2 negated for shortest path" } else { "" }
        );
        match self.view.camera {
            Some(c) => {
                let _ = writeln!(out, "view: {:?} (elev {:.2}, azim {:.2})", self.view.mode, c.elev, c.azim);
            }
            None => {
                let _ = writeln!(out, "view: {:?}", self.view.mode);
            }
        }
        let labels = match self.order {
            ComponentOrder::ScalarFirst => ["w", "x", "y", "z"],
            ComponentOrder::ScalarLast => ["x", "y", "z", "w"],
        };
        for path in &self.paths {
            let _ = writeln!(out, "\n{}", path.title);
            let _ = writeln!(
                out,
                "{:>3} {:>6} {:>9} {:>9} {:>9} {:>9}   {:>9} {:>9} {:>9}   {:>9}",
                "i", "t", labels[0], labels[1], labels[2], labels[3], "dir.x", "dir.y", "dir.z", "step"
            );
            for s in &path.samples {
                let step = s.step.map(|v| format!("{v:.6}")).unwrap_or_else(|| "-".into());
                let _ = writeln!(
                    out,
                    "{:>3} {:>6.3} {:>9.5} {:>9.5} {:>9.5} {:>9.5}   {:>9.5} {:>9.5} {:>9.5}   {:>9}",
                    s.index,
                    s.t,
                    s.quat[0],
                    s.quat[1],
                    s.quat[2],
                    s.quat[3],
                    s.direction[0],
                    s.direction[1],
                    s.direction[2],
                    step
                );
            }
        }
        out
    }
}
