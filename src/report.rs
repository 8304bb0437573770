use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::operations::{Body, ClassifiedJunction, JunctionKind};
use crate::topology::{FaceId, Link};

/// Per-junction outcome of an analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct JunctionReport {
    pub id: String,
    pub kind: JunctionKind,
    /// Swept angles in degrees.
    pub angles: Vec<f64>,
    /// Links this junction produced, in emission order.
    pub links: Vec<Link>,
}

impl JunctionReport {
    #[must_use]
    pub fn new(junction: &ClassifiedJunction, links: Vec<Link>) -> Self {
        Self {
            id: junction.id.clone(),
            kind: junction.kind,
            angles: junction.angles.clone(),
            links,
        }
    }
}

/// One final body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyReport {
    /// 1-based position in the final body list.
    pub index: usize,
    /// Faces of the body, ascending.
    pub faces: Vec<FaceId>,
}

/// Everything an analysis run produces, ready for a table, a log or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SceneReport {
    pub background: Option<FaceId>,
    pub junctions: Vec<JunctionReport>,
    /// Distinct non-background links of the whole scene, sorted.
    pub links: Vec<Link>,
    pub bodies: Vec<BodyReport>,
}

impl SceneReport {
    #[must_use]
    pub fn new(background: Option<FaceId>, junctions: Vec<JunctionReport>, bodies: &[Body]) -> Self {
        let links: BTreeSet<Link> = junctions
            .iter()
            .flat_map(|j| j.links.iter().copied())
            .filter(|l| !background.is_some_and(|bg| l.touches(bg)))
            .collect();
        let bodies = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| BodyReport {
                index: i + 1,
                faces: body.faces().iter().copied().collect(),
            })
            .collect();
        Self {
            background,
            junctions,
            links: links.into_iter().collect(),
            bodies,
        }
    }

    /// Final bodies as sorted face lists.
    #[must_use]
    pub fn body_faces(&self) -> Vec<Vec<FaceId>> {
        self.bodies.iter().map(|b| b.faces.clone()).collect()
    }

    /// Report for the junction named `id`.
    #[must_use]
    pub fn junction(&self, id: &str) -> Option<&JunctionReport> {
        self.junctions.iter().find(|j| j.id == id)
    }
}

fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: [usize; 4], cells: [&str; 4]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for SceneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 4]> = self
            .junctions
            .iter()
            .map(|j| {
                let angles: Vec<String> = j.angles.iter().map(|a| format!("{a:.2}")).collect();
                [
                    j.id.clone(),
                    j.kind.to_string(),
                    angles.join(" "),
                    join(&j.links, " "),
                ]
            })
            .collect();

        let header = ["Junction", "Type", "Angles", "Links"];
        let mut widths = header.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        write_row(f, widths, header)?;
        let rule = widths.map(|w| "-".repeat(w));
        write_row(f, widths, [rule[0].as_str(), rule[1].as_str(), rule[2].as_str(), rule[3].as_str()])?;
        for row in &rows {
            write_row(f, widths, [row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()])?;
        }

        writeln!(f)?;
        match self.background {
            Some(bg) => writeln!(f, "Background: {bg}")?,
            None => writeln!(f, "Background: none")?,
        }
        for body in &self.bodies {
            writeln!(f, "Body {}: {}", body.index, join(&body.faces, " "))?;
        }
        Ok(())
    }
}
