//! STEP (ISO 10303-21) component import.
//!
//! Components are placed for fit-check only and never re-exported, so
//! the importer does not rebuild full B-rep topology. It reads the
//! exchange structure's DATA section, collects every CARTESIAN_POINT,
//! and returns the component's occupied extent as a closed mesh. That
//! is enough to position the part and eyeball clearances against the
//! enclosure walls.

use std::path::Path;

use kernel_bridge::types::RenderMesh;

use crate::errors::ImportError;

/// Load a STEP file as a fit-check extent mesh.
pub fn import_step(path: &Path) -> Result<RenderMesh, ImportError> {
    if !path.exists() {
        return Err(ImportError::NotFound {
            path: path.display().to_string(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| ImportError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let points = parse_cartesian_points(&contents).map_err(|reason| ImportError::Parse {
        path: path.display().to_string(),
        reason,
    })?;

    tracing::debug!(
        path = %path.display(),
        point_count = points.len(),
        "STEP component loaded"
    );
    Ok(extent_mesh(&points))
}

/// Collect coordinates of every CARTESIAN_POINT in the DATA section.
fn parse_cartesian_points(contents: &str) -> Result<Vec<[f64; 3]>, String> {
    if !contents.trim_start().starts_with("ISO-10303-21") {
        return Err("not an ISO-10303-21 exchange file".to_string());
    }

    let data_start = contents
        .find("DATA;")
        .ok_or_else(|| "no DATA section found".to_string())?;
    let search_after = data_start + 5;
    let data_end = contents[search_after..]
        .find("ENDSEC;")
        .ok_or_else(|| "no ENDSEC after DATA".to_string())?
        + search_after;
    let data = &contents[data_start + 5..data_end];

    let mut points = Vec::new();
    // Entity instances may span lines; split on ';' which terminates
    // each instance in the exchange structure.
    for statement in data.split(';') {
        let Some(idx) = statement.find("CARTESIAN_POINT") else {
            continue;
        };
        let rest = &statement[idx..];
        if let Some(coords) = parse_point_args(rest) {
            points.push(coords);
        }
    }

    if points.is_empty() {
        return Err("DATA section contains no CARTESIAN_POINT entities".to_string());
    }
    Ok(points)
}

/// Parse `CARTESIAN_POINT('name', (x, y, z))` arguments. Returns None on
/// malformed instances, which are skipped rather than fatal.
fn parse_point_args(s: &str) -> Option<[f64; 3]> {
    // The coordinate list is the second parenthesized group:
    // CARTESIAN_POINT('name',(x,y,z)).
    let first = s.find('(')?;
    let second = s[first + 1..].find('(')?;
    let coords_start = first + 1 + second + 1;
    let coords_end = coords_start + s[coords_start..].find(')')?;
    let coords_str = &s[coords_start..coords_end];

    let mut coords = [0.0f64; 3];
    let mut n = 0;
    for part in coords_str.split(',') {
        if n >= 3 {
            return None;
        }
        coords[n] = part.trim().parse().ok()?;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    // 2D points pad with zero.
    Some(coords)
}

/// Closed 12-triangle mesh over the axis-aligned extent of the points.
fn extent_mesh(points: &[[f64; 3]]) -> RenderMesh {
    let mut min = [f64::MAX; 3];
    let mut max = [f64::MIN; 3];
    for p in points {
        for i in 0..3 {
            min[i] = min[i].min(p[i]);
            max[i] = max[i].max(p[i]);
        }
    }

    let corners = [
        [min[0], min[1], min[2]],
        [max[0], min[1], min[2]],
        [max[0], max[1], min[2]],
        [min[0], max[1], min[2]],
        [min[0], min[1], max[2]],
        [max[0], min[1], max[2]],
        [max[0], max[1], max[2]],
        [min[0], max[1], max[2]],
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let center = [
        (min[0] + max[0]) / 2.0,
        (min[1] + max[1]) / 2.0,
        (min[2] + max[2]) / 2.0,
    ];
    for c in &corners {
        vertices.extend_from_slice(&[c[0] as f32, c[1] as f32, c[2] as f32]);
        let d = [c[0] - center[0], c[1] - center[1], c[2] - center[2]];
        let len = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        if len > 1e-12 {
            normals.extend_from_slice(&[
                (d[0] / len) as f32,
                (d[1] / len) as f32,
                (d[2] / len) as f32,
            ]);
        } else {
            normals.extend_from_slice(&[0.0, 0.0, 1.0]);
        }
    }

    #[rustfmt::skip]
    let indices: Vec<u32> = vec![
        0, 2, 1, 0, 3, 2,
        4, 5, 6, 4, 6, 7,
        0, 1, 5, 0, 5, 4,
        2, 3, 7, 2, 7, 6,
        3, 0, 4, 3, 4, 7,
        1, 2, 6, 1, 6, 5,
    ];

    RenderMesh {
        vertices,
        normals,
        indices,
        face_ranges: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_STEP: &str = "\
ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('socket'),'2;1');
FILE_NAME('socket.step','2024-01-01',(''),(''),'','','');
FILE_SCHEMA(('AP203'));
ENDSEC;
DATA;
#1 = CARTESIAN_POINT('',(0.,0.,0.));
#2 = CARTESIAN_POINT('',(10.,0.,0.));
#3 = CARTESIAN_POINT('',(10.,20.,5.));
ENDSEC;
END-ISO-10303-21;
";

    #[test]
    fn missing_file_is_not_found() {
        let err = import_step(Path::new("/nonexistent/tube.step")).unwrap_err();
        assert!(matches!(err, ImportError::NotFound { .. }));
    }

    #[test]
    fn non_step_content_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.step");
        std::fs::write(&path, "hello world").unwrap();

        let err = import_step(&path).unwrap_err();
        assert!(matches!(err, ImportError::Parse { .. }));
    }

    #[test]
    fn extent_covers_all_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("socket.step");
        std::fs::write(&path, MINIMAL_STEP).unwrap();

        let mesh = import_step(&path).unwrap();
        assert_eq!(mesh.vertices.len() / 3, 8);
        assert_eq!(mesh.indices.len() / 3, 12);

        let xs: Vec<f32> = mesh.vertices.chunks(3).map(|v| v[0]).collect();
        let ys: Vec<f32> = mesh.vertices.chunks(3).map(|v| v[1]).collect();
        let zs: Vec<f32> = mesh.vertices.chunks(3).map(|v| v[2]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 10.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 20.0);
        assert_eq!(zs.iter().cloned().fold(f32::MIN, f32::max), 5.0);
    }

    #[test]
    fn data_without_points_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hollow.step");
        std::fs::write(
            &path,
            "ISO-10303-21;\nHEADER;\nENDSEC;\nDATA;\nENDSEC;\nEND-ISO-10303-21;\n",
        )
        .unwrap();

        let err = import_step(&path).unwrap_err();
        assert!(matches!(err, ImportError::Parse { .. }));
    }
}
