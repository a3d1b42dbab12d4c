//! OBJ frame parsing
//!
//! Reads the subset of OBJ this pipeline consumes: `v` positions, `vn`
//! normals, and `f` face records carrying `v//vn` or `v/vt/vn` style vertex
//! refs. Faces are recorded one ref per occurrence in file order - no
//! triangulation, no deduplication - since the flattened sheet layout mirrors
//! the file's own face-vertex stream.

use super::types::{FaceVertexRef, ObjMesh};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load an OBJ frame file
pub fn load_obj(path: &Path) -> Result<ObjMesh> {
    let file = File::open(path).with_context(|| format!("Failed to open OBJ: {:?}", path))?;
    parse_obj(BufReader::new(file))
}

/// Parse OBJ records from a reader
pub fn parse_obj(reader: impl BufRead) -> Result<ObjMesh> {
    let mut mesh = ObjMesh::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "v" if parts.len() >= 4 => {
                let x: f32 = parts[1].parse().unwrap_or(0.0);
                let y: f32 = parts[2].parse().unwrap_or(0.0);
                let z: f32 = parts[3].parse().unwrap_or(0.0);
                mesh.positions.push([x, y, z]);
            }
            "vn" if parts.len() >= 4 => {
                let x: f32 = parts[1].parse().unwrap_or(0.0);
                let y: f32 = parts[2].parse().unwrap_or(0.0);
                let z: f32 = parts[3].parse().unwrap_or(0.0);
                mesh.normals.push([x, y, z]);
            }
            "f" => {
                for vert in &parts[1..] {
                    let Some((vi, vni)) = parse_obj_vertex(vert) else {
                        continue;
                    };
                    let Some(vni) = vni else {
                        bail!("face vertex {:?} is missing a normal index", vert);
                    };
                    mesh.faces.push(FaceVertexRef {
                        position: vi,
                        normal: vni,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(mesh)
}

/// Parse OBJ vertex reference: "v", "v/vt", "v/vt/vn", or "v//vn"
///
/// Returns 0-based (position, normal) indices; the texcoord slot is ignored.
fn parse_obj_vertex(s: &str) -> Option<(u32, Option<u32>)> {
    let parts: Vec<&str> = s.split('/').collect();

    let vi = parts.first()?.parse::<u32>().ok()?.checked_sub(1)?; // OBJ indices are 1-based

    let vni = parts
        .get(2)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<u32>().ok())
        .and_then(|i| i.checked_sub(1));

    Some((vi, vni))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<ObjMesh> {
        parse_obj(src.as_bytes())
    }

    #[test]
    fn test_parse_triangle() {
        let mesh = parse(
            "# frame 0\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             vn 0 0 1\n\
             f 1//1 2//1 3//1\n",
        )
        .unwrap();

        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.normals, vec![[0.0, 0.0, 1.0]]);
        assert_eq!(
            mesh.faces,
            vec![
                FaceVertexRef { position: 0, normal: 0 },
                FaceVertexRef { position: 1, normal: 0 },
                FaceVertexRef { position: 2, normal: 0 },
            ]
        );
    }

    #[test]
    fn test_quad_stays_a_quad() {
        // No triangulation: 4 face vertices flatten to 4 refs
        let mesh = parse(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
             vn 0 0 1\n\
             f 1//1 2//1 3//1 4//1\n",
        )
        .unwrap();

        assert_eq!(mesh.flattened_len(), 4);
    }

    #[test]
    fn test_slash_forms() {
        let mesh = parse(
            "v 0 0 0\nvt 0 0\nvn 0 1 0\n\
             f 1/1/1 1//1 1/1/1\n",
        )
        .unwrap();

        assert_eq!(mesh.faces.len(), 3);
        assert!(mesh.faces.iter().all(|r| r.position == 0 && r.normal == 0));
    }

    #[test]
    fn test_missing_normal_index_fails() {
        assert!(parse("v 0 0 0\nf 1 1 1\n").is_err());
        assert!(parse("v 0 0 0\nvt 0 0\nf 1/1 1/1 1/1\n").is_err());
    }

    #[test]
    fn test_face_order_is_file_order() {
        let mesh = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vn 0 0 1\nvn 1 0 0\n\
             f 3//2 1//1 2//2\n",
        )
        .unwrap();

        let refs: Vec<(u32, u32)> = mesh.faces.iter().map(|r| (r.position, r.normal)).collect();
        assert_eq!(refs, vec![(2, 1), (0, 0), (1, 1)]);
    }

    #[test]
    fn test_no_faces_is_empty_frame() {
        let mesh = parse("v 0 0 0\nvn 0 0 1\n").unwrap();
        assert_eq!(mesh.flattened_len(), 0);
    }

    #[test]
    fn test_out_of_range_indices_survive_parsing() {
        // Range checking happens during flattening, not here
        let mesh = parse("v 0 0 0\nvn 0 0 1\nf 9//9 1//1 1//1\n").unwrap();
        assert_eq!(mesh.faces[0], FaceVertexRef { position: 8, normal: 8 });
    }
}
