// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof writers: Wavefront OBJ and JSON

use anyhow::Result;
use clap::ValueEnum;
use roofkit_geometry::{Mesh, RoofGeometry, RoofType};
use serde::Serialize;
use std::io::Write;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Obj,
    Json,
}

impl Format {
    /// Guess the format from an output path's extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Write `roof` in `format`
pub fn write_roof<W: Write>(
    out: &mut W,
    roof: &RoofGeometry,
    roof_type: RoofType,
    format: Format,
) -> Result<()> {
    match format {
        Format::Obj => write_obj(out, roof, roof_type),
        Format::Json => write_json(out, roof, roof_type),
    }
}

/// Write a roof as OBJ with objects `roof` and `gable`
pub fn write_obj<W: Write>(out: &mut W, roof: &RoofGeometry, roof_type: RoofType) -> Result<()> {
    writeln!(out, "# Generated by roofkit")?;
    writeln!(out, "# Roof type: {}", roof_type)?;
    writeln!(out, "# Coordinate system: Y-up (OBJ convention)")?;
    writeln!(out)?;

    let mut vertex_offset = write_obj_object(out, "roof", &roof.roof_mesh, 0)?;
    if let Some(gable) = &roof.gable_mesh {
        if !gable.is_empty() {
            vertex_offset = write_obj_object(out, "gable", gable, vertex_offset)?;
        }
    }

    tracing::debug!(vertices = vertex_offset, "wrote OBJ");
    Ok(())
}

/// Returns the vertex offset for the next object
fn write_obj_object<W: Write>(out: &mut W, name: &str, mesh: &Mesh, offset: u32) -> Result<u32> {
    writeln!(out, "o {}", name)?;

    // Z-up to Y-up: OBJ (x, y, z) = (x, z, -y)
    for p in mesh.positions.chunks_exact(3) {
        writeln!(out, "v {:.6} {:.6} {:.6}", p[0], p[2], -p[1])?;
    }
    for n in mesh.normals.chunks_exact(3) {
        writeln!(out, "vn {:.6} {:.6} {:.6}", n[0], n[2], -n[1])?;
    }

    // Normals are per vertex, so v and vn share indices. The axis swap is a
    // rotation, so winding is kept as is.
    for tri in mesh.indices.chunks_exact(3) {
        let i0 = tri[0] + offset + 1;
        let i1 = tri[1] + offset + 1;
        let i2 = tri[2] + offset + 1;
        writeln!(out, "f {}//{} {}//{} {}//{}", i0, i0, i1, i1, i2, i2)?;
    }
    writeln!(out)?;

    Ok(offset + mesh.vertex_count() as u32)
}

#[derive(Serialize)]
struct RoofDocument<'a> {
    roof_type: RoofType,
    roof_mesh: &'a Mesh,
    gable_mesh: Option<&'a Mesh>,
}

/// Write a roof as a pretty-printed JSON document
pub fn write_json<W: Write>(out: &mut W, roof: &RoofGeometry, roof_type: RoofType) -> Result<()> {
    let doc = RoofDocument {
        roof_type,
        roof_mesh: &roof.roof_mesh,
        gable_mesh: roof.gable_mesh.as_ref(),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}
