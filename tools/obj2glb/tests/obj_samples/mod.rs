//! Small OBJ/MTL files written to disk for integration tests

use std::fs;
use std::io;
use std::path::Path;

/// Triangle in the XY plane with normals and texture coordinates
pub fn write_triangle_obj(path: &Path) -> io::Result<()> {
    fs::write(
        path,
        "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1
",
    )
}

/// Unit cube around the origin, six quad faces, positions only
pub fn write_cube_obj(path: &Path) -> io::Result<()> {
    fs::write(
        path,
        "\
v -0.5 -0.5 -0.5
v 0.5 -0.5 -0.5
v 0.5 0.5 -0.5
v -0.5 0.5 -0.5
v -0.5 -0.5 0.5
v 0.5 -0.5 0.5
v 0.5 0.5 0.5
v -0.5 0.5 0.5
f 1 2 3 4
f 5 8 7 6
f 1 5 6 2
f 2 6 7 3
f 3 7 8 4
f 5 1 4 8
",
    )
}

/// One vertex on each positive axis, in a known order, for checking the
/// orientation correction
pub fn write_axis_marker_obj(path: &Path) -> io::Result<()> {
    fs::write(
        path,
        "\
v 0.0 1.0 0.0
v 0.0 0.0 1.0
v 1.0 0.0 0.0
f 1 2 3
",
    )
}

/// A file tobj rejects outright
pub fn write_corrupt_obj(path: &Path) -> io::Result<()> {
    fs::write(path, "v 0.0 oops 0.0\nf 1 2 3\n")
}

/// MTL library with a single red material
pub fn write_shared_mtl(path: &Path) -> io::Result<()> {
    fs::write(
        path,
        "\
newmtl shared_red
Kd 0.8 0.1 0.1
Ns 32.0
d 1.0
",
    )
}

/// Triangle referencing a material from `mtl_file`
pub fn write_mtl_user_obj(path: &Path, mtl_file: &str) -> io::Result<()> {
    fs::write(
        path,
        format!(
            "\
mtllib {mtl_file}
usemtl shared_red
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
"
        ),
    )
}
