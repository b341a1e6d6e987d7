use glam::Vec3;
use std::f32::consts::TAU;

/// Position + normal vertex uploaded straight to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

#[inline]
fn unit(v: [f32; 3]) -> [f32; 3] {
    Vec3::from(v).normalize().to_array()
}

/// Open or capped cylinder centered at the origin, y in [-height/2, height/2].
/// A zero top or bottom radius omits that cap.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;

    // Side rings; the seam vertex is duplicated so each column keeps one normal
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        let normal = unit([cos, slope, sin]);
        mesh.vertices.push(Vertex {
            position: [cos * radius_top, half, sin * radius_top],
            normal,
        });
        mesh.vertices.push(Vertex {
            position: [cos * radius_bottom, -half, sin * radius_bottom],
            normal,
        });
    }
    for i in 0..segments {
        let a = (i * 2) as u16;
        let b = a + 1;
        let c = a + 2;
        let d = a + 3;
        mesh.indices.extend_from_slice(&[a, c, b, c, d, b]);
    }

    if radius_top > 0.0 {
        cap(&mut mesh, radius_top, half, 1.0, segments);
    }
    if radius_bottom > 0.0 {
        cap(&mut mesh, radius_bottom, -half, -1.0, segments);
    }
    mesh
}

fn cap(mesh: &mut MeshData, radius: f32, y: f32, direction: f32, segments: u32) {
    let normal = [0.0, direction, 0.0];
    let base = mesh.vertices.len() as u16;
    mesh.vertices.push(Vertex {
        position: [0.0, y, 0.0],
        normal,
    });
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.vertices.push(Vertex {
            position: [cos * radius, y, sin * radius],
            normal,
        });
    }
    for i in 0..segments as u16 {
        let rim = base + 1 + i;
        if direction > 0.0 {
            mesh.indices.extend_from_slice(&[base, rim + 1, rim]);
        } else {
            mesh.indices.extend_from_slice(&[base, rim, rim + 1]);
        }
    }
}

/// Cone with its apex up, base at -height/2. The apex ring degenerates to a
/// point, which keeps the side normals per column.
pub fn cone(radius: f32, height: f32, segments: u32) -> MeshData {
    cylinder(0.0, radius, height, segments)
}

/// Axis-aligned box centered at the origin.
pub fn cuboid(size_x: f32, size_y: f32, size_z: f32) -> MeshData {
    let (hx, hy, hz) = (size_x * 0.5, size_y * 0.5, size_z * 0.5);
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [1.0, 0.0, 0.0],
            [
                [hx, -hy, -hz],
                [hx, hy, -hz],
                [hx, hy, hz],
                [hx, -hy, hz],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-hx, -hy, hz],
                [-hx, hy, hz],
                [-hx, hy, -hz],
                [-hx, -hy, -hz],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-hx, hy, -hz],
                [-hx, hy, hz],
                [hx, hy, hz],
                [hx, hy, -hz],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-hx, -hy, hz],
                [-hx, -hy, -hz],
                [hx, -hy, -hz],
                [hx, -hy, hz],
            ],
        ),
        (
            [0.0, 0.0, 1.0],
            [
                [-hx, -hy, hz],
                [hx, -hy, hz],
                [hx, hy, hz],
                [-hx, hy, hz],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [hx, -hy, -hz],
                [-hx, -hy, -hz],
                [-hx, hy, -hz],
                [hx, hy, -hz],
            ],
        ),
    ];

    let mut mesh = MeshData::default();
    for (normal, corners) in faces {
        let base = mesh.vertices.len() as u16;
        for position in corners {
            mesh.vertices.push(Vertex { position, normal });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}
