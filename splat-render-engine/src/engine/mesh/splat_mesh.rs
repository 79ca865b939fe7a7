use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use crate::engine::physics::cloud::SpriteCloud;

/// Marker for the entity holding the splat mesh.
#[derive(Component)]
pub struct SplatCloud;

/// Quad corners for the two triangles of one splat, in {-1, 1} units.
/// The vertex shader scales these by half the point size.
pub const SPLAT_CORNERS: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Create the splat mesh: six vertices per point, positions duplicated
/// per corner, colours as vertex colours, corners in UV0.
pub fn create_splat_mesh(positions: &[Vec3], colors: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        // Kept in the main world so the integrator can rewrite positions.
        RenderAssetUsages::default(),
    );

    let corners: Vec<[f32; 2]> = positions
        .iter()
        .flat_map(|_| SPLAT_CORNERS.into_iter())
        .collect();
    let vertex_colors: Vec<[f32; 4]> = colors
        .iter()
        .flat_map(|c| std::iter::repeat_n([c.x, c.y, c.z, 1.0], SPLAT_CORNERS.len()))
        .collect();

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, expand_positions(positions));
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corners);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vertex_colors);
    mesh
}

/// Duplicate each point centre once per quad corner.
pub fn expand_positions(positions: &[Vec3]) -> Vec<[f32; 3]> {
    positions
        .iter()
        .flat_map(|p| std::iter::repeat_n([p.x, p.y, p.z], SPLAT_CORNERS.len()))
        .collect()
}

/// Copy the integrated positions into the mesh after the physics step.
/// Runs last in the frame chain, so the renderer never sees a partial
/// update.
pub fn sync_splat_mesh(
    cloud: Option<Res<SpriteCloud>>,
    splats: Query<&Mesh3d, With<SplatCloud>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(cloud) = cloud else {
        return;
    };
    let Ok(mesh_handle) = splats.single() else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
        return;
    };

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, expand_positions(&cloud.positions));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn mesh_has_six_vertices_per_point() {
        let positions = vec![Vec3::ZERO, Vec3::X];
        let colors = vec![Vec3::ONE, Vec3::new(0.5, 0.25, 0.0)];
        let mesh = create_splat_mesh(&positions, &colors);

        let Some(VertexAttributeValues::Float32x3(verts)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("position attribute missing");
        };
        assert_eq!(verts.len(), 12);
        // All six corners of a quad share the point centre.
        assert!(verts[..6].iter().all(|v| *v == [0.0, 0.0, 0.0]));
        assert!(verts[6..].iter().all(|v| *v == [1.0, 0.0, 0.0]));
    }

    #[test]
    fn corner_pattern_repeats_per_point() {
        let mesh = create_splat_mesh(&[Vec3::ZERO, Vec3::Y], &[Vec3::ONE, Vec3::ONE]);
        let Some(VertexAttributeValues::Float32x2(corners)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0)
        else {
            panic!("corner attribute missing");
        };
        assert_eq!(&corners[..6], SPLAT_CORNERS.as_slice());
        assert_eq!(&corners[6..], SPLAT_CORNERS.as_slice());
    }

    #[test]
    fn colours_carry_opaque_alpha() {
        let mesh = create_splat_mesh(&[Vec3::ZERO], &[Vec3::new(0.1, 0.2, 0.3)]);
        let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("colour attribute missing");
        };
        assert_eq!(colors.len(), 6);
        assert!(colors.iter().all(|c| *c == [0.1, 0.2, 0.3, 1.0]));
    }

    #[test]
    fn expanded_positions_follow_the_buffer() {
        let expanded = expand_positions(&[Vec3::new(2.0, 3.0, 4.0)]);
        assert_eq!(expanded.len(), 6);
        assert!(expanded.iter().all(|v| *v == [2.0, 3.0, 4.0]));
    }
}
