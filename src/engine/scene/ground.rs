use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use crate::engine::scene::manifest::GroundPlan;

#[derive(Component)]
pub struct Ground;

#[derive(Component)]
pub struct GroundGrid;

/// Spawn the shadow-receiving ground plane with its line grid on top.
pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    plan: &GroundPlan,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(plan.extent, plan.extent))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::BLACK,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::IDENTITY,
        Ground,
    ));

    let grid_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.5, 0.5, 0.5, 0.5),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    // Lifted slightly so the lines do not fight the plane for depth
    commands.spawn((
        Mesh3d(meshes.add(create_grid_mesh(plan.extent, plan.grid_divisions))),
        MeshMaterial3d(grid_material),
        Transform::from_xyz(0.0, 0.01, 0.0),
        Visibility::Visible,
        NoFrustumCulling,
        GroundGrid,
    ));
}

/// Build one LineList mesh holding every grid line in both directions.
fn create_grid_mesh(extent: f32, divisions: u32) -> Mesh {
    let half = extent * 0.5;
    let step = extent / divisions as f32;

    let mut vertices = Vec::with_capacity(((divisions + 1) * 4) as usize);
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;

        // Line running along Z at a fixed X
        vertices.push([offset, 0.0, -half]);
        vertices.push([offset, 0.0, half]);

        // Line running along X at a fixed Z
        vertices.push([-half, 0.0, offset]);
        vertices.push([half, 0.0, offset]);
    }

    let indices = (0..vertices.len() as u32).collect();

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices));

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_mesh_has_two_line_sets() {
        let mesh = create_grid_mesh(100.0, 100);
        // 101 lines per direction, two endpoints each
        assert_eq!(mesh.count_vertices(), 101 * 4);
    }

    #[test]
    fn grid_mesh_spans_the_full_extent() {
        let mesh = create_grid_mesh(10.0, 2);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|values| values.as_float3())
            .expect("grid positions");

        let max_x = positions.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        let min_z = positions.iter().map(|p| p[2]).fold(f32::MAX, f32::min);
        assert_eq!(max_x, 5.0);
        assert_eq!(min_z, -5.0);
    }
}
