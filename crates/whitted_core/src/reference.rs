//! The reference scene: four mirrored spheres over a checkerboard floor.

use glam::DVec3;

use crate::scene::{
    BrdfDescription, CameraDescription, LightDescription, PrimitiveDescription, Resolution,
    SceneDescription, ShapeDescription, TracerDescription,
};

const WHITE_ROWS: i32 = 10;
const WHITE_COLUMNS: i32 = 16;
const BLACK_ROWS: i32 = 4;

impl SceneDescription {
    /// The reference scene at 250x250.
    ///
    /// Every surface is a perfect mirror (`kr = 1`) with white highlights and
    /// no ambient term. The floor is a strip of white unit tiles with a 5x4
    /// patch of dark tiles filling the gaps in front of the spheres.
    pub fn reference() -> Self {
        let white = DVec3::ONE;
        let black = DVec3::ZERO;
        let mirror = |kd: DVec3| BrdfDescription::new(kd, white, black, 1.0);

        let sphere = |center: DVec3, radius: f64| ShapeDescription::Sphere { center, radius };
        let tile = |x: i32, z: i32| ShapeDescription::Square {
            center: DVec3::new(x as f64, -1.0, z as f64),
            normal: DVec3::Y,
            size: 1.0,
        };

        let mut scene = SceneDescription {
            name: "reference".to_string(),
            resolution: Resolution::new(250, 250),
            camera: CameraDescription::default(),
            tracer: TracerDescription::default(),
            lights: vec![
                LightDescription::point(DVec3::new(5.0, 10.0, 5.0), DVec3::splat(0.6)),
                LightDescription::point(DVec3::new(-5.0, 0.0, 5.0), white),
            ],
            primitives: Vec::new(),
        };

        scene.add_primitive(
            PrimitiveDescription::new(
                sphere(DVec3::new(-0.8, -0.6, 0.0), 0.4),
                mirror(DVec3::new(1.0, 1.0, 0.25)),
            )
            .with_name("yellow sphere"),
        );
        scene.add_primitive(
            PrimitiveDescription::new(
                sphere(DVec3::new(0.8, -0.6, 0.0), 0.4),
                mirror(DVec3::new(0.25, 1.0, 0.25)),
            )
            .with_name("green sphere"),
        );
        scene.add_primitive(
            PrimitiveDescription::new(
                sphere(DVec3::new(0.0, -0.6, 0.8), 0.4),
                mirror(DVec3::new(1.0, 0.25, 0.25)),
            )
            .with_name("red sphere"),
        );
        scene.add_primitive(
            PrimitiveDescription::new(
                sphere(DVec3::new(0.0, 0.2, 0.0), 0.8),
                mirror(DVec3::new(0.25, 0.25, 1.0)),
            )
            .with_name("big sphere"),
        );

        // Alternate columns shift by one unit in z, leaving a checker of gaps
        for row in 0..WHITE_ROWS {
            for column in 0..=WHITE_COLUMNS {
                let x = -WHITE_COLUMNS / 2 + column + 1;
                let z = 2 - column % 2 - row * 2;
                scene.add_primitive(PrimitiveDescription::new(tile(x, z), mirror(DVec3::splat(0.9))));
            }
        }
        for row in 0..BLACK_ROWS {
            for column in 0..=BLACK_ROWS {
                let x = -BLACK_ROWS / 2 + column;
                let z = 2 - column % 2 - row * 2;
                scene.add_primitive(PrimitiveDescription::new(tile(x, z), mirror(DVec3::splat(0.1))));
            }
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene_is_valid() {
        let scene = SceneDescription::reference();
        assert!(scene.validate().is_ok());
        assert_eq!(scene.lights.len(), 2);
        // 4 spheres + 10x17 white tiles + 4x5 dark tiles
        assert_eq!(scene.primitives.len(), 4 + 170 + 20);
    }

    #[test]
    fn test_reference_floor_tiles_do_not_overlap() {
        let scene = SceneDescription::reference();
        let mut centers: Vec<(i64, i64)> = scene
            .primitives
            .iter()
            .filter_map(|p| match p.shape {
                ShapeDescription::Square { center, .. } => Some((center.x as i64, center.z as i64)),
                _ => None,
            })
            .collect();

        let total = centers.len();
        centers.sort_unstable();
        centers.dedup();
        assert_eq!(centers.len(), total);
    }
}
