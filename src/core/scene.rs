// Scene data model and construction.
//
// The scene is a flat list of mesh and light nodes; candle flames and their
// point lights are paired through an explicit indexed table built at
// construction time, so nothing is ever looked up by name at runtime.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use super::constants::*;
use super::geometry::{self, MeshData};

/// Geometry classes shared by every mesh in the scene. The renderer uploads
/// one triangle mesh per kind and draws each kind instanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryKind {
    CakePlate,
    CakeBody,
    CandleBody,
    Wick,
    Flame,
    Topping,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 6] = [
        GeometryKind::CakePlate,
        GeometryKind::CakeBody,
        GeometryKind::CandleBody,
        GeometryKind::Wick,
        GeometryKind::Flame,
        GeometryKind::Topping,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Tessellate this kind at its real-world dimensions. Instances only
    /// translate/rotate (and non-uniformly scale flames, which are unlit).
    pub fn mesh(self) -> MeshData {
        match self {
            GeometryKind::CakePlate => geometry::cylinder(
                CAKE_PLATE_RADIUS,
                CAKE_PLATE_RADIUS,
                CAKE_PLATE_HEIGHT,
                RADIAL_SEGMENTS,
            ),
            GeometryKind::CakeBody => {
                geometry::cylinder(CAKE_RADIUS, CAKE_RADIUS, CAKE_BODY_HEIGHT, RADIAL_SEGMENTS)
            }
            GeometryKind::CandleBody => {
                geometry::cylinder(CANDLE_RADIUS, CANDLE_RADIUS, CANDLE_HEIGHT, RADIAL_SEGMENTS)
            }
            GeometryKind::Wick => {
                geometry::cylinder(WICK_RADIUS, WICK_RADIUS, WICK_HEIGHT, RADIAL_SEGMENTS)
            }
            GeometryKind::Flame => geometry::cone(FLAME_RADIUS, FLAME_HEIGHT, RADIAL_SEGMENTS),
            GeometryKind::Topping => {
                geometry::cuboid(TOPPING_SIZE.x, TOPPING_SIZE.y, TOPPING_SIZE.z)
            }
        }
    }
}

/// Lambert-lit opaque surface, or an additive unlit flame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialKind {
    Lit,
    Flame,
}

#[derive(Clone, Debug)]
pub struct MeshNode {
    pub geometry: GeometryKind,
    pub material: MaterialKind,
    pub color: Vec3,
    pub opacity: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub scale: Vec3,
}

#[derive(Clone, Debug)]
pub struct PointLightNode {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub meshes: Vec<MeshNode>,
    pub lights: Vec<PointLightNode>,
    pub ambient: Option<Vec3>,
    pub background: Vec3,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            lights: Vec::new(),
            ambient: None,
            background: BACKGROUND_COLOR,
        }
    }

    /// Total node count: meshes, point lights, plus the ambient light if set.
    pub fn node_count(&self) -> usize {
        self.meshes.len() + self.lights.len() + usize::from(self.ambient.is_some())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// One candle's flame mesh and point light, paired by index into the scene's
/// node lists, plus the per-flame values fixed at construction time.
#[derive(Clone, Copy, Debug)]
pub struct CandleRig {
    pub flame_mesh: usize,
    pub flame_light: usize,
    pub rest_y: f32,
    /// Flicker base scale, randomized once per flame.
    pub base_scale: f32,
}

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub topping_count: usize,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            topping_count: DEFAULT_TOPPING_COUNT,
        }
    }
}

/// Build the whole scene and the candle table.
pub fn build_scene(params: &SceneParams, rng: &mut impl Rng) -> (Scene, Vec<CandleRig>) {
    let mut scene = Scene::new();
    add_cake(&mut scene);
    add_candles(&mut scene);
    let rigs = add_flames(&mut scene, rng);
    add_toppings(&mut scene, params.topping_count, rng);
    add_general_lighting(&mut scene);
    (scene, rigs)
}

fn lit_mesh(geometry: GeometryKind, color: Vec3, position: Vec3) -> MeshNode {
    MeshNode {
        geometry,
        material: MaterialKind::Lit,
        color,
        opacity: 1.0,
        position,
        yaw: 0.0,
        scale: Vec3::ONE,
    }
}

pub fn add_cake(scene: &mut Scene) {
    scene.meshes.push(lit_mesh(
        GeometryKind::CakePlate,
        CAKE_BASE_COLOR,
        Vec3::new(0.0, CAKE_BASE_Y, 0.0),
    ));
    scene
        .meshes
        .push(lit_mesh(GeometryKind::CakeBody, CAKE_BODY_COLOR, Vec3::ZERO));
    scene.meshes.push(lit_mesh(
        GeometryKind::CakePlate,
        CAKE_TOP_COLOR,
        Vec3::new(0.0, CAKE_TOP_Y, 0.0),
    ));
}

pub fn add_candles(scene: &mut Scene) {
    for &x in &CANDLE_COLUMNS {
        scene.meshes.push(lit_mesh(
            GeometryKind::CandleBody,
            CANDLE_COLOR,
            Vec3::new(x, CANDLE_Y, 0.0),
        ));
        scene.meshes.push(lit_mesh(
            GeometryKind::Wick,
            WICK_COLOR,
            Vec3::new(x, WICK_Y, 0.0),
        ));
    }
}

/// Add one flame and one paired point light per candle and return the table
/// linking them by candle index.
pub fn add_flames(scene: &mut Scene, rng: &mut impl Rng) -> Vec<CandleRig> {
    CANDLE_COLUMNS
        .iter()
        .map(|&x| {
            let position = Vec3::new(x, FLAME_REST_Y, 0.0);
            let flame_mesh = scene.meshes.len();
            scene.meshes.push(MeshNode {
                geometry: GeometryKind::Flame,
                material: MaterialKind::Flame,
                color: FLAME_COLOR_EMBER,
                opacity: FLAME_OPACITY,
                position,
                yaw: 0.0,
                scale: Vec3::ONE,
            });
            let flame_light = scene.lights.len();
            scene.lights.push(PointLightNode {
                position,
                color: FLAME_LIGHT_COLOR,
                intensity: FLAME_LIGHT_INTENSITY,
                range: FLAME_LIGHT_RANGE,
            });
            CandleRig {
                flame_mesh,
                flame_light,
                rest_y: FLAME_REST_Y,
                base_scale: rng.gen_range(FLICKER_BASE_SCALE_MIN..FLICKER_BASE_SCALE_MAX),
            }
        })
        .collect()
}

/// Scatter randomly colored toppings over the cake's lateral surface using
/// polar placement: random angle, fixed radius, random height in the body.
pub fn add_toppings(scene: &mut Scene, count: usize, rng: &mut impl Rng) {
    let half_body = CAKE_BODY_HEIGHT * 0.5;
    for _ in 0..count {
        let angle = rng.gen_range(0.0..TAU);
        let height = rng.gen_range(-half_body..half_body);
        scene.meshes.push(MeshNode {
            geometry: GeometryKind::Topping,
            material: MaterialKind::Lit,
            color: Vec3::new(rng.gen(), rng.gen(), rng.gen()),
            opacity: 1.0,
            position: Vec3::new(angle.cos() * CAKE_RADIUS, height, angle.sin() * CAKE_RADIUS),
            // align the long axis with the cake's curvature
            yaw: -angle,
            scale: Vec3::ONE,
        });
    }
}

pub fn add_general_lighting(scene: &mut Scene) {
    scene.lights.push(PointLightNode {
        position: KEY_LIGHT_POSITION,
        color: Vec3::ONE,
        intensity: KEY_LIGHT_INTENSITY,
        range: KEY_LIGHT_RANGE,
    });
    scene.ambient = Some(AMBIENT_COLOR);
}
