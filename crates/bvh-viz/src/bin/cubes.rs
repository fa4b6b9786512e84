use bvh_tree::{BvhTree, Triangle};
use bvh_viz::{cube_triangles, OrbitCamera, TreeNavigator};
use macroquad::prelude::*;
use nalgebra::Point3;

const NUM_CUBES: usize = 24;
const WORLD_SIZE: f32 = 30.0;
const MIN_CUBE_SIZE: f32 = 1.0;
const MAX_CUBE_SIZE: f32 = 4.0;

/// Simple seeded random number generator (LCG).
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_f32(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.state >> 40) as f32) / ((1u64 << 24) as f32)
    }

    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

/// Scatters random cubes over the world space.
fn generate_random_cubes(seed: u64) -> Vec<Triangle> {
    let mut rng = Rng::new(seed);
    let mut triangles = Vec::with_capacity(NUM_CUBES * 12);

    for _ in 0..NUM_CUBES {
        let x = (rng.next_f32() - 0.5) * WORLD_SIZE;
        let y = (rng.next_f32() - 0.5) * WORLD_SIZE;
        let z = (rng.next_f32() - 0.5) * WORLD_SIZE;
        let size = rng.range(MIN_CUBE_SIZE, MAX_CUBE_SIZE);

        triangles.extend(cube_triangles(Point3::new(x, y, z), size));
    }

    triangles
}

#[macroquad::main("BVH Random Cubes")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let triangles = generate_random_cubes(42);
    let triangle_count = triangles.len();
    log::info!("Created {} triangles from {} cubes", triangle_count, NUM_CUBES);

    let tree = BvhTree::from_triangles(triangles);
    log::info!(
        "BVH built: {} nodes, {} leaves, depth {}",
        tree.node_count(),
        tree.leaf_count(),
        tree.depth()
    );

    let mut camera = OrbitCamera::new(50.0, 0.0, 0.3).with_zoom(3.0, 10.0, 150.0);
    if let Some(bounds) = tree.bounds() {
        camera = camera.with_target(bounds);
    }
    let mut navigator = TreeNavigator::new();

    loop {
        camera.update();
        navigator.update(&tree);

        clear_background(Color::from_rgba(15, 15, 25, 255));
        set_camera(&camera.to_camera3d());

        navigator.render(&tree);

        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(8.0, 0.0, 0.0), RED);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 8.0, 0.0), GREEN);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 8.0), BLUE);

        set_default_camera();

        draw_text(
            &format!("BVH Random Cubes - Total: {} triangles", triangle_count),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("Tree depth: {} | Nodes: {}", tree.depth(), tree.node_count()),
            10.0,
            45.0,
            18.0,
            GRAY,
        );

        navigator.draw_ui(&tree, 70.0);

        draw_text("Drag mouse to rotate, scroll to zoom", 10.0, 175.0, 16.0, DARKGRAY);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 195.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
