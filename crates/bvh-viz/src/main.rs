use bvh_tree::BvhTree;
use bvh_viz::{demo_triangles, OrbitCamera, TreeNavigator};
use macroquad::prelude::*;

#[macroquad::main("BVH Visualization")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tree = BvhTree::from_triangles(demo_triangles());
    log::info!(
        "BVH built: {} triangles, depth {}, {} leaves",
        tree.triangle_count(),
        tree.depth(),
        tree.leaf_count()
    );

    let mut camera = OrbitCamera::new(12.0, 0.6, 0.4).with_zoom(1.0, 3.0, 40.0);
    let mut navigator = TreeNavigator::new();

    loop {
        camera.update();
        navigator.update(&tree);

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera.to_camera3d());

        navigator.render(&tree);

        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), RED);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), GREEN);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0), BLUE);

        set_default_camera();

        draw_text("BVH Visualization", 10.0, 25.0, 20.0, WHITE);
        navigator.draw_ui(&tree, 50.0);

        draw_text("Drag mouse to rotate, scroll to zoom", 10.0, 155.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
