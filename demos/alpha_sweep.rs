//! Example: sweep the alpha slider over a fixed point set
//!
//! Prints how the alpha complex and alpha shape grow as the radius
//! increases along the piecewise-linear slider scale.

use rust_voronoi_proximity::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();

    let bounds = Bounds::new(1000.0, 1000.0);
    let mut set = PointSet::new();
    set.scatter(200, bounds, 7)?;

    let positions = set.positions();
    let triangulation = Triangulation::from_positions(&positions);
    println!(
        "{} points, {} Delaunay triangles\n",
        set.len(),
        triangulation.triangle_count()
    );

    println!("{:>6} {:>10} {:>10} {:>10} {:>10}", "slider", "radius", "triangles", "edges", "boundary");
    for step in 0..=10 {
        let t = step as f64 / 20.0;
        let alpha = slider_to_radius(t);
        let data = compute_alpha_data(&positions, &triangulation, alpha);
        println!(
            "{:>6.2} {:>10.2} {:>10} {:>10} {:>10}",
            t,
            alpha,
            data.triangles.len(),
            data.all_edges.len(),
            data.boundary_edges.len()
        );
    }

    Ok(())
}
