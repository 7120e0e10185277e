//! Complete workflow demonstration for rust_voronoi_proximity

use rust_voronoi_proximity::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();

    println!("=== rust_voronoi_proximity Complete Demo ===\n");

    // Step 1: Scatter points
    println!("Step 1: Scattering points...");
    let bounds = Bounds::new(800.0, 600.0);
    let mut set = PointSet::new();
    set.scatter(80, bounds, 12345)?;
    let centre = set.add(400.0, 300.0);
    println!("  {} points in {}x{}", set.len(), bounds.width, bounds.height);

    // Step 2: Derive every mode
    println!("\nStep 2: Deriving structures...");
    for mode in GraphMode::ALL {
        let config = DeriveConfigBuilder::new()
            .bounds(bounds)?
            .alpha(slider_to_radius(0.1))?
            .mode(mode)
            .build()?;
        let derived = compute_derived_structures(set.points(), &config);
        println!(
            "  {:<18} cells: {:>3}  pixel groups: {:>3}  edges: {:>3}  triangles: {:>3}",
            mode.as_str(),
            derived.cells.len(),
            derived.pixel_cells.len(),
            derived.graph_edges.len(),
            derived.alpha_triangles.len()
        );
    }

    // Step 3: Graph lengths
    println!("\nStep 3: Graph lengths:");
    let positions = set.positions();
    let candidates = Triangulation::from_positions(&positions).candidate_edges();
    let graphs = [
        ("delaunay", candidates.clone()),
        ("gabriel", gabriel_edges(&positions, &candidates)),
        ("rng", relative_neighborhood_edges(&positions, &candidates)),
        ("mst", minimum_spanning_tree_edges(&positions)),
    ];
    for (name, edges) in &graphs {
        println!(
            "  {:<9} {:>4} edges, total length {:.1}",
            name,
            edges.len(),
            graph::total_length(edges, &positions)
        );
    }

    // Step 4: Hit testing
    println!("\nStep 4: Hit testing:");
    let config = DeriveConfig::default();
    let derived = compute_derived_structures(set.points(), &DeriveConfig { mode: GraphMode::Voronoi, ..config });
    let probe = DVec2::new(401.0, 299.0);
    if let Some(cell) = derived.cell_containing(probe) {
        println!("  {:?} lies in cell {} (point id {})", probe, cell, set.points()[cell].id);
    }
    println!("  centre point id {} is at index {:?}", centre, set.index_of(centre));

    #[cfg(feature = "spatial-index")]
    {
        let index = set.spatial_index();
        println!("  nearest point to {:?}: {:?}", probe, index.find_nearest(probe));
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
