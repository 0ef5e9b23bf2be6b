//! Curvelis scene demo: builds a small scene, drags a Bézier handle and
//! prints the recorded draw commands.
//!
//! Usage:
//! ```text
//! cargo run --example curve_scene
//! RUST_LOG=curvelis=debug cargo run --example curve_scene
//! ```

use std::f64::consts::TAU;

use curvelis::geometry::{CubicBezier, CurveDomain};
use curvelis::math::Point2;
use curvelis::render::{Color, RecordingSurface, Style};
use curvelis::scene::{
    BezierCurve, CasteljauCurve, Circle, DragEvent, DragState, ParametricCurve, Shape, ShapeStore, StraightLine,
};

fn main() -> curvelis::Result<()> {
    // Default: WARN for everything, INFO for curvelis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curvelis=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curve_scene=info".parse().unwrap_or_default())
        .add_directive("curvelis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = ShapeStore::new();

    store.add(StraightLine::new(
        Point2::new(10.0, 10.0),
        Point2::new(200.0, 10.0),
        Style::new(1.0, "#333".parse()?)?,
    ));
    store.add(Circle::new(Point2::new(300.0, 100.0), 40.0, Style::default())?);
    store.add(
        ParametricCurve::new(
            |t: f64| 300.0 + 60.0 * t.cos(),
            |t: f64| 250.0 + 30.0 * (2.0 * t).sin(),
            CurveDomain::new(0.0, TAU)?,
            48,
        )?
        .with_tickmarks(true),
    );

    let arch = CubicBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 100.0),
        Point2::new(100.0, 100.0),
        Point2::new(100.0, 0.0),
    );
    let bezier = store.add(BezierCurve::new(arch));

    let mut casteljau = CasteljauCurve::new(arch, 0.5)?;
    casteljau.set_depth(2)?;
    casteljau.set_line_color(Color::rgb(0x80, 0x80, 0x80));
    store.add(casteljau);

    // Drag p1 of the Bézier curve from (0, 100) to (0, 200).
    let handles = store.handles(bezier)?;
    let mut drag = DragState::default();
    if drag.press(&store, &handles, &Point2::new(1.0, 99.0))? {
        for y in [125.0, 150.0, 200.0] {
            drag.drag(&mut store, &DragEvent { position: Point2::new(0.0, y) })?;
        }
    }
    drag.release();

    if let curvelis::scene::ShapeKind::Bezier(curve) = store.get(bezier)? {
        tracing::info!(midpoint = ?curve.point_at(0.5), "dragged bezier control point");
    }

    let mut surface = RecordingSurface::new();
    let outcome = store.draw(&mut surface)?;
    if let Some(polygon) = store.control_polygon(bezier)? {
        polygon.draw(&store, &mut surface)?;
    }
    for handle in &handles {
        handle.draw(&store, &mut surface)?;
    }

    tracing::info!(
        shapes = store.len(),
        commands = surface.commands().len(),
        strokes = surface.stroke_count(),
        ?outcome,
        "scene drawn"
    );
    for command in surface.commands() {
        println!("{command:?}");
    }

    Ok(())
}
