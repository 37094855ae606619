//! Background animator
//!
//! Owns the decorative shapes and renders one frame of the background per
//! call to `frame`:
//!
//! 1. clear the surface
//! 2. dot grid
//! 3. connection lines between nearby shapes
//! 4. advance, wrap and stroke every shape
//! 5. request the next frame
//!
//! ## Scale
//!
//! Connections are found with a plain pairwise pass, N·(N-1)/2 distance
//! checks per frame (378 for the default 28 shapes, 1770 at `MAX_SHAPES`).
//! Configurations above `MAX_SHAPES` are rejected.

use std::ops::Range;

use nalgebra::distance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::scheduler::{FrameScheduler, StopHandle};
use super::shape::Shape;
use crate::render::{ColorError, Rgba, StrokeStyle, Surface};
use crate::shapes::Outline;

/// Default number of shapes
pub const SHAPE_COUNT: usize = 28;
/// Upper bound on the shape count, keeping the pairwise pass small
pub const MAX_SHAPES: usize = 60;

/// Distance between grid dots
pub const GRID_SPACING: f32 = 60.0;
/// Grid dot radius
pub const GRID_DOT_RADIUS: f32 = 1.2;
/// Grid dot color
pub const GRID_COLOR: Rgba = Rgba::new(96, 130, 182, 0.18);

/// Shapes closer than this are joined by a line
pub const CONNECT_DISTANCE: f32 = 180.0;
/// Opacity of a connection line between coincident shapes
pub const CONNECT_MAX_ALPHA: f32 = 0.09;
/// Connection line color (alpha replaced per line)
pub const CONNECT_COLOR: Rgba = Rgba::new(96, 130, 182, 1.0);
pub const CONNECT_LINE_WIDTH: f32 = 0.8;

/// Outline stroke width
pub const SHAPE_LINE_WIDTH: f32 = 1.0;

/// Errors that can occur while setting up the animator
#[derive(Error, Debug, PartialEq)]
pub enum AnimatorError {
    #[error("Drawing surface unavailable ({width}x{height})")]
    SurfaceUnavailable { width: f32, height: f32 },

    #[error("Palette is empty")]
    EmptyPalette,

    #[error("Invalid palette color: {0}")]
    Palette(#[from] ColorError),

    #[error("Invalid alpha range {0}..{1}")]
    InvalidAlphaRange(f32, f32),

    #[error("Too many shapes: {0} (max {MAX_SHAPES})")]
    TooManyShapes(usize),
}

/// Size of the area the background covers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, rejecting sizes no surface could have
    pub fn new(width: f32, height: f32) -> Result<Self, AnimatorError> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if usable(width) && usable(height) {
            Ok(Self { width, height })
        } else {
            Err(AnimatorError::SurfaceUnavailable { width, height })
        }
    }
}

/// Animator configuration
#[derive(Clone, Debug)]
pub struct AnimatorConfig {
    /// Number of shapes, fixed for the animator's lifetime
    pub shape_count: usize,
    /// Base colors as `#rrggbb`
    pub palette: Vec<String>,
    /// Lowest shape alpha
    pub alpha_min: f32,
    /// Highest shape alpha (exclusive)
    pub alpha_max: f32,
    /// Seed for shape generation; `None` draws one from the OS
    pub seed: Option<u64>,
    pub show_grid: bool,
    pub show_connections: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            shape_count: SHAPE_COUNT,
            palette: ["#6082b6", "#4a6fa5", "#1e2d4a", "#6082b6", "#8aaad4"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            alpha_min: 0.12,
            alpha_max: 0.30,
            seed: None,
            show_grid: true,
            show_connections: true,
        }
    }
}

impl AnimatorConfig {
    /// Parse the palette into colors (alpha left at 1.0)
    pub fn parse_palette(&self) -> Result<Vec<Rgba>, AnimatorError> {
        if self.palette.is_empty() {
            return Err(AnimatorError::EmptyPalette);
        }
        let colors = self
            .palette
            .iter()
            .map(|hex| Rgba::from_hex(hex, 1.0))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(colors)
    }

    fn alpha_range(&self) -> Result<Range<f32>, AnimatorError> {
        let (min, max) = (self.alpha_min, self.alpha_max);
        if (0.0..=1.0).contains(&min) && (0.0..=1.0).contains(&max) && min < max {
            Ok(min..max)
        } else {
            Err(AnimatorError::InvalidAlphaRange(min, max))
        }
    }
}

/// Opacity of the line joining two shapes `distance` apart
///
/// Falls linearly from `CONNECT_MAX_ALPHA` at 0 to 0 at `CONNECT_DISTANCE`.
pub fn connection_alpha(distance: f32) -> f32 {
    if distance >= CONNECT_DISTANCE {
        0.0
    } else {
        (1.0 - distance / CONNECT_DISTANCE) * CONNECT_MAX_ALPHA
    }
}

/// Animated geometric background
pub struct BackgroundAnimator<S: FrameScheduler> {
    viewport: Viewport,
    shapes: Vec<Shape>,
    scheduler: S,
    running: StopHandle,
    show_grid: bool,
    show_connections: bool,
    frames: u64,
}

impl<S: FrameScheduler> BackgroundAnimator<S> {
    /// Create an animator with randomized shapes
    ///
    /// Uses `config.seed` when set so layouts can be reproduced.
    pub fn from_config(
        config: &AnimatorConfig,
        viewport: Viewport,
        scheduler: S,
    ) -> Result<Self, AnimatorError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, viewport, &mut rng, scheduler)
    }

    /// Create an animator drawing shape parameters from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        config: &AnimatorConfig,
        viewport: Viewport,
        rng: &mut R,
        scheduler: S,
    ) -> Result<Self, AnimatorError> {
        if config.shape_count > MAX_SHAPES {
            return Err(AnimatorError::TooManyShapes(config.shape_count));
        }
        let palette = config.parse_palette()?;
        let alpha = config.alpha_range()?;

        let shapes = (0..config.shape_count)
            .map(|_| Shape::random(rng, viewport, &palette, alpha.clone()))
            .collect();

        let mut animator = Self::with_shapes(shapes, viewport, scheduler);
        animator.show_grid = config.show_grid;
        animator.show_connections = config.show_connections;
        Ok(animator)
    }

    /// Create an animator around an explicit set of shapes
    pub fn with_shapes(shapes: Vec<Shape>, viewport: Viewport, scheduler: S) -> Self {
        Self {
            viewport,
            shapes,
            scheduler,
            running: StopHandle::new(),
            show_grid: true,
            show_connections: true,
            frames: 0,
        }
    }

    /// Begin animating and request the first frame
    pub fn start(&mut self) {
        if self.running.is_running() {
            return;
        }
        log::info!("Background started with {} shapes", self.shapes.len());
        self.running.set_running(true);
        self.scheduler.request_frame();
    }

    /// Halt the animation; pending frames become no-ops
    pub fn stop(&mut self) {
        if self.running.is_running() {
            log::info!("Background stopped after {} frames", self.frames);
        }
        self.running.stop();
    }

    /// A handle that can stop this animator from elsewhere
    #[cfg(test)]
    pub fn stop_handle(&self) -> StopHandle {
        self.running.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_running()
    }

    /// Follow a viewport size change
    ///
    /// Takes effect on the next frame. Shape state is left untouched;
    /// shapes outside the new bounds wrap on their next move.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!(
                "Background resized to {}x{}",
                viewport.width,
                viewport.height
            );
            self.viewport = viewport;
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn set_show_connections(&mut self, show: bool) {
        self.show_connections = show;
    }

    /// Render one frame and schedule the next
    ///
    /// Does nothing while the animator is stopped.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        if !self.running.is_running() {
            return;
        }

        let Viewport { width, height } = self.viewport;
        surface.clear(width, height);

        if self.show_grid {
            draw_grid(surface, self.viewport);
        }
        if self.show_connections {
            draw_connections(surface, &self.shapes);
        }

        for shape in &mut self.shapes {
            shape.advance(self.viewport);
            draw_shape(surface, shape);
        }

        self.frames += 1;
        self.scheduler.request_frame();
    }
}

/// Evenly spaced dots covering the viewport, offset by half a cell
fn draw_grid(surface: &mut dyn Surface, viewport: Viewport) {
    let mut x = GRID_SPACING / 2.0;
    while x < viewport.width {
        let mut y = GRID_SPACING / 2.0;
        while y < viewport.height {
            surface.fill_circle(x, y, GRID_DOT_RADIUS, GRID_COLOR);
            y += GRID_SPACING;
        }
        x += GRID_SPACING;
    }
}

fn draw_connections(surface: &mut dyn Surface, shapes: &[Shape]) {
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            let (pa, pb) = (a.position(), b.position());
            let alpha = connection_alpha(distance(&pa, &pb));
            if alpha <= 0.0 {
                continue;
            }

            surface.begin_path();
            surface.move_to(pa.x, pa.y);
            surface.line_to(pb.x, pb.y);
            surface.stroke(StrokeStyle::new(
                CONNECT_COLOR.with_alpha(alpha),
                CONNECT_LINE_WIDTH,
            ));
        }
    }
}

fn draw_shape(surface: &mut dyn Surface, shape: &Shape) {
    let p = shape.position();

    surface.save();
    surface.translate(p.x, p.y);
    surface.rotate(shape.angle());
    shape
        .outline()
        .draw(surface, StrokeStyle::new(shape.color(), SHAPE_LINE_WIDTH));
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::scheduler::ManualScheduler;
    use crate::render::recording::{DrawCommand, RecordingSurface};
    use crate::shapes::ShapeKind;
    use nalgebra::{Point2, Vector2};
    use std::f32::consts::TAU;

    fn viewport(w: f32, h: f32) -> Viewport {
        Viewport::new(w, h).unwrap()
    }

    fn seeded(seed: u64, count: usize) -> BackgroundAnimator<ManualScheduler> {
        let config = AnimatorConfig {
            shape_count: count,
            seed: Some(seed),
            ..Default::default()
        };
        BackgroundAnimator::from_config(&config, viewport(800.0, 600.0), ManualScheduler::default())
            .unwrap()
    }

    fn with_shapes(shapes: Vec<Shape>) -> BackgroundAnimator<ManualScheduler> {
        BackgroundAnimator::with_shapes(shapes, viewport(800.0, 600.0), ManualScheduler::default())
    }

    fn still(kind: ShapeKind, x: f32, y: f32) -> Shape {
        Shape::new(
            kind,
            Point2::new(x, y),
            20.0,
            0.0,
            0.0,
            Vector2::zeros(),
            Rgba::new(96, 130, 182, 0.2),
        )
    }

    /// Fields that must never change after creation
    fn fixed_fields(s: &Shape) -> (ShapeKind, u32, u32, u32, u32, Rgba) {
        (
            s.kind(),
            s.size().to_bits(),
            s.spin().to_bits(),
            s.velocity().x.to_bits(),
            s.velocity().y.to_bits(),
            s.color(),
        )
    }

    #[test]
    fn test_viewport_rejects_missing_surface() {
        assert!(Viewport::new(800.0, 600.0).is_ok());
        assert_eq!(
            Viewport::new(0.0, 600.0),
            Err(AnimatorError::SurfaceUnavailable { width: 0.0, height: 600.0 })
        );
        assert!(Viewport::new(f32::NAN, 600.0).is_err());
        assert!(Viewport::new(800.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_config_errors() {
        let sched = ManualScheduler::default;
        let vp = viewport(800.0, 600.0);

        let empty = AnimatorConfig { palette: vec![], ..Default::default() };
        assert_eq!(
            BackgroundAnimator::from_config(&empty, vp, sched()).err(),
            Some(AnimatorError::EmptyPalette)
        );

        let bad = AnimatorConfig { palette: vec!["blue".into()], ..Default::default() };
        assert!(matches!(
            BackgroundAnimator::from_config(&bad, vp, sched()).err(),
            Some(AnimatorError::Palette(_))
        ));

        let alpha = AnimatorConfig { alpha_min: 0.3, alpha_max: 0.1, ..Default::default() };
        assert_eq!(
            BackgroundAnimator::from_config(&alpha, vp, sched()).err(),
            Some(AnimatorError::InvalidAlphaRange(0.3, 0.1))
        );
    }

    #[test]
    fn test_shape_count_is_capped() {
        let vp = viewport(800.0, 600.0);

        let at_cap = AnimatorConfig {
            shape_count: MAX_SHAPES,
            seed: Some(2),
            ..Default::default()
        };
        let animator = BackgroundAnimator::from_config(&at_cap, vp, ManualScheduler::default());
        assert_eq!(animator.map(|a| a.shapes().len()).ok(), Some(MAX_SHAPES));

        let huge = AnimatorConfig { shape_count: 2_000_000, ..Default::default() };
        assert_eq!(
            BackgroundAnimator::from_config(&huge, vp, ManualScheduler::default()).err(),
            Some(AnimatorError::TooManyShapes(2_000_000))
        );
    }

    #[test]
    fn test_default_shape_count() {
        let config = AnimatorConfig { seed: Some(1), ..Default::default() };
        let vp = viewport(800.0, 600.0);
        let animator =
            BackgroundAnimator::from_config(&config, vp, ManualScheduler::default()).unwrap();
        assert_eq!(animator.shapes().len(), SHAPE_COUNT);
    }

    #[test]
    fn test_shape_count_and_fixed_fields_never_change() {
        let mut animator = seeded(3, SHAPE_COUNT);
        let before: Vec<_> = animator.shapes().iter().map(fixed_fields).collect();

        animator.start();
        let mut surface = RecordingSurface::new();
        for _ in 0..2000 {
            animator.frame(&mut surface);
            surface.commands.clear();
            assert_eq!(animator.shapes().len(), SHAPE_COUNT);
        }

        let after: Vec<_> = animator.shapes().iter().map(fixed_fields).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_positions_stay_within_margin() {
        let mut animator = seeded(11, SHAPE_COUNT);
        animator.start();
        let mut surface = RecordingSurface::new();

        for _ in 0..5000 {
            animator.frame(&mut surface);
            surface.commands.clear();
            for s in animator.shapes() {
                let p = s.position();
                assert!(p.x >= -50.0 && p.x <= 850.0, "x out of range: {}", p.x);
                assert!(p.y >= -50.0 && p.y <= 650.0, "y out of range: {}", p.y);
            }
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let mut a = seeded(1234, SHAPE_COUNT);
        let mut b = seeded(1234, SHAPE_COUNT);
        assert_eq!(a.shapes(), b.shapes());

        a.start();
        b.start();
        let (mut sa, mut sb) = (RecordingSurface::new(), RecordingSurface::new());
        for _ in 0..100 {
            a.frame(&mut sa);
            b.frame(&mut sb);
        }
        assert_eq!(a.shapes(), b.shapes());
        assert_eq!(sa.commands, sb.commands);

        let c = seeded(4321, SHAPE_COUNT);
        assert_ne!(a.shapes(), c.shapes());
    }

    #[test]
    fn test_connection_alpha() {
        assert!((connection_alpha(0.0) - CONNECT_MAX_ALPHA).abs() < 1e-6);
        assert!(connection_alpha(0.0) > 0.0);
        assert!((connection_alpha(90.0) - 0.045).abs() < 1e-6);
        assert_eq!(connection_alpha(180.0), 0.0);
        assert_eq!(connection_alpha(500.0), 0.0);

        let mut last = connection_alpha(0.0);
        for step in 1..=400 {
            let a = connection_alpha(step as f32 * 0.5);
            assert!(a <= last);
            assert!(a <= CONNECT_MAX_ALPHA);
            last = a;
        }
    }

    #[test]
    fn test_ten_frames_one_of_each_kind() {
        let vp = viewport(800.0, 600.0);
        let color = Rgba::new(96, 130, 182, 0.2);
        // Far enough apart that no connection lines are drawn
        let shape = |kind, x, y, size, angle, spin, vx, vy| {
            Shape::new(kind, Point2::new(x, y), size, angle, spin, Vector2::new(vx, vy), color)
        };
        let shapes = vec![
            shape(ShapeKind::Triangle, 100.0, 100.0, 20.0, 0.5, 0.004, 0.1, 0.05),
            shape(ShapeKind::Hexagon, 700.0, 100.0, 30.0, 1.0, -0.003, -0.18, 0.1),
            shape(ShapeKind::Diamond, 100.0, 500.0, 14.0, 6.28, 0.002, 0.0, -0.12),
            shape(ShapeKind::Circle, 700.0, 500.0, 41.0, 0.0, -0.001, 0.17, -0.17),
        ];
        let initial = shapes.clone();

        let mut animator = BackgroundAnimator::with_shapes(shapes, vp, ManualScheduler::default());
        animator.start();
        let mut surface = RecordingSurface::new();
        for _ in 0..10 {
            animator.frame(&mut surface);
        }

        assert_eq!(animator.frame_count(), 10);
        assert!(surface.lines().is_empty());

        for (start, now) in initial.iter().zip(animator.shapes()) {
            let expected = start.position() + start.velocity() * 10.0;
            assert!((now.position().x - expected.x).abs() < 1e-3);
            assert!((now.position().y - expected.y).abs() < 1e-3);

            let expected_angle = (start.angle() + start.spin() * 10.0).rem_euclid(TAU);
            let diff = (now.angle() - expected_angle).rem_euclid(TAU);
            assert!(
                diff < 1e-4 || TAU - diff < 1e-4,
                "angle {} vs {}",
                now.angle(),
                expected_angle
            );
        }

        // 4 outlines per frame, one per shape
        assert_eq!(surface.outlines().len(), 40);
        assert_eq!(surface.transform_depth(), 0);
    }

    #[test]
    fn test_connection_line_between_close_shapes() {
        let shapes = vec![
            still(ShapeKind::Circle, 300.0, 300.0),
            still(ShapeKind::Circle, 390.0, 300.0),
        ];
        let mut animator = with_shapes(shapes);
        animator.start();

        let mut surface = RecordingSurface::new();
        animator.frame(&mut surface);

        let lines = surface.lines();
        assert_eq!(lines.len(), 1);
        assert!((lines[0].color.a - 0.045).abs() < 1e-6);
        assert_eq!(lines[0].width, CONNECT_LINE_WIDTH);
    }

    #[test]
    fn test_no_connection_line_between_distant_shapes() {
        let shapes = vec![
            still(ShapeKind::Circle, 300.0, 300.0),
            still(ShapeKind::Circle, 500.0, 300.0),
        ];
        let mut animator = with_shapes(shapes);
        animator.start();

        let mut surface = RecordingSurface::new();
        animator.frame(&mut surface);
        assert!(surface.lines().is_empty());
    }

    #[test]
    fn test_grid_covers_viewport() {
        let mut animator = with_shapes(Vec::new());
        animator.start();

        let mut surface = RecordingSurface::new();
        animator.frame(&mut surface);

        // x = 30..=750 (13 columns), y = 30..=570 (10 rows)
        assert_eq!(surface.dots(), 13 * 10);
        assert!(surface.commands.iter().all(|c| match c {
            DrawCommand::Dot { radius, color, .. } => {
                *radius == GRID_DOT_RADIUS && *color == GRID_COLOR
            }
            _ => true,
        }));
    }

    #[test]
    fn test_layers_can_be_disabled() {
        let shapes = vec![
            still(ShapeKind::Circle, 300.0, 300.0),
            still(ShapeKind::Circle, 310.0, 300.0),
        ];
        let mut animator = with_shapes(shapes);
        animator.set_show_grid(false);
        animator.set_show_connections(false);
        animator.start();

        let mut surface = RecordingSurface::new();
        animator.frame(&mut surface);
        assert_eq!(surface.dots(), 0);
        assert!(surface.lines().is_empty());
        assert_eq!(surface.outlines().len(), 2);
    }

    #[test]
    fn test_outline_is_placed_at_shape_position() {
        let shapes = vec![still(ShapeKind::Diamond, 200.0, 150.0)];
        let mut animator = with_shapes(shapes);
        animator.start();

        let mut surface = RecordingSurface::new();
        animator.frame(&mut surface);

        let outlines = surface.outlines();
        let DrawCommand::Path { points, closed, style } = outlines[0] else {
            panic!("expected a closed path");
        };
        assert!(*closed);
        assert_eq!(style.width, SHAPE_LINE_WIDTH);
        assert_eq!(points.len(), 4);
        assert!((points[0].0 - 200.0).abs() < 1e-3);
        assert!((points[0].1 - 130.0).abs() < 1e-3);
        assert!((points[1].0 - 212.0).abs() < 1e-3);
    }

    #[test]
    fn test_resize_applies_before_next_frame() {
        let mut animator = seeded(99, 6);
        animator.start();

        let mut surface = RecordingSurface::new();
        animator.frame(&mut surface);

        let before = animator.shapes().to_vec();
        animator.resize(viewport(1024.0, 768.0));
        assert_eq!(animator.shapes(), &before[..]);
        assert_eq!(animator.viewport(), viewport(1024.0, 768.0));

        animator.frame(&mut surface);
        assert_eq!(surface.clears(), vec![(800.0, 600.0), (1024.0, 768.0)]);
    }

    #[test]
    fn test_stop_halts_frames() {
        let mut animator = seeded(5, 4);
        let mut surface = RecordingSurface::new();

        // Not started yet
        animator.frame(&mut surface);
        assert!(surface.commands.is_empty());

        animator.start();
        animator.frame(&mut surface);
        animator.frame(&mut surface);
        // One request from start, one per frame
        assert_eq!(animator.scheduler.requests(), 3);

        let handle = animator.stop_handle();
        handle.stop();
        let frozen = animator.shapes().to_vec();
        surface.commands.clear();

        animator.frame(&mut surface);
        assert!(surface.commands.is_empty());
        assert_eq!(animator.shapes(), &frozen[..]);
        assert_eq!(animator.frame_count(), 2);
        assert_eq!(animator.scheduler.requests(), 3);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut animator = seeded(5, 4);
        animator.start();
        animator.start();
        assert_eq!(animator.scheduler.requests(), 1);

        animator.stop();
        assert!(!animator.is_running());
        animator.start();
        assert_eq!(animator.scheduler.requests(), 2);
    }
}
