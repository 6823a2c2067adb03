use crate::bodies::{Rgb, STAR_YELLOW};
use crate::config::RenderSettings;
use crate::orbit::Vec2;
use crate::system::{Orrery, Snapshot, Trail};
use anyhow::{Context, Result};
use image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, Frame, Rgba, RgbaImage,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io::Write;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Marker radii in pixels at the reference size.
const REFERENCE_SIZE: f64 = 480.0;
const BODY_MARKER: f64 = 4.0;
const STAR_MARKER: f64 = 7.0;
/// Dotted pattern: one lit pixel per this many pixels of path.
const DOT_SPACING: f64 = 3.0;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// -------------------- View --------------------
/// Square window of `2 * half_extent` world units centred on the origin, y up.
#[derive(Clone, Copy, Debug)]
pub(crate) struct View {
    half_extent: f64,
    size: u32,
}

impl View {
    pub(crate) fn new(half_extent: f64, size: u32) -> Self {
        Self { half_extent, size }
    }

    pub(crate) fn to_pixel(&self, p: Vec2) -> (f64, f64) {
        let s = self.size as f64;
        let px = (p.x + self.half_extent) / (2.0 * self.half_extent) * s;
        let py = (self.half_extent - p.y) / (2.0 * self.half_extent) * s;
        (px, py)
    }

    fn marker_scale(&self) -> f64 {
        self.size as f64 / REFERENCE_SIZE
    }
}

// -------------------- Canvas --------------------
#[derive(Clone)]
pub(crate) struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub(crate) fn new(size: u32) -> Self {
        Self { img: RgbaImage::from_pixel(size, size, BACKGROUND) }
    }

    pub(crate) fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Alpha-blend one pixel; anything off-canvas is dropped.
    pub(crate) fn blend(&mut self, x: i64, y: i64, c: Rgb, alpha: f64) {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let px = self.img.get_pixel_mut(x as u32, y as u32);
        let mix = |dst: u8, src: u8| lerp(dst as f64, src as f64, a).round().clamp(0.0, 255.0) as u8;
        *px = Rgba([mix(px[0], c.r), mix(px[1], c.g), mix(px[2], c.b), 255]);
    }

    pub(crate) fn disc(&mut self, (cx, cy): (f64, f64), r: f64, c: Rgb) {
        let x0 = (cx - r).floor() as i64;
        let x1 = (cx + r).ceil() as i64;
        let y0 = (cy - r).floor() as i64;
        let y1 = (cy + r).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend(x, y, c, 1.0);
                }
            }
        }
    }

    /// Dotted segment from `a` to `b`. `phase` carries the distance since the
    /// last dot so joined segments keep an even pattern.
    pub(crate) fn dotted_segment(&mut self, a: (f64, f64), b: (f64, f64), c: Rgb, alpha: f64, phase: &mut f64) {
        let dx = b.0 - a.0;
        let dy = b.1 - a.1;
        let len = (dx * dx + dy * dy).sqrt();
        let mut d = DOT_SPACING - *phase;
        while d <= len {
            let t = if len > 0.0 { d / len } else { 0.0 };
            self.blend(lerp(a.0, b.0, t).floor() as i64, lerp(a.1, b.1, t).floor() as i64, c, alpha);
            d += DOT_SPACING;
        }
        *phase = (*phase + len) % DOT_SPACING;
    }
}

// -------------------- Backdrop --------------------
#[derive(Clone, Copy)]
struct Star {
    x: u32,
    y: u32,
    depth: f64,
}

fn build_stars(size: u32, count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(count);
    if size == 0 {
        return stars;
    }
    for _ in 0..count {
        stars.push(Star {
            x: rng.gen_range(0..size),
            y: rng.gen_range(0..size),
            depth: rng.gen_range(0.35..1.0),
        });
    }
    stars
}

// -------------------- Frame renderer --------------------
/// How much of a trail has already been drawn onto the persistent layer.
#[derive(Clone, Copy, Default)]
struct TrailPen {
    drawn: usize,
    phase: f64,
}

/// Keeps trails on a persistent layer and only inks the newest segments;
/// each frame is that layer plus the current markers.
pub(crate) struct FrameRenderer {
    view: View,
    layer: Canvas,
    trail_alpha: f64,
    star_pen: TrailPen,
    body_pens: Vec<TrailPen>,
}

impl FrameRenderer {
    pub(crate) fn new(view: View, settings: &RenderSettings) -> Self {
        let mut layer = Canvas::new(view.size);
        let grey = Rgb { r: 200, g: 200, b: 215 };
        for s in build_stars(view.size, settings.star_count, settings.seed) {
            layer.blend(s.x as i64, s.y as i64, grey, lerp(0.2, 0.8, s.depth));
        }
        Self {
            view,
            layer,
            trail_alpha: settings.trail_alpha as f64,
            star_pen: TrailPen::default(),
            body_pens: Vec::new(),
        }
    }

    fn ink(layer: &mut Canvas, view: &View, trail: &Trail, pen: &mut TrailPen, c: Rgb, alpha: f64) {
        let pts = trail.points();
        if pen.drawn == 0 && !pts.is_empty() {
            let (x, y) = view.to_pixel(pts[0]);
            layer.blend(x.floor() as i64, y.floor() as i64, c, alpha);
            pen.drawn = 1;
        }
        while pen.drawn < pts.len() {
            let a = view.to_pixel(pts[pen.drawn - 1]);
            let b = view.to_pixel(pts[pen.drawn]);
            layer.dotted_segment(a, b, c, alpha, &mut pen.phase);
            pen.drawn += 1;
        }
    }

    pub(crate) fn render(&mut self, orrery: &Orrery, snap: &Snapshot) -> RgbaImage {
        let view = self.view;
        let alpha = self.trail_alpha;
        if self.body_pens.len() != orrery.tracks().len() {
            self.body_pens.resize(orrery.tracks().len(), TrailPen::default());
        }

        Self::ink(&mut self.layer, &view, orrery.star_trail(), &mut self.star_pen, STAR_YELLOW, alpha);
        for (track, pen) in orrery.tracks().iter().zip(self.body_pens.iter_mut()) {
            Self::ink(&mut self.layer, &view, &track.trail, pen, track.body.color, alpha);
        }

        let mut frame = self.layer.clone();
        let k = view.marker_scale();
        frame.disc(view.to_pixel(Vec2::ZERO), BODY_MARKER * k, orrery.central().color);
        frame.disc(view.to_pixel(snap.star), STAR_MARKER * k, STAR_YELLOW);
        for (track, p) in orrery.tracks().iter().zip(&snap.bodies) {
            frame.disc(view.to_pixel(*p), BODY_MARKER * k, track.body.color);
        }
        frame.into_image()
    }
}

// -------------------- GIF output --------------------
/// Looping GIF written frame by frame as they are produced.
pub(crate) struct GifSink<W: Write> {
    encoder: GifEncoder<W>,
    delay: Delay,
    frames: usize,
}

impl<W: Write> GifSink<W> {
    pub(crate) fn new(w: W, fps: u32, speed: i32) -> Result<Self> {
        let mut encoder = GifEncoder::new_with_speed(w, speed);
        encoder.set_repeat(Repeat::Infinite).context("setting GIF loop")?;
        Ok(Self { encoder, delay: Delay::from_numer_denom_ms(1000, fps.max(1)), frames: 0 })
    }

    pub(crate) fn push(&mut self, img: RgbaImage) -> Result<()> {
        self.encoder
            .encode_frame(Frame::from_parts(img, 0, 0, self.delay))
            .with_context(|| format!("encoding frame {}", self.frames))?;
        self.frames += 1;
        Ok(())
    }

    pub(crate) fn frames(&self) -> usize {
        self.frames
    }
}
