use crate::bodies::{Body, SystemConfig};
use crate::orbit::{orbit_angle, position, Vec2};

/// Append-only history of plotted positions, one point per step.
#[derive(Clone, Debug, Default)]
pub(crate) struct Trail {
    points: Vec<Vec2>,
}

impl Trail {
    fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }
    fn push(&mut self, p: Vec2) {
        self.points.push(p);
    }
    pub(crate) fn points(&self) -> &[Vec2] {
        &self.points
    }
}

/// A non-central body together with its trail.
#[derive(Clone, Debug)]
pub(crate) struct Track {
    pub(crate) body: Body,
    pub(crate) trail: Trail,
}

/// Positions produced by one step, in the fixed frame of the central body.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) days: f64,
    pub(crate) star: Vec2,
    /// Same order as `Orrery::tracks`.
    pub(crate) bodies: Vec<Vec2>,
}

/// The Sun circles the central body; every other body circles the Sun.
pub(crate) struct Orrery {
    central: Body,
    star_trail: Trail,
    tracks: Vec<Track>,
}

impl Orrery {
    pub(crate) fn new(config: &SystemConfig, expected_frames: usize) -> Self {
        let tracks = config
            .orbiters()
            .map(|b| Track { body: b.clone(), trail: Trail::with_capacity(expected_frames) })
            .collect();
        Self {
            central: config.central().clone(),
            star_trail: Trail::with_capacity(expected_frames),
            tracks,
        }
    }

    /// Sun position `days` after start, relative to the pinned central body.
    pub(crate) fn star_at(&self, days: f64) -> Vec2 {
        let c = &self.central;
        position(c.radius, orbit_angle(c.start_deg, c.period_days, days))
    }

    /// Offset of `body` from the Sun after `days`.
    pub(crate) fn offset_at(body: &Body, days: f64) -> Vec2 {
        position(body.radius, orbit_angle(body.start_deg, body.period_days, days))
    }

    /// Advance to `days`, appending exactly one point to every trail.
    pub(crate) fn step(&mut self, days: f64) -> Snapshot {
        let star = self.star_at(days);
        self.star_trail.push(star);

        let mut bodies = Vec::with_capacity(self.tracks.len());
        for track in &mut self.tracks {
            let p = star.add(Self::offset_at(&track.body, days));
            track.trail.push(p);
            bodies.push(p);
        }
        Snapshot { days, star, bodies }
    }

    pub(crate) fn central(&self) -> &Body {
        &self.central
    }
    pub(crate) fn star_trail(&self) -> &Trail {
        &self.star_trail
    }
    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{areo_bodies, quasi_bodies};
    use crate::schedule::frame_times;

    fn areo() -> Orrery {
        let cfg = SystemConfig::new(areo_bodies(), "Mars").unwrap();
        Orrery::new(&cfg, 16)
    }

    #[test]
    fn trails_grow_by_one_per_step() {
        let mut o = areo();
        for (n, t) in frame_times(40.0, 40).into_iter().enumerate() {
            o.step(t);
            assert_eq!(o.star_trail().points().len(), n + 1);
            for track in o.tracks() {
                assert_eq!(track.trail.points().len(), n + 1, "{}", track.body.name);
            }
        }
    }

    #[test]
    fn central_body_has_no_track() {
        let o = areo();
        assert_eq!(o.central().name, "Mars");
        let names: Vec<_> = o.tracks().iter().map(|t| t.body.name).collect();
        assert_eq!(names, ["Mercury", "Venus", "Earth"]);
    }

    #[test]
    fn quarter_period_puts_star_on_y_axis() {
        let mut o = areo();
        let snap = o.step(171.75);
        assert!(snap.star.x.abs() < 1e-9, "x = {}", snap.star.x);
        assert!((snap.star.y - 22.79).abs() < 1e-9, "y = {}", snap.star.y);
    }

    #[test]
    fn absolute_position_is_star_plus_offset() {
        let cfg = SystemConfig::new(quasi_bodies(), "Earth").unwrap();
        let mut o = Orrery::new(&cfg, 0);
        for t in frame_times(730.0, 97) {
            let snap = o.step(t);
            assert_eq!(snap.star, o.star_at(t));
            for (track, p) in o.tracks().iter().zip(&snap.bodies) {
                let offset = Orrery::offset_at(&track.body, t);
                assert_eq!(*p, snap.star.add(offset), "{} at {t}", track.body.name);
                assert_eq!(track.trail.points().last(), Some(p));
            }
        }
    }

    #[test]
    fn frame_zero_matches_direct_computation() {
        let mut o = areo();
        let snap = o.step(0.0);
        let mars = 227.9e6 / 1.0e7;
        assert_eq!(snap.star, Vec2 { x: mars, y: 0.0 });

        let expected = [57.9e6 / 1.0e7, 108.2e6 / 1.0e7, 149.6e6 / 1.0e7];
        for (p, r) in snap.bodies.iter().zip(expected) {
            assert!((p.x - (mars + r)).abs() < 1e-12);
            assert!(p.y.abs() < 1e-12);
        }
    }

    #[test]
    fn frame_zero_matches_direct_computation_for_every_centre() {
        let bodies = quasi_bodies();
        for central in &bodies {
            let cfg = SystemConfig::new(quasi_bodies(), central.name).unwrap();
            let mut o = Orrery::new(&cfg, 1);
            let snap = o.step(0.0);
            assert_eq!(snap.star, Vec2 { x: central.radius, y: 0.0 }, "centre {}", central.name);

            let orbiters: Vec<_> = bodies.iter().filter(|b| b.name != central.name).collect();
            assert_eq!(snap.bodies.len(), orbiters.len());
            for (p, b) in snap.bodies.iter().zip(orbiters) {
                assert!((p.x - (central.radius + b.radius)).abs() < 1e-9, "{} around {}", b.name, central.name);
                assert!(p.y.abs() < 1e-12, "{} around {}", b.name, central.name);
            }
        }
    }

    #[test]
    fn repeated_time_appends_identical_points() {
        let mut o = areo();
        let a = o.step(100.0);
        let b = o.step(100.0);
        assert_eq!(a, b);
        let pts = o.star_trail().points();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], pts[1]);
        for track in o.tracks() {
            assert_eq!(track.trail.points()[0], track.trail.points()[1]);
        }
    }

    #[test]
    fn body_circles_star_at_its_radius() {
        let mut o = areo();
        for t in frame_times(687.0, 50) {
            let snap = o.step(t);
            for (track, p) in o.tracks().iter().zip(&snap.bodies) {
                let d = (p.x - snap.star.x).hypot(p.y - snap.star.y);
                assert!((d - track.body.radius).abs() < 1e-9);
            }
        }
    }
}
