//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use rs_math3d::Vec2f;

/// Convenience constructor for [`Vec2f`].
pub const fn vec2(x: f32, y: f32) -> Vec2f { Vec2f { x, y } }

/// Component-wise minimum.
pub fn vec2_min(a: Vec2f, b: Vec2f) -> Vec2f { vec2(a.x.min(b.x), a.y.min(b.y)) }

/// Component-wise maximum.
pub fn vec2_max(a: Vec2f, b: Vec2f) -> Vec2f { vec2(a.x.max(b.x), a.y.max(b.y)) }

/// Component-wise clamp of `v` into `[mn, mx]`; `mx` wins when the range is inverted.
pub fn vec2_clamp(v: Vec2f, mn: Vec2f, mx: Vec2f) -> Vec2f { vec2(v.x.max(mn.x).min(mx.x), v.y.max(mn.y).min(mx.y)) }

/// Linear interpolation between `a` and `b`.
pub fn vec2_lerp(a: Vec2f, b: Vec2f, t: f32) -> Vec2f { vec2(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t) }

/// Rounds both components down.
pub fn vec2_floor(v: Vec2f) -> Vec2f { vec2(v.x.floor(), v.y.floor()) }

/// Squared length.
pub fn vec2_length_sqr(v: Vec2f) -> f32 { v.x * v.x + v.y * v.y }

/// Dot product.
pub fn vec2_dot(a: Vec2f, b: Vec2f) -> f32 { a.x * b.x + a.y * b.y }

/// Scales both components by `s`.
pub fn vec2_scale(v: Vec2f, s: f32) -> Vec2f { vec2(v.x * s, v.y * s) }

/// Component-wise product.
pub fn vec2_mul(a: Vec2f, b: Vec2f) -> Vec2f { vec2(a.x * b.x, a.y * b.y) }

/// Reads one axis (0 = x, 1 = y).
pub fn vec2_axis(v: Vec2f, axis: usize) -> f32 { if axis == 0 { v.x } else { v.y } }

/// Writes one axis (0 = x, 1 = y).
pub fn vec2_set_axis(v: &mut Vec2f, axis: usize, value: f32) {
    if axis == 0 {
        v.x = value
    } else {
        v.y = value
    }
}

#[derive(Copy, Clone, Debug, Default)]
/// Axis-aligned rectangle stored as two corners, `min` inclusive and `max` exclusive.
pub struct Rect {
    /// Upper-left corner.
    pub min: Vec2f,
    /// Lower-right corner.
    pub max: Vec2f,
}

impl Rect {
    /// A rectangle that contains nothing and grows to fit anything added to it.
    pub const INVERTED: Rect = Rect { min: vec2(f32::MAX, f32::MAX), max: vec2(-f32::MAX, -f32::MAX) };

    /// A rectangle covering the whole plane.
    pub const UNCLIPPED: Rect = Rect { min: vec2(-f32::MAX, -f32::MAX), max: vec2(f32::MAX, f32::MAX) };

    /// Builds a rectangle from its corners.
    pub const fn new(min: Vec2f, max: Vec2f) -> Self { Self { min, max } }

    /// Builds a rectangle from raw coordinates.
    pub const fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self { Self { min: vec2(x1, y1), max: vec2(x2, y2) } }

    /// Builds a rectangle from its upper-left corner and size.
    pub fn from_min_size(min: Vec2f, size: Vec2f) -> Self { Self { min, max: vec2(min.x + size.x, min.y + size.y) } }

    /// Center point.
    pub fn center(&self) -> Vec2f { vec2((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5) }
    /// Width and height.
    pub fn size(&self) -> Vec2f { vec2(self.max.x - self.min.x, self.max.y - self.min.y) }
    /// Width.
    pub fn width(&self) -> f32 { self.max.x - self.min.x }
    /// Height.
    pub fn height(&self) -> f32 { self.max.y - self.min.y }
    /// Area, negative components are not clamped.
    pub fn area(&self) -> f32 { (self.max.x - self.min.x) * (self.max.y - self.min.y) }
    /// Top-left corner.
    pub fn tl(&self) -> Vec2f { self.min }
    /// Top-right corner.
    pub fn tr(&self) -> Vec2f { vec2(self.max.x, self.min.y) }
    /// Bottom-left corner.
    pub fn bl(&self) -> Vec2f { vec2(self.min.x, self.max.y) }
    /// Bottom-right corner.
    pub fn br(&self) -> Vec2f { self.max }

    /// Returns `true` if `p` lies inside, with the max edges excluded.
    pub fn contains(&self, p: Vec2f) -> bool { p.x >= self.min.x && p.y >= self.min.y && p.x < self.max.x && p.y < self.max.y }

    /// Returns `true` if `r` lies fully inside.
    pub fn contains_rect(&self, r: &Rect) -> bool { r.min.x >= self.min.x && r.min.y >= self.min.y && r.max.x <= self.max.x && r.max.y <= self.max.y }

    /// Returns `true` if both rectangles share some area.
    pub fn overlaps(&self, r: &Rect) -> bool { r.min.y < self.max.y && r.max.y > self.min.y && r.min.x < self.max.x && r.max.x > self.min.x }

    /// Grows the rectangle to include `p`.
    pub fn add_point(&mut self, p: Vec2f) {
        self.min = vec2_min(self.min, p);
        self.max = vec2_max(self.max, p);
    }

    /// Grows the rectangle to include `r`.
    pub fn add_rect(&mut self, r: &Rect) {
        self.min = vec2_min(self.min, r.min);
        self.max = vec2_max(self.max, r.max);
    }

    /// Expands uniformly on all sides; negative amounts shrink.
    pub fn expand(&mut self, amount: f32) { self.expand_xy(vec2(amount, amount)) }

    /// Expands by a different amount on each axis.
    pub fn expand_xy(&mut self, amount: Vec2f) {
        self.min.x -= amount.x;
        self.min.y -= amount.y;
        self.max.x += amount.x;
        self.max.y += amount.y;
    }

    /// Returns an expanded copy.
    pub fn expanded(&self, amount: f32) -> Rect {
        let mut r = *self;
        r.expand(amount);
        r
    }

    /// Moves the rectangle by `d`.
    pub fn translate(&mut self, d: Vec2f) {
        self.translate_x(d.x);
        self.translate_y(d.y);
    }

    /// Moves the rectangle horizontally.
    pub fn translate_x(&mut self, dx: f32) {
        self.min.x += dx;
        self.max.x += dx;
    }

    /// Moves the rectangle vertically.
    pub fn translate_y(&mut self, dy: f32) {
        self.min.y += dy;
        self.max.y += dy;
    }

    /// Clips against `r`; may produce an inverted rectangle when they don't overlap.
    pub fn clip_with(&mut self, r: &Rect) {
        self.min = vec2_max(self.min, r.min);
        self.max = vec2_min(self.max, r.max);
    }

    /// Clips against `r` keeping the result well formed (`min <= max`).
    pub fn clip_with_full(&mut self, r: &Rect) {
        self.min = vec2_clamp(self.min, r.min, r.max);
        self.max = vec2_clamp(self.max, r.min, r.max);
    }

    /// Rounds both corners down to whole pixels.
    pub fn floor(&mut self) {
        self.min = vec2_floor(self.min);
        self.max = vec2_floor(self.max);
    }

    /// Returns `true` if `min` exceeds `max` on any axis.
    pub fn is_inverted(&self) -> bool { self.min.x > self.max.x || self.min.y > self.max.y }

    /// Reads the `[min, max]` interval along one axis.
    pub fn axis_range(&self, axis: usize) -> (f32, f32) { (vec2_axis(self.min, axis), vec2_axis(self.max, axis)) }
}

/// Closest point to `p` on the segment `[a, b]`.
pub fn line_closest_point(a: Vec2f, b: Vec2f, p: Vec2f) -> Vec2f {
    let ap = p - a;
    let ab_dir = b - a;
    let dot = vec2_dot(ap, ab_dir);
    if dot < 0.0 {
        return a;
    }
    let ab_len_sqr = vec2_length_sqr(ab_dir);
    if dot > ab_len_sqr {
        return b;
    }
    a + vec2_scale(ab_dir, dot / ab_len_sqr)
}

/// Returns `true` if `p` lies inside the triangle `abc`, whatever its winding.
pub fn triangle_contains_point(a: Vec2f, b: Vec2f, c: Vec2f, p: Vec2f) -> bool {
    let b1 = ((b.x - a.x) * (p.y - b.y) - (b.y - a.y) * (p.x - b.x)) < 0.0;
    let b2 = ((c.x - b.x) * (p.y - c.y) - (c.y - b.y) * (p.x - c.x)) < 0.0;
    let b3 = ((a.x - c.x) * (p.y - a.y) - (a.y - c.y) * (p.x - a.x)) < 0.0;
    b1 == b2 && b2 == b3
}

/// Barycentric coordinates `(u, v, w)` of `p` relative to the triangle `abc`.
pub fn triangle_barycentric_coords(a: Vec2f, b: Vec2f, c: Vec2f, p: Vec2f) -> (f32, f32, f32) {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;
    let denom = v0.x * v1.y - v1.x * v0.y;
    let v = (v2.x * v1.y - v1.x * v2.y) / denom;
    let w = (v0.x * v2.y - v2.x * v0.y) / denom;
    (1.0 - v - w, v, w)
}

/// Closest point to `p` on or inside the triangle `abc`.
pub fn triangle_closest_point(a: Vec2f, b: Vec2f, c: Vec2f, p: Vec2f) -> Vec2f {
    if triangle_contains_point(a, b, c, p) {
        return p;
    }
    let proj_ab = line_closest_point(a, b, p);
    let proj_bc = line_closest_point(b, c, p);
    let proj_ca = line_closest_point(c, a, p);
    let dist2_ab = vec2_length_sqr(p - proj_ab);
    let dist2_bc = vec2_length_sqr(p - proj_bc);
    let dist2_ca = vec2_length_sqr(p - proj_ca);
    let m = dist2_ab.min(dist2_bc).min(dist2_ca);
    if m == dist2_ab {
        proj_ab
    } else if m == dist2_bc {
        proj_bc
    } else {
        proj_ca
    }
}

/// Point at parameter `t` on the cubic Bezier curve `p1..p4`.
pub fn bezier_cubic_calc(p1: Vec2f, p2: Vec2f, p3: Vec2f, p4: Vec2f, t: f32) -> Vec2f {
    let u = 1.0 - t;
    let w1 = u * u * u;
    let w2 = 3.0 * u * u * t;
    let w3 = 3.0 * u * t * t;
    let w4 = t * t * t;
    vec2(w1 * p1.x + w2 * p2.x + w3 * p3.x + w4 * p4.x, w1 * p1.y + w2 * p2.y + w3 * p3.y + w4 * p4.y)
}

/// Approximates the closest point to `p` on a cubic Bezier by walking `num_segments` chords.
pub fn bezier_cubic_closest_point(p1: Vec2f, p2: Vec2f, p3: Vec2f, p4: Vec2f, p: Vec2f, num_segments: usize) -> Vec2f {
    assert!(num_segments > 0, "bezier_cubic_closest_point needs at least one segment");
    let mut p_last = p1;
    let mut p_closest = p1;
    let mut p_closest_dist2 = f32::MAX;
    let t_step = 1.0 / num_segments as f32;
    for i in 1..=num_segments {
        let p_current = bezier_cubic_calc(p1, p2, p3, p4, t_step * i as f32);
        let p_line = line_closest_point(p_last, p_current, p);
        let dist2 = vec2_length_sqr(p - p_line);
        if dist2 < p_closest_dist2 {
            p_closest = p_line;
            p_closest_dist2 = dist2;
        }
        p_last = p_current;
    }
    p_closest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2f, b: Vec2f) -> bool { (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4 }

    #[test]
    fn rect_contains_excludes_max_edge() {
        let r = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(vec2(0.0, 0.0)));
        assert!(r.contains(vec2(9.9, 9.9)));
        assert!(!r.contains(vec2(10.0, 5.0)));
        assert!(r.contains_rect(&Rect::from_coords(2.0, 2.0, 10.0, 10.0)));
    }

    #[test]
    fn clip_with_full_stays_well_formed() {
        let mut r = Rect::from_coords(20.0, 20.0, 30.0, 30.0);
        r.clip_with_full(&Rect::from_coords(0.0, 0.0, 10.0, 10.0));
        assert!(!r.is_inverted());
        assert_eq!(r.area(), 0.0);

        let mut r = Rect::from_coords(20.0, 20.0, 30.0, 30.0);
        r.clip_with(&Rect::from_coords(0.0, 0.0, 10.0, 10.0));
        assert!(r.is_inverted());
    }

    #[test]
    fn inverted_rect_grows_to_fit() {
        let mut r = Rect::INVERTED;
        r.add_point(vec2(3.0, 4.0));
        r.add_rect(&Rect::from_coords(-1.0, 2.0, 1.0, 8.0));
        assert!(approx(r.min, vec2(-1.0, 2.0)));
        assert!(approx(r.max, vec2(3.0, 8.0)));
    }

    #[test]
    fn overlaps_is_strict() {
        let a = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::from_coords(5.0, 5.0, 15.0, 15.0)));
        assert!(!a.overlaps(&Rect::from_coords(10.0, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn closest_points() {
        assert!(approx(line_closest_point(vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(5.0, 3.0)), vec2(5.0, 0.0)));
        assert!(approx(line_closest_point(vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(-5.0, 3.0)), vec2(0.0, 0.0)));
        let (a, b, c) = (vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(0.0, 10.0));
        assert!(triangle_contains_point(a, b, c, vec2(1.0, 1.0)));
        assert!(approx(triangle_closest_point(a, b, c, vec2(1.0, 1.0)), vec2(1.0, 1.0)));
        assert!(approx(triangle_closest_point(a, b, c, vec2(5.0, -4.0)), vec2(5.0, 0.0)));
        let (u, v, w) = triangle_barycentric_coords(a, b, c, vec2(0.0, 0.0));
        assert!((u - 1.0).abs() < 1e-5 && v.abs() < 1e-5 && w.abs() < 1e-5);
    }

    #[test]
    fn bezier_endpoints() {
        let (p1, p2, p3, p4) = (vec2(0.0, 0.0), vec2(0.0, 10.0), vec2(10.0, 10.0), vec2(10.0, 0.0));
        assert!(approx(bezier_cubic_calc(p1, p2, p3, p4, 0.0), p1));
        assert!(approx(bezier_cubic_calc(p1, p2, p3, p4, 1.0), p4));
        let closest = bezier_cubic_closest_point(p1, p2, p3, p4, vec2(5.0, 20.0), 32);
        assert!((closest.x - 5.0).abs() < 0.5);
        assert!((closest.y - 7.5).abs() < 0.5);
    }
}
