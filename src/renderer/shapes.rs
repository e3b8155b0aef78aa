//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in arena pixel coordinates
//! (origin top-left, y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (x, y, x + width, y + height);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a dashed vertical line centred on `x`.
///
/// Dashes start at `y_start`; the last one is cut short at `y_end`.
pub fn dashed_vline(
    x: f32,
    y_start: f32,
    y_end: f32,
    dash: f32,
    gap: f32,
    thickness: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    if dash <= 0.0 {
        return vertices;
    }

    let mut y = y_start;
    while y < y_end {
        let len = dash.min(y_end - y);
        vertices.extend(rect(x - thickness / 2.0, y, thickness, len, color));
        y += dash + gap.max(0.0);
    }

    vertices
}

/// Seven-segment masks for 0-9, bit 0 = top, then clockwise, bit 6 = middle
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, 0b0000110, 0b1011011, 0b1001111, 0b1100110, 0b1101101, 0b1111101, 0b0000111,
    0b1111111, 0b1101111,
];

/// Generate vertices for one seven-segment digit with its top-left at `origin`
pub fn digit(value: u8, origin: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mask = DIGIT_SEGMENTS[(value % 10) as usize];
    let (x, y) = (origin.x, origin.y);
    let w = height / 2.0;
    let half = height / 2.0;
    let t = (height / 8.0).max(1.0);

    let segments = [
        (x, y, w, t),
        (x + w - t, y, t, half),
        (x + w - t, y + half, t, half),
        (x, y + height - t, w, t),
        (x, y + half, t, half),
        (x, y, t, half),
        (x, y + half - t / 2.0, w, t),
    ];

    let mut vertices = Vec::with_capacity(mask.count_ones() as usize * 6);
    for (bit, &(sx, sy, sw, sh)) in segments.iter().enumerate() {
        if mask & (1 << bit) != 0 {
            vertices.extend(rect(sx, sy, sw, sh, color));
        }
    }
    vertices
}

/// Generate vertices for a non-negative number, left-aligned at `origin`
pub fn number(value: u32, origin: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let advance = height / 2.0 + height / 4.0;
    let mut vertices = Vec::new();

    for (i, ch) in value.to_string().bytes().enumerate() {
        let pos = origin + Vec2::new(i as f32 * advance, 0.0);
        vertices.extend(digit(ch - b'0', pos, height, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_corners() {
        let v = rect(10.0, 20.0, 5.0, 7.0, WHITE);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[5].position, [15.0, 27.0]);
    }

    #[test]
    fn test_circle_stays_on_radius() {
        let center = Vec2::new(100.0, 50.0);
        let v = circle(center, 8.0, WHITE, 16);
        assert_eq!(v.len(), 48);
        for vertex in v.iter().skip(1).step_by(3) {
            let p = Vec2::from(vertex.position);
            assert!(((p - center).length() - 8.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_dashed_line_pattern() {
        let v = dashed_vline(400.0, 0.0, 500.0, 10.0, 15.0, 2.0, WHITE);
        // 500 / (10 + 15) = 20 dashes
        assert_eq!(v.len(), 20 * 6);
        assert_eq!(v[0].position, [399.0, 0.0]);
    }

    #[test]
    fn test_dashed_line_clips_last_dash() {
        let v = dashed_vline(0.0, 0.0, 30.0, 10.0, 15.0, 2.0, WHITE);
        assert_eq!(v.len(), 12);
        let max_y = v.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(max_y, 30.0);
    }

    #[test]
    fn test_digit_segment_counts() {
        assert_eq!(digit(8, Vec2::ZERO, 30.0, WHITE).len(), 7 * 6);
        assert_eq!(digit(1, Vec2::ZERO, 30.0, WHITE).len(), 2 * 6);
        assert_eq!(digit(0, Vec2::ZERO, 30.0, WHITE).len(), 6 * 6);
    }

    #[test]
    fn test_number_lays_out_digits() {
        let v = number(10, Vec2::new(200.0, 20.0), 32.0, WHITE);
        assert_eq!(v.len(), (2 + 6) * 6);
        // Second digit starts one advance to the right
        let min_x_second = v[12..]
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MAX, f32::min);
        assert_eq!(min_x_second, 200.0 + 24.0);
    }
}
