// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static vertex data for the renderer: the tray box and the origin marker.
//!
//! These are plain arrays; uploading and drawing them is the renderer's job.

use crate::types::TraySize;

/// A vertex position and RGBA colour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Linear RGBA colour.
    pub color: [f32; 4],
}

// Corner order of a box: 1-based indices into this table form the strip below.
const CORNERS: [[u8; 3]; 8] = [
    [1, 1, 1],
    [0, 1, 1],
    [1, 0, 1],
    [0, 0, 1],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 0],
    [1, 0, 0],
];

// A closed box as one 14-vertex triangle strip.
const STRIP: [usize; 14] = [4, 3, 7, 8, 5, 3, 1, 4, 2, 7, 6, 5, 2, 1];

/// A tray box of `size` as a triangle strip, coloured by corner.
pub fn tray_strip(size: TraySize) -> Vec<Vertex> {
    let extent = [size.width, size.height, size.length];
    STRIP
        .iter()
        .map(|&i| {
            let corner = CORNERS[i - 1];
            let position = [0, 1, 2].map(|a| f32::from(corner[a]) * extent[a]);
            let color = [
                f32::from(corner[0]),
                f32::from(corner[1]),
                f32::from(corner[2]),
                1.0,
            ];
            Vertex { position, color }
        })
        .collect()
}

/// The origin marker as a triangle fan: three quarter-planes tinted by axis.
pub fn origin_fan() -> Vec<Vertex> {
    const POSITIONS: [[f32; 3]; 14] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.75, 0.25, 0.0],
        [0.25, 0.25, 0.0],
        [0.25, 0.75, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.75, 0.25],
        [0.0, 0.25, 0.25],
        [0.0, 0.25, 0.75],
        [0.0, 0.0, 1.0],
        [0.25, 0.0, 0.75],
        [0.25, 0.0, 0.25],
        [0.75, 0.0, 0.25],
        [1.0, 0.0, 0.0],
    ];
    POSITIONS
        .iter()
        .map(|&position| Vertex {
            position,
            color: [position[0], position[1], position[2], 1.0],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_touches_every_corner() {
        let size = TraySize::default();
        let strip = tray_strip(size);
        assert_eq!(strip.len(), 14);
        for corner in CORNERS {
            let expected = [
                f32::from(corner[0]) * size.width,
                f32::from(corner[1]) * size.height,
                f32::from(corner[2]) * size.length,
            ];
            assert!(strip.iter().any(|v| v.position == expected));
        }
    }

    #[test]
    fn origin_fan_closes() {
        let fan = origin_fan();
        assert_eq!(fan[1].position, fan[fan.len() - 1].position);
        assert_eq!(fan[0].color, [0.0, 0.0, 0.0, 1.0]);
    }
}
