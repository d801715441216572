// Shared tuning constants used by the core and both front-ends.

// Picking
pub const HIGHLIGHT_EMISSIVE_HEX: u32 = 0xff0000; // emissive applied to the hovered object
pub const PRESS_EMISSIVE_MAX_HEX: u32 = 0x00ff00; // upper bound (exclusive) for press recolor

// Control widget ranges
pub const ROTATION_SPEED_RANGE: (f32, f32) = (-1.0, 1.0);
pub const OPACITY_RANGE: (f32, f32) = (0.1, 1.0);
pub const ROTATION_SPEED_STEP: f32 = 0.05;
pub const OPACITY_STEP: f32 = 0.05;

// Default material colors
pub const PLANE_COLOR_HEX: u32 = 0xcccccc;
pub const CUBE_COLOR_HEX: u32 = 0x086113;
pub const SOLID_COLOR_HEX: u32 = 0x2194ce;

// Palette cycled by keyboard color control
pub const CUBE_PALETTE: [u32; 6] = [0x086113, 0x2194ce, 0xe0a030, 0xc03060, 0x7040c0, 0xf0f0f0];

// Geometry sizes
pub const PLANE_SIZE: [f32; 2] = [20.0, 20.0];
pub const PLANE_Y: f32 = -2.0;
pub const CUBE_SIZE: [f32; 3] = [6.0, 4.0, 6.0];
pub const SOLID_RADIUS: f32 = 2.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const LIGHT_POSITION: [f32; 3] = [10.0, 20.0, 20.0];
pub const LIGHT_INTENSITY: f32 = 1.0;

// Name the frame driver looks up to find the tunable material
pub const CUBE_NAME: &str = "cube";

// Hit-test triangles closer to parallel than this are ignored
pub const RAY_EPSILON: f32 = 1e-6;
