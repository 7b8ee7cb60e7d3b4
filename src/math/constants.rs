/* Copyright @yucwang 2026 */

pub type Float = f32;
pub type Int = i32;

pub type Vector2f = nalgebra::Vector2<Float>;
pub type Vector3f = nalgebra::Vector3<Float>;

pub const EPSILON: Float = 1e-4;
pub const T_MIN: Float = 1e-3;
pub const PI: Float = 3.14159265359;
pub const FLOAT_MAX: Float = std::f32::MAX;
pub const FLOAT_MIN: Float = std::f32::MIN;
pub const FLOAT_INFINITY: Float = std::f32::INFINITY;

pub fn degrees_to_radians(degrees: Float) -> Float {
    degrees * PI / 180.0
}
