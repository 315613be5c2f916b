use nalgebra as na;
use crate::math::{Vector3, Vector4};
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A 3x3 matrix, indexed as `data[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix3 {
    pub data: [[f32; 3]; 3],
}

/// A 4x4 transform matrix, indexed as `data[row][col]`.
///
/// Engine buffers store transforms as 16 packed floats in column-major
/// order; use [`Matrix4::from_cols_array`] and [`Matrix4::to_cols_array`]
/// at that boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix4 {
    pub data: [[f32; 4]; 4],
}

// === Matrix3 Implementation ===

impl Matrix3 {
    #[inline]
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Builds a matrix whose columns are the given basis vectors.
    ///
    /// For an orthonormal right-handed basis this is the rotation that
    /// carries the world axes onto `x`, `y` and `z`.
    pub fn from_cols(x: Vector3, y: Vector3, z: Vector3) -> Self {
        Self::new([
            [x.x, y.x, z.x],
            [x.y, y.y, z.y],
            [x.z, y.z, z.z],
        ])
    }

    /// Returns column `index` as a vector
    #[inline]
    pub fn col(&self, index: usize) -> Vector3 {
        Vector3::new(self.data[0][index], self.data[1][index], self.data[2][index])
    }

    /// Returns the determinant of the matrix
    pub fn determinant(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;

        a * (e * i - f * h) -
        b * (d * i - f * g) +
        c * (d * h - e * g)
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;
        Self::new([
            [a, d, g],
            [b, e, h],
            [c, f, i],
        ])
    }

    /// Multiplies the matrix by a column vector
    #[inline]
    pub fn multiply_vector(&self, v: Vector3) -> Vector3 {
        let [r0, r1, r2] = self.data;
        let row = |r: [f32; 3]| r[0] * v.x + r[1] * v.y + r[2] * v.z;
        Vector3::new(row(r0), row(r1), row(r2))
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix3<f32> {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;
        na::Matrix3::new(
            a, b, c,
            d, e, f,
            g, h, i,
        )
    }

    #[inline]
    pub fn from_nalgebra(m: &na::Matrix3<f32>) -> Self {
        let mut data = [[0.0; 3]; 3];
        for (row, values) in data.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = m[(row, col)];
            }
        }
        Self { data }
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, r) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[ {}, {}, {} ]", r[0], r[1], r[2])?;
        }
        Ok(())
    }
}

// === Matrix4 Implementation ===

impl Matrix4 {
    #[inline]
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Reads 16 packed floats in column-major order
    pub fn from_cols_array(m: &[f32; 16]) -> Self {
        let mut data = [[0.0; 4]; 4];
        for (col, chunk) in m.chunks_exact(4).enumerate() {
            for (row, value) in chunk.iter().enumerate() {
                data[row][col] = *value;
            }
        }
        Self { data }
    }

    /// Writes the matrix as 16 packed floats in column-major order
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (col, chunk) in out.chunks_exact_mut(4).enumerate() {
            for (row, value) in chunk.iter_mut().enumerate() {
                *value = self.data[row][col];
            }
        }
        out
    }

    /// Creates a 4x4 matrix from a 3x3 rotation matrix and a translation
    pub fn from_rotation_translation(rotation: Matrix3, translation: Vector3) -> Self {
        let r = rotation.data;
        Self::new([
            [r[0][0], r[0][1], r[0][2], translation.x],
            [r[1][0], r[1][1], r[1][2], translation.y],
            [r[2][0], r[2][1], r[2][2], translation.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let mut data = [[0.0; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = self.data[j][i];
            }
        }
        Self { data }
    }

    /// Multiplies the matrix by a homogeneous column vector
    pub fn multiply_vector(&self, v: Vector4) -> Vector4 {
        let v = v.to_array();
        let mut out = [0.0; 4];
        for (row, value) in out.iter_mut().enumerate() {
            *value = self.data[row].iter().zip(v.iter()).map(|(m, c)| m * c).sum();
        }
        Vector4::from(out)
    }

    /// Transforms a point (w = 1), dividing through by the resulting w
    pub fn multiply_point(&self, p: Vector3) -> Vector3 {
        let result = self.multiply_vector(Vector4::from_vector3(p, 1.0));

        if result.w.abs() > crate::math::EPSILON {
            result.xyz() / result.w
        } else {
            result.xyz()
        }
    }

    /// Transforms a direction (w = 0), ignoring translation
    #[inline]
    pub fn multiply_direction(&self, v: Vector3) -> Vector3 {
        self.multiply_vector(Vector4::from_vector3(v, 0.0)).xyz()
    }

    /// Extract the upper-left 3x3 matrix (rotation part)
    #[inline]
    pub fn to_matrix3(&self) -> Matrix3 {
        let m = &self.data;
        Matrix3::new([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// Extract the translation part of the matrix
    #[inline]
    pub fn get_translation(&self) -> Vector3 {
        Vector3::new(self.data[0][3], self.data[1][3], self.data[2][3])
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix4<f32> {
        na::Matrix4::from_column_slice(&self.to_cols_array())
    }

    #[inline]
    pub fn from_nalgebra(m: &na::Matrix4<f32>) -> Self {
        let mut packed = [0.0; 16];
        packed.copy_from_slice(m.as_slice());
        Self::from_cols_array(&packed)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, r) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[ {}, {}, {}, {} ]", r[0], r[1], r[2], r[3])?;
        }
        Ok(())
    }
}
