//! Vectors.

use crate::{
    arity::{Arity, HasW, HasZ, SupportedArity},
    num,
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    array, fmt,
    ops::{Index, IndexMut},
};

/// A vector with `N` single-precision components, where `N` is 2, 3 or 4.
///
/// The components live in a contiguous `[f32; N]`, and that array is the
/// only storage. The named components ([`x`](Self::x), [`y`](Self::y),
/// [`z`](Self::z), [`w`](Self::w)), the leading sub-vectors
/// ([`xy`](Self::xy), [`xyz`](Self::xyz)) and the flat array
/// ([`as_array`](Self::as_array)) are all views into it, so a write through
/// any one of them is seen through all the others.
///
/// Every operation is defined once for all arities. Division by zero,
/// normalizing a zero vector and similar domain errors are not checked and
/// produce infinities or NaNs following regular `f32` semantics.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<const N: usize> {
    components: [f32; N],
}

/// A 2-dimensional vector.
pub type Vector2 = Vector<2>;

/// A 3-dimensional vector.
pub type Vector3 = Vector<3>;

/// A 4-dimensional vector.
pub type Vector4 = Vector<4>;

// SAFETY: `Vector<N>` is a transparent wrapper around `[f32; N]`, which is
// zeroable and has no padding or invalid bit patterns.
unsafe impl<const N: usize> Zeroable for Vector<N> {}
unsafe impl<const N: usize> Pod for Vector<N> {}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self::from_array([x, y])
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_array([x, y, z])
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_array([x, y, z, w])
    }
}

impl<const N: usize> Vector<N>
where
    Arity<N>: SupportedArity,
{
    /// The vector with all components zero.
    pub const ZERO: Self = Self::same(0.0);

    /// Creates a vector from an array of components in `x, y, z, w` order.
    #[inline]
    pub const fn from_array(components: [f32; N]) -> Self {
        Self { components }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::ZERO
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::from_array([value; N])
    }

    /// Creates a vector from the first `N` values of the given slice. Any
    /// further values are ignored.
    ///
    /// # Panics
    /// If the slice has fewer than `N` values.
    #[inline]
    pub fn from_slice(values: &[f32]) -> Self {
        let Some(components) = values.first_chunk::<N>() else {
            panic!(
                "{} requires {} values but the slice has {}",
                <Arity<N> as SupportedArity>::TYPE_NAME,
                N,
                values.len()
            );
        };
        Self::from_array(*components)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.components[1]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// The components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[f32; N] {
        &self.components
    }

    /// The components as a mutable array.
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [f32; N] {
        &mut self.components
    }

    /// The components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.components
    }

    /// The components as a mutable slice.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.components
    }

    /// Copies the components into an array.
    #[inline]
    pub const fn to_array(self) -> [f32; N] {
        self.components
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f32) -> f32) -> Self {
        Self::from_array(self.components.map(f))
    }

    /// Whether the predicate holds for every component. Stops at the first
    /// component it does not hold for.
    ///
    /// ```
    /// # use impact_vector::Vector3;
    /// assert!(Vector3::new(1.0, 2.0, 3.0).all(|c| c > 0.0));
    /// assert!(!Vector3::new(1.0, f32::NAN, 3.0).all(f32::is_finite));
    /// ```
    #[inline]
    pub fn all(&self, predicate: impl FnMut(f32) -> bool) -> bool {
        self.components.iter().copied().all(predicate)
    }

    /// Whether the predicate holds for at least one component. Stops at the
    /// first component it holds for.
    #[inline]
    pub fn any(&self, predicate: impl FnMut(f32) -> bool) -> bool {
        self.components.iter().copied().any(predicate)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        self * other
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        self / other
    }

    /// Adds the given scalar to every component.
    #[inline]
    pub fn add_scalar(&self, scalar: f32) -> Self {
        self + scalar
    }

    /// Subtracts the given scalar from every component.
    #[inline]
    pub fn sub_scalar(&self, scalar: f32) -> Self {
        self - scalar
    }

    /// Multiplies every component by the given scalar.
    #[inline]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        self * scalar
    }

    /// Divides every component by the given scalar.
    #[inline]
    pub fn div_scalar(&self, scalar: f32) -> Self {
        self / scalar
    }

    /// Flips the sign of every component.
    #[inline]
    pub fn negated(&self) -> Self {
        -self
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .reduce(|sum, product| sum + product)
            .unwrap_or(0.0)
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the Euclidean distance to another vector.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (other - self).norm_squared()
    }

    /// Computes the Euclidean distance to another vector.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Computes the normalized version of the vector.
    ///
    /// The vector must not be zero, otherwise all components of the result
    /// are NaN.
    #[inline]
    pub fn normalized(&self) -> Self {
        self.div_scalar(self.norm())
    }

    /// Linearly interpolates from this vector (`t = 0`) towards `other`
    /// (`t = 1`). `t` is not clamped, so values outside `[0, 1]`
    /// extrapolate along the line through the two vectors.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector. Growing an
    /// axis-aligned box by a point uses this on the upper corner.
    ///
    /// A NaN component in `self` yields the component in `other`.
    #[inline]
    pub fn upper_bound(&self, other: &Self) -> Self {
        self.zip_mapped(other, num::greater)
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector.
    ///
    /// A NaN component in `self` yields the component in `other`.
    #[inline]
    pub fn lower_bound(&self, other: &Self) -> Self {
        self.zip_mapped(other, num::lesser)
    }

    /// Clamps each component to lie between the corresponding components of
    /// `lower` and `upper`, computed as `min(max(v, lower), upper)`.
    ///
    /// The bounds are not validated. For a component where the lower bound
    /// exceeds the upper bound, the result is the upper bound.
    #[inline]
    pub fn clamped(&self, lower: &Self, upper: &Self) -> Self {
        Self::from_array(array::from_fn(|i| {
            num::clamp(
                self.components[i],
                lower.components[i],
                upper.components[i],
            )
        }))
    }

    /// Whether every component differs from the corresponding component of
    /// `other` by less than [`EPSILON`](crate::num::EPSILON).
    ///
    /// The tolerance is absolute, so this is unreliable for components much
    /// larger or much smaller than 1. The [`RelativeEq`] implementation can
    /// be used instead in those cases.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self - other).all(num::is_negligible)
    }

    #[inline]
    fn zip_mapped(&self, other: &Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self::from_array(array::from_fn(|i| {
            f(self.components[i], other.components[i])
        }))
    }
}

impl<const N: usize> Vector<N>
where
    Arity<N>: HasZ,
{
    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.components[2]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.components[2]
    }

    /// The x- and y-components as a 2D vector sharing storage with this one.
    #[inline]
    pub fn xy(&self) -> &Vector2 {
        bytemuck::from_bytes(bytemuck::cast_slice(&self.components[..2]))
    }

    /// The x- and y-components as a mutable 2D vector. Writes to it modify
    /// this vector.
    #[inline]
    pub fn xy_mut(&mut self) -> &mut Vector2 {
        bytemuck::from_bytes_mut(bytemuck::cast_slice_mut(&mut self.components[..2]))
    }
}

impl<const N: usize> Vector<N>
where
    Arity<N>: HasW,
{
    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.components[3]
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.components[3]
    }

    /// The x-, y- and z-components as a 3D vector sharing storage with this
    /// one.
    #[inline]
    pub fn xyz(&self) -> &Vector3 {
        bytemuck::from_bytes(bytemuck::cast_slice(&self.components[..3]))
    }

    /// The x-, y- and z-components as a mutable 3D vector. Writes to it
    /// modify this vector.
    #[inline]
    pub fn xyz_mut(&mut self) -> &mut Vector3 {
        bytemuck::from_bytes_mut(bytemuck::cast_slice_mut(&mut self.components[..3]))
    }
}

impl<const N: usize> Default for Vector<N>
where
    Arity<N>: SupportedArity,
{
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N>
where
    Arity<N>: SupportedArity,
{
    #[inline]
    fn from(components: [f32; N]) -> Self {
        Self::from_array(components)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N]
where
    Arity<N>: SupportedArity,
{
    #[inline]
    fn from(vector: Vector<N>) -> Self {
        vector.to_array()
    }
}

impl<const N: usize> AsRef<[f32]> for Vector<N>
where
    Arity<N>: SupportedArity,
{
    #[inline]
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl<const N: usize> AsMut<[f32]> for Vector<N>
where
    Arity<N>: SupportedArity,
{
    #[inline]
    fn as_mut(&mut self) -> &mut [f32] {
        self.as_mut_slice()
    }
}

impl_binop!(Add, add, Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.zip_mapped(b, |lhs, rhs| lhs + rhs)
});

impl_binop!(Sub, sub, Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.zip_mapped(b, |lhs, rhs| lhs - rhs)
});

impl_binop!(Mul, mul, Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.zip_mapped(b, |lhs, rhs| lhs * rhs)
});

impl_binop!(Div, div, Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.zip_mapped(b, |lhs, rhs| lhs / rhs)
});

impl_binop!(Add, add, Vector<N>, f32, Vector<N>, |a, b| {
    a.mapped(|component| component + *b)
});

impl_binop!(Sub, sub, Vector<N>, f32, Vector<N>, |a, b| {
    a.mapped(|component| component - *b)
});

impl_binop!(Mul, mul, Vector<N>, f32, Vector<N>, |a, b| {
    a.mapped(|component| component * *b)
});

impl_binop!(Mul, mul, f32, Vector<N>, Vector<N>, |a, b| { b * *a });

impl_binop!(Div, div, Vector<N>, f32, Vector<N>, |a, b| {
    a.mapped(|component| component / *b)
});

impl_binop_assign!(AddAssign, add_assign, Vector<N>, Vector<N>, |a, b| {
    for (component, rhs) in a.components.iter_mut().zip(&b.components) {
        *component += rhs;
    }
});

impl_binop_assign!(SubAssign, sub_assign, Vector<N>, Vector<N>, |a, b| {
    for (component, rhs) in a.components.iter_mut().zip(&b.components) {
        *component -= rhs;
    }
});

impl_binop_assign!(MulAssign, mul_assign, Vector<N>, Vector<N>, |a, b| {
    for (component, rhs) in a.components.iter_mut().zip(&b.components) {
        *component *= rhs;
    }
});

impl_binop_assign!(DivAssign, div_assign, Vector<N>, Vector<N>, |a, b| {
    for (component, rhs) in a.components.iter_mut().zip(&b.components) {
        *component /= rhs;
    }
});

impl_binop_assign!(AddAssign, add_assign, Vector<N>, f32, |a, b| {
    for component in &mut a.components {
        *component += *b;
    }
});

impl_binop_assign!(SubAssign, sub_assign, Vector<N>, f32, |a, b| {
    for component in &mut a.components {
        *component -= *b;
    }
});

impl_binop_assign!(MulAssign, mul_assign, Vector<N>, f32, |a, b| {
    for component in &mut a.components {
        *component *= *b;
    }
});

impl_binop_assign!(DivAssign, div_assign, Vector<N>, f32, |a, b| {
    for component in &mut a.components {
        *component /= *b;
    }
});

impl_unary_op!(Neg, neg, Vector<N>, Vector<N>, |val| {
    val.mapped(|component| -component)
});

impl<const N: usize> Index<usize> for Vector<N>
where
    Arity<N>: SupportedArity,
{
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N>
where
    Arity<N>: SupportedArity,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl_abs_diff_eq!(Vector<N>, |a, b, epsilon| {
    a.components
        .iter()
        .zip(&b.components)
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Vector<N>, |a, b, epsilon, max_relative| {
    a.components
        .iter()
        .zip(&b.components)
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

impl<const N: usize> fmt::Debug for Vector<N>
where
    Arity<N>: SupportedArity,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct(<Arity<N> as SupportedArity>::TYPE_NAME);
        for (name, component) in <Arity<N> as SupportedArity>::COMPONENT_NAMES
            .iter()
            .zip(&self.components)
        {
            debug.field(name, component);
        }
        debug.finish()
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Vector<N>
where
    Arity<N>: SupportedArity,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(N)?;
        for component in &self.components {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Vector<N>
where
    Arity<N>: SupportedArity,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ComponentVisitor<const N: usize>;

        impl<'de, const N: usize> serde::de::Visitor<'de> for ComponentVisitor<N> {
            type Value = [f32; N];

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {N} floats")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut components = [0.0; N];
                for (idx, component) in components.iter_mut().enumerate() {
                    *component = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(idx, &self))?;
                }
                Ok(components)
            }
        }

        deserializer
            .deserialize_tuple(N, ComponentVisitor::<N>)
            .map(Self::from_array)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a, const N: usize> arbitrary::Arbitrary<'a> for Vector<N>
where
    Arity<N>: SupportedArity,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::from_array(u.arbitrary()?))
    }
}
