//! Compile-time markers for the supported vector arities.
//!
//! [`Vector<N>`](crate::Vector) only has operations when `Arity<N>`
//! implements [`SupportedArity`], which is the case for N = 2, 3 and 4.
//! Components beyond `x` and `y` are gated by [`HasZ`] and [`HasW`].

/// Marker type for a vector with `N` components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arity<const N: usize>;

/// Implemented for the arities vectors can have.
pub trait SupportedArity: private::Sealed {
    /// Name of the vector type with this arity.
    const TYPE_NAME: &'static str;

    /// Names of the components, in storage order.
    const COMPONENT_NAMES: &'static [&'static str];
}

/// Implemented for arities that include a `z` component.
pub trait HasZ: SupportedArity {}

/// Implemented for arities that include a `w` component.
pub trait HasW: HasZ {}

impl SupportedArity for Arity<2> {
    const TYPE_NAME: &'static str = "Vector2";
    const COMPONENT_NAMES: &'static [&'static str] = &["x", "y"];
}

impl SupportedArity for Arity<3> {
    const TYPE_NAME: &'static str = "Vector3";
    const COMPONENT_NAMES: &'static [&'static str] = &["x", "y", "z"];
}

impl SupportedArity for Arity<4> {
    const TYPE_NAME: &'static str = "Vector4";
    const COMPONENT_NAMES: &'static [&'static str] = &["x", "y", "z", "w"];
}

impl HasZ for Arity<3> {}
impl HasZ for Arity<4> {}

impl HasW for Arity<4> {}

mod private {
    pub trait Sealed {}

    impl Sealed for super::Arity<2> {}
    impl Sealed for super::Arity<3> {}
    impl Sealed for super::Arity<4> {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component_names<const N: usize>() -> &'static [&'static str]
    where
        Arity<N>: SupportedArity,
    {
        <Arity<N> as SupportedArity>::COMPONENT_NAMES
    }

    #[test]
    fn component_names_match_arity() {
        assert_eq!(component_names::<2>().len(), 2);
        assert_eq!(component_names::<3>().len(), 3);
        assert_eq!(component_names::<4>().len(), 4);
    }

    #[test]
    fn higher_arities_extend_lower_component_names() {
        assert!(component_names::<3>().starts_with(component_names::<2>()));
        assert!(component_names::<4>().starts_with(component_names::<3>()));
    }
}
