//! All-zero checks for numeric slices.
//!
//! [`Zeroed`] answers one question: does this container hold nothing but
//! zeros? It is implemented for `[T]` over any numeric element type (via
//! [`num_traits::Zero`]) and for `Option<&S>`, where an absent container
//! counts as zeroed, the usual convention when probing optional buffers.

use num_traits::Zero;

/// Containers whose contents can be checked for being entirely zero.
///
/// # Examples
///
/// ```rust
/// use recollect::search::Zeroed;
///
/// assert!([0u8, 0, 0].is_zeroed());
/// assert!(![0u8, 1, 0].is_zeroed());
///
/// // Empty slices are vacuously zeroed.
/// let empty: &[u32] = &[];
/// assert!(empty.is_zeroed());
///
/// // Absent containers count as zeroed too.
/// let missing: Option<&[u8]> = None;
/// assert!(missing.is_zeroed());
/// assert!(!Some(&[1u8, 0][..]).is_zeroed());
/// ```
pub trait Zeroed {
    /// Returns `true` if every element equals the element type's zero value.
    fn is_zeroed(&self) -> bool;
}

impl<T: Zero> Zeroed for [T] {
    #[inline]
    fn is_zeroed(&self) -> bool {
        self.iter().all(Zero::is_zero)
    }
}

impl<S: Zeroed + ?Sized> Zeroed for Option<&S> {
    #[inline]
    fn is_zeroed(&self) -> bool {
        self.is_none_or(Zeroed::is_zeroed)
    }
}

// =============================================================================
// Tests
// =============================================================================
