use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier used across the flow network.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// Panics if `index == u32::MAX`; networks never get that large.
    pub fn from_index(index: u32) -> Self {
        let raw = index.checked_add(1).expect("id index overflow");
        Self(NonZeroU32::new(raw).expect("index+1 is nonzero"))
    }

    /// Create an Id from a `usize` position in a vector.
    pub fn from_usize(index: usize) -> Self {
        Self::from_index(u32::try_from(index).expect("id index overflow"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Recover the 0-based index as a `usize`, for slice access.
    #[inline]
    pub fn idx(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type NodeId = Id;
pub type EdgeId = Id;
