//! The 16-byte identifier value and its ordering.

use crate::{UuidError, UuidResult};
use std::any::Any;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A 128-bit identifier stored as 16 bytes, `b0..b15`.
///
/// The bytes carry no field structure beyond what the generators put there. Values are `Copy`
/// and immutable; every constructor takes or produces exactly 16 bytes.
///
/// # Ordering
///
/// Comparison is lexicographic over the bytes in index order, byte 0 most significant. This is
/// the same order as the lowercase text of the `N` layout.
///
/// # Construction
/// - [`Uuid::from_bytes`] / [`Uuid::from_slice`] from raw bytes.
/// - [`Uuid::parse`] and friends from text.
/// - [`Uuid::new_time_ordered`] / [`Uuid::new_sort_optimized`] for fresh values.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero identifier. Also the [`Default`].
    pub const EMPTY: Uuid = Uuid([0; 16]);

    /// The all-ones identifier.
    pub const MAX: Uuid = Uuid([0xFF; 16]);

    /// Wraps 16 bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Copies an identifier out of a byte slice.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Exactly 16 bytes, `b0` first.
    ///
    /// # Returns
    ///
    /// Returns the identifier holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] unless `bytes` is exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> UuidResult<Self> {
        <[u8; 16]>::try_from(bytes).map(Self).map_err(|_| {
            UuidError::InvalidInput(format!(
                "UUID requires exactly 16 bytes, got {}",
                bytes.len()
            ))
        })
    }

    /// Returns the bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the bytes.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Copies the 16 bytes to the front of `dest`.
    ///
    /// # Arguments
    ///
    /// * `dest` - Destination buffer. Bytes past index 15 are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `dest` is shorter than 16 bytes; nothing is written.
    pub fn write_bytes(&self, dest: &mut [u8]) -> UuidResult<()> {
        let len = dest.len();
        let dest = dest.get_mut(..16).ok_or_else(|| {
            UuidError::InvalidInput(format!(
                "destination must hold at least 16 bytes, got {len}"
            ))
        })?;
        dest.copy_from_slice(&self.0);
        Ok(())
    }

    /// Returns true for [`Uuid::EMPTY`].
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// XOR of the four 32-bit little-endian words.
    ///
    /// Equal identifiers always have equal hash codes. The [`Hash`] impl feeds this value.
    pub fn hash_code(&self) -> u32 {
        let b = &self.0;
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
            ^ u32::from_le_bytes([b[4], b[5], b[6], b[7]])
            ^ u32::from_le_bytes([b[8], b[9], b[10], b[11]])
            ^ u32::from_le_bytes([b[12], b[13], b[14], b[15]])
    }

    /// Equality against an arbitrary value. Anything that is not a `Uuid`, including `None`, is
    /// unequal.
    pub fn equals_object(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|value| value.downcast_ref::<Uuid>())
            .is_some_and(|uuid| uuid == self)
    }

    /// Ordering against an arbitrary value.
    ///
    /// `None` sorts before every identifier, so the result is [`Ordering::Greater`].
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::TypeMismatch`] if `other` holds something other than a `Uuid`.
    pub fn compare_to_object(&self, other: Option<&dyn Any>) -> UuidResult<Ordering> {
        match other {
            None => Ok(Ordering::Greater),
            Some(value) => value
                .downcast_ref::<Uuid>()
                .map(|uuid| self.cmp(uuid))
                .ok_or(UuidError::TypeMismatch("Uuid")),
        }
    }
}

// Whole-value comparisons on u128. Big-endian keeps byte 0 most significant.
impl PartialEq for Uuid {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        u128::from_ne_bytes(self.0) == u128::from_ne_bytes(other.0)
    }
}

impl Eq for Uuid {}

impl Ord for Uuid {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        u128::from_be_bytes(self.0).cmp(&u128::from_be_bytes(other.0))
    }
}

impl PartialOrd for Uuid {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Uuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = UuidError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Uuid::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Byte-for-byte interop with the `uuid` crate.
impl From<::uuid::Uuid> for Uuid {
    fn from(uuid: ::uuid::Uuid) -> Self {
        Self(uuid.into_bytes())
    }
}

impl From<Uuid> for ::uuid::Uuid {
    fn from(uuid: Uuid) -> Self {
        ::uuid::Uuid::from_bytes(uuid.0)
    }
}
