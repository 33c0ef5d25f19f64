/// The byte-order policy carried by a reader or writer.
///
/// `Default` is kept distinct from `Little` and `Big` so that code can tell whether the caller
/// chose an order at all. It is only turned into a concrete order by [`Endian::resolve`], at the
/// point where bytes are actually transferred.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Endian {
    /// The host's native byte order.
    #[default]
    Default,
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

/// A concrete byte order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ByteOrder {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    /// The byte order of the target this crate was compiled for.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;

    /// The byte order of the target this crate was compiled for.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;

    /// Returns `true` if values in this order can be copied to and from memory without
    /// reversing their bytes.
    #[inline(always)]
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

impl Endian {
    /// Resolves the policy to a concrete byte order. `Default` resolves to [`ByteOrder::NATIVE`].
    #[inline(always)]
    pub fn resolve(self) -> ByteOrder {
        match self {
            Self::Default => ByteOrder::NATIVE,
            Self::Little => ByteOrder::Little,
            Self::Big => ByteOrder::Big,
        }
    }

    /// Returns `true` if no explicit byte order was chosen.
    #[inline(always)]
    pub fn is_default(self) -> bool {
        self == Self::Default
    }
}

impl From<ByteOrder> for Endian {
    fn from(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Self::Little,
            ByteOrder::Big => Self::Big,
        }
    }
}
