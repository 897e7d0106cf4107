// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which components each coordinate tuple carries.
///
/// X and Y always come first; Z precedes M when both are present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GeometryLayout {
    /// X, Y.
    #[default]
    Xy,
    /// X, Y, Z.
    Xyz,
    /// X, Y, M (measure).
    Xym,
    /// X, Y, Z, M.
    Xyzm,
}

impl GeometryLayout {
    /// Number of values per tuple.
    #[must_use]
    pub const fn stride(self) -> usize {
        match self {
            Self::Xy => 2,
            Self::Xyz | Self::Xym => 3,
            Self::Xyzm => 4,
        }
    }
}
