//! Storage order of the flat buffer

/// Storage convention mapping multi-dimensional indices onto the flat buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Last axis varies fastest (C order)
    #[default]
    RowMajor,
    /// First axis varies fastest (Fortran order)
    ColumnMajor,
}

impl Layout {
    /// Layout named by the header's `fortran_order` flag
    pub fn from_fortran_order(fortran_order: bool) -> Self {
        if fortran_order {
            Layout::ColumnMajor
        } else {
            Layout::RowMajor
        }
    }

    /// Value of the header's `fortran_order` flag
    pub fn is_fortran_order(self) -> bool {
        self == Layout::ColumnMajor
    }
}
