use std::cell::Cell;
use std::rc::Rc;

/// The process-wide "an inspection is running" flag.
///
/// Only the inspection session holds this writer half; `raise`/`clear` are
/// crate-private so nothing outside the session can flip it. Collaborators
/// such as free look get an [`InspectionFlagReader`].
#[derive(Debug, Default)]
pub struct InspectionFlag {
    cell: Rc<Cell<bool>>,
}

impl InspectionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reader(&self) -> InspectionFlagReader {
        InspectionFlagReader {
            cell: Rc::clone(&self.cell),
        }
    }

    pub(crate) fn raise(&self) {
        self.cell.set(true);
    }

    pub(crate) fn clear(&self) {
        self.cell.set(false);
    }
}

#[derive(Clone, Debug)]
pub struct InspectionFlagReader {
    cell: Rc<Cell<bool>>,
}

impl InspectionFlagReader {
    #[inline]
    pub fn is_inspecting(&self) -> bool {
        self.cell.get()
    }
}
