/// An input to the cargo packing routine.
///
/// `CargoItem` carries the caller's own identifier. Consumers assign meaning
/// to the IDs and use them to associate placements back to the application's
/// own objects; `yardpack` only requires that IDs are unique within one
/// packing call.
#[derive(Debug, Clone)]
pub struct CargoItem {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) allow_rotate: bool,
    pub(crate) kind: Option<String>,
}

impl CargoItem {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N, size: (f64, f64)) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width: size.0,
            height: size.1,
            allow_rotate: true,
            kind: None,
        }
    }

    /// Sets whether this item may be rotated 90 degrees during placement.
    /// Defaults to true.
    pub fn allow_rotate(mut self, allow: bool) -> Self {
        self.allow_rotate = allow;
        self
    }

    /// Attaches a category tag, like "container" or "pallet". The tag is
    /// copied through to the placement untouched.
    pub fn kind<K: Into<String>>(mut self, kind: K) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub(crate) fn footprint(&self) -> f64 {
        self.width * self.height
    }
}

/// A cargo item that was placed by a packing call.
///
/// Each `Placement` corresponds to exactly one `CargoItem` passed to
/// [`YardPacker::pack`][crate::YardPacker::pack]. Position is the top-left
/// corner of the item in area coordinates; width and height are the item's
/// true footprint after rotation, with the boundary margin already excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) kind: Option<String>,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) rotated: bool,
}

impl Placement {
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[inline]
    pub fn rotated(&self) -> bool {
        self.rotated
    }
}
