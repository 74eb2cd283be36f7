use super::cell::OwnOrBorrow;
use crate::core::error::BasisSetError;
use nalgebra::Point3;

/// Evaluates one Gaussian term `c·exp(−α‖r−r0‖²)`.
fn gaussian_value(coefficient: f64, exponent: f64, center: &Point3<f64>, point: &Point3<f64>) -> f64 {
    let r2 = (point - center).norm_squared();
    coefficient * (-exponent * r2).exp()
}

/// The shared backing of `Primitive` and `PrimitiveViewMut`.
///
/// Each parameter sits in its own [`OwnOrBorrow`] cell, so a single
/// implementation serves both the standalone owning primitive and a
/// primitive that must track slots inside a parent's flattened arrays.
#[derive(Debug)]
pub(crate) struct GaussianSlot<'a> {
    coefficient: OwnOrBorrow<'a, f64>,
    exponent: OwnOrBorrow<'a, f64>,
    center: OwnOrBorrow<'a, Point3<f64>>,
}

impl<'a> GaussianSlot<'a> {
    pub(crate) fn borrowed(
        coefficient: &'a mut f64,
        exponent: &'a mut f64,
        center: &'a mut Point3<f64>,
    ) -> Self {
        Self {
            coefficient: OwnOrBorrow::Borrowed(coefficient),
            exponent: OwnOrBorrow::Borrowed(exponent),
            center: OwnOrBorrow::Borrowed(center),
        }
    }

    fn reborrow(&mut self) -> GaussianSlot<'_> {
        GaussianSlot {
            coefficient: self.coefficient.reborrow(),
            exponent: self.exponent.reborrow(),
            center: self.center.reborrow(),
        }
    }

    fn evaluate(&self, point: &Point3<f64>) -> f64 {
        gaussian_value(
            *self.coefficient.value(),
            *self.exponent.value(),
            self.center.value(),
            point,
        )
    }

    fn triple(&self) -> (f64, f64, Point3<f64>) {
        (
            *self.coefficient.value(),
            *self.exponent.value(),
            *self.center.value(),
        )
    }
}

impl GaussianSlot<'static> {
    fn owned(coefficient: f64, exponent: f64, center: Point3<f64>) -> Self {
        Self {
            coefficient: OwnOrBorrow::Owned(coefficient),
            exponent: OwnOrBorrow::Owned(exponent),
            center: OwnOrBorrow::Owned(center),
        }
    }

    fn zeroed() -> Self {
        Self::owned(0.0, 0.0, Point3::origin())
    }
}

impl PartialEq for GaussianSlot<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

/// A single primitive Gaussian function `c·exp(−α‖r−r0‖²)`.
///
/// This is the owning leaf of the basis-set hierarchy. A default-constructed
/// primitive is *null*: it has no backing storage at all, which is distinct
/// from holding an all-zero value. Read accessors on a null primitive fail
/// with [`BasisSetError::Uninitialized`]; whole-object mutable accessors
/// never fail and instead lazily materialize zeroed storage.
#[derive(Debug, Default, PartialEq)]
pub struct Primitive {
    slot: Option<GaussianSlot<'static>>,
}

impl Primitive {
    /// Creates a new primitive owning the given parameters.
    ///
    /// # Arguments
    ///
    /// * `coefficient` - The contraction coefficient of the primitive.
    /// * `exponent` - The Gaussian exponent α.
    /// * `center` - The point the primitive is centered on.
    pub fn new(coefficient: f64, exponent: f64, center: Point3<f64>) -> Self {
        Self {
            slot: Some(GaussianSlot::owned(coefficient, exponent, center)),
        }
    }

    /// Whether this primitive has no backing storage.
    pub fn is_null(&self) -> bool {
        self.slot.is_none()
    }

    /// Returns the contraction coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the primitive is null.
    pub fn coefficient(&self) -> Result<&f64, BasisSetError> {
        self.slot
            .as_ref()
            .map(|s| s.coefficient.value())
            .ok_or(BasisSetError::Uninitialized { what: "primitive" })
    }

    /// Returns the contraction coefficient for writing.
    ///
    /// Never fails: a null primitive materializes zeroed storage first.
    pub fn coefficient_mut(&mut self) -> &mut f64 {
        self.slot
            .get_or_insert_with(GaussianSlot::zeroed)
            .coefficient
            .value_mut()
    }

    /// Returns the Gaussian exponent α.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the primitive is null.
    pub fn exponent(&self) -> Result<&f64, BasisSetError> {
        self.slot
            .as_ref()
            .map(|s| s.exponent.value())
            .ok_or(BasisSetError::Uninitialized { what: "primitive" })
    }

    /// Returns the Gaussian exponent for writing, materializing if null.
    pub fn exponent_mut(&mut self) -> &mut f64 {
        self.slot
            .get_or_insert_with(GaussianSlot::zeroed)
            .exponent
            .value_mut()
    }

    /// Returns the center point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the primitive is null.
    pub fn center(&self) -> Result<&Point3<f64>, BasisSetError> {
        self.slot
            .as_ref()
            .map(|s| s.center.value())
            .ok_or(BasisSetError::Uninitialized { what: "primitive" })
    }

    /// Returns the center point for writing, materializing if null.
    pub fn center_mut(&mut self) -> &mut Point3<f64> {
        self.slot
            .get_or_insert_with(GaussianSlot::zeroed)
            .center
            .value_mut()
    }

    /// Evaluates the primitive at one point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the primitive is null.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<f64, BasisSetError> {
        self.slot
            .as_ref()
            .map(|s| s.evaluate(point))
            .ok_or(BasisSetError::Uninitialized { what: "primitive" })
    }

    /// Evaluates the primitive at every point of a set, in order.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the primitive is null.
    pub fn evaluate_many(&self, points: &[Point3<f64>]) -> Result<Vec<f64>, BasisSetError> {
        let slot = self
            .slot
            .as_ref()
            .ok_or(BasisSetError::Uninitialized { what: "primitive" })?;
        Ok(points.iter().map(|p| slot.evaluate(p)).collect())
    }

    /// Returns a read-only view aliasing this primitive's storage.
    ///
    /// A null primitive yields a null view.
    pub fn view(&self) -> PrimitiveView<'_> {
        match &self.slot {
            Some(s) => PrimitiveView::from_parts(
                s.coefficient.value(),
                s.exponent.value(),
                s.center.value(),
            ),
            None => PrimitiveView::default(),
        }
    }

    /// Returns a mutable view aliasing this primitive's storage,
    /// materializing zeroed storage if the primitive is null.
    pub fn view_mut(&mut self) -> PrimitiveViewMut<'_> {
        PrimitiveViewMut {
            slot: Some(self.slot.get_or_insert_with(GaussianSlot::zeroed).reborrow()),
        }
    }

    fn triple(&self) -> Option<(f64, f64, Point3<f64>)> {
        self.slot.as_ref().map(GaussianSlot::triple)
    }
}

impl Clone for Primitive {
    fn clone(&self) -> Self {
        Self {
            slot: self
                .slot
                .as_ref()
                .map(|s| {
                    let (c, a, r) = s.triple();
                    GaussianSlot::owned(c, a, r)
                }),
        }
    }
}

/// A read-only view of a primitive Gaussian.
///
/// Aliases coefficient/exponent/center storage owned elsewhere; a
/// default-constructed view is null and aliases nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrimitiveView<'a> {
    parts: Option<PrimitiveParts<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PrimitiveParts<'a> {
    coefficient: &'a f64,
    exponent: &'a f64,
    center: &'a Point3<f64>,
}

impl<'a> PrimitiveView<'a> {
    /// Builds a view from raw component references.
    pub fn from_parts(coefficient: &'a f64, exponent: &'a f64, center: &'a Point3<f64>) -> Self {
        Self {
            parts: Some(PrimitiveParts {
                coefficient,
                exponent,
                center,
            }),
        }
    }

    /// Whether this view aliases nothing.
    pub fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Returns the aliased contraction coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn coefficient(&self) -> Result<&'a f64, BasisSetError> {
        self.parts.map(|p| p.coefficient).ok_or(NULL_VIEW)
    }

    /// Returns the aliased Gaussian exponent.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn exponent(&self) -> Result<&'a f64, BasisSetError> {
        self.parts.map(|p| p.exponent).ok_or(NULL_VIEW)
    }

    /// Returns the aliased center point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn center(&self) -> Result<&'a Point3<f64>, BasisSetError> {
        self.parts.map(|p| p.center).ok_or(NULL_VIEW)
    }

    /// Evaluates the aliased primitive at one point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<f64, BasisSetError> {
        let p = self.parts.ok_or(NULL_VIEW)?;
        Ok(gaussian_value(*p.coefficient, *p.exponent, p.center, point))
    }

    /// Evaluates the aliased primitive at every point of a set, in order.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn evaluate_many(&self, points: &[Point3<f64>]) -> Result<Vec<f64>, BasisSetError> {
        let p = self.parts.ok_or(NULL_VIEW)?;
        Ok(points
            .iter()
            .map(|r| gaussian_value(*p.coefficient, *p.exponent, p.center, r))
            .collect())
    }

    fn triple(&self) -> Option<(f64, f64, Point3<f64>)> {
        self.parts
            .map(|p| (*p.coefficient, *p.exponent, *p.center))
    }
}

const NULL_VIEW: BasisSetError = BasisSetError::Uninitialized {
    what: "primitive view",
};

/// A mutable view of a primitive Gaussian.
///
/// Writes are observable through whatever owns the aliased storage. Unlike
/// the owning [`Primitive`], a null mutable view cannot materialize storage,
/// so its write accessors are fallible.
#[derive(Debug, Default, PartialEq)]
pub struct PrimitiveViewMut<'a> {
    slot: Option<GaussianSlot<'a>>,
}

impl<'a> PrimitiveViewMut<'a> {
    /// Builds a mutable view from raw component references.
    pub fn from_parts(
        coefficient: &'a mut f64,
        exponent: &'a mut f64,
        center: &'a mut Point3<f64>,
    ) -> Self {
        Self {
            slot: Some(GaussianSlot::borrowed(coefficient, exponent, center)),
        }
    }

    /// Whether this view aliases nothing.
    pub fn is_null(&self) -> bool {
        self.slot.is_none()
    }

    /// Returns the aliased contraction coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn coefficient(&self) -> Result<&f64, BasisSetError> {
        self.slot
            .as_ref()
            .map(|s| s.coefficient.value())
            .ok_or(NULL_VIEW)
    }

    /// Returns the aliased contraction coefficient for writing.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn coefficient_mut(&mut self) -> Result<&mut f64, BasisSetError> {
        self.slot
            .as_mut()
            .map(|s| s.coefficient.value_mut())
            .ok_or(NULL_VIEW)
    }

    /// Returns the aliased Gaussian exponent.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn exponent(&self) -> Result<&f64, BasisSetError> {
        self.slot
            .as_ref()
            .map(|s| s.exponent.value())
            .ok_or(NULL_VIEW)
    }

    /// Returns the aliased Gaussian exponent for writing.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn exponent_mut(&mut self) -> Result<&mut f64, BasisSetError> {
        self.slot
            .as_mut()
            .map(|s| s.exponent.value_mut())
            .ok_or(NULL_VIEW)
    }

    /// Returns the aliased center point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn center(&self) -> Result<&Point3<f64>, BasisSetError> {
        self.slot
            .as_ref()
            .map(|s| s.center.value())
            .ok_or(NULL_VIEW)
    }

    /// Returns the aliased center point for writing.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn center_mut(&mut self) -> Result<&mut Point3<f64>, BasisSetError> {
        self.slot
            .as_mut()
            .map(|s| s.center.value_mut())
            .ok_or(NULL_VIEW)
    }

    /// Evaluates the aliased primitive at one point.
    ///
    /// # Errors
    ///
    /// Returns [`BasisSetError::Uninitialized`] if the view is null.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<f64, BasisSetError> {
        self.slot
            .as_ref()
            .map(|s| s.evaluate(point))
            .ok_or(NULL_VIEW)
    }

    /// Reborrows this view read-only.
    pub fn as_view(&self) -> PrimitiveView<'_> {
        match &self.slot {
            Some(s) => PrimitiveView::from_parts(
                s.coefficient.value(),
                s.exponent.value(),
                s.center.value(),
            ),
            None => PrimitiveView::default(),
        }
    }

    fn triple(&self) -> Option<(f64, f64, Point3<f64>)> {
        self.slot.as_ref().map(GaussianSlot::triple)
    }
}

// Equality is by numeric content, symmetric across the owner and both view
// families; two null instances compare equal.

impl PartialEq<PrimitiveView<'_>> for Primitive {
    fn eq(&self, other: &PrimitiveView<'_>) -> bool {
        self.triple() == other.triple()
    }
}

impl PartialEq<Primitive> for PrimitiveView<'_> {
    fn eq(&self, other: &Primitive) -> bool {
        self.triple() == other.triple()
    }
}

impl PartialEq<PrimitiveViewMut<'_>> for Primitive {
    fn eq(&self, other: &PrimitiveViewMut<'_>) -> bool {
        self.triple() == other.triple()
    }
}

impl PartialEq<Primitive> for PrimitiveViewMut<'_> {
    fn eq(&self, other: &Primitive) -> bool {
        self.triple() == other.triple()
    }
}

impl PartialEq<PrimitiveViewMut<'_>> for PrimitiveView<'_> {
    fn eq(&self, other: &PrimitiveViewMut<'_>) -> bool {
        self.triple() == other.triple()
    }
}

impl PartialEq<PrimitiveView<'_>> for PrimitiveViewMut<'_> {
    fn eq(&self, other: &PrimitiveView<'_>) -> bool {
        self.triple() == other.triple()
    }
}
