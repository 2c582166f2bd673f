use std::ops::Mul;

use crate::quantity::emission::{DieselEmissionFactor, KilogramsCo2};

quantity!(Litres, "l");

impl Mul<DieselEmissionFactor> for Litres {
    type Output = KilogramsCo2;

    fn mul(self, rhs: DieselEmissionFactor) -> Self::Output {
        KilogramsCo2(self.0 * rhs.0)
    }
}
