use std::ops::Mul;

use crate::quantity::emission::{GridEmissionFactor, KilogramsCo2};

quantity!(KilowattHours, "kWh");

impl Mul<GridEmissionFactor> for KilowattHours {
    type Output = KilogramsCo2;

    fn mul(self, rhs: GridEmissionFactor) -> Self::Output {
        KilogramsCo2(self.0 * rhs.0)
    }
}
