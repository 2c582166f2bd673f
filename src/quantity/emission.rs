quantity!(KilogramsCo2, "kg CO₂");

impl KilogramsCo2 {
    /// Round to whole kilograms, half away from zero.
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}

quantity!(
    /// Kilograms of CO₂ per kilowatt-hour drawn from the grid.
    GridEmissionFactor,
    "kg CO₂/kWh"
);

quantity!(
    /// Kilograms of CO₂ per litre of burnt diesel.
    DieselEmissionFactor,
    "kg CO₂/l"
);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{energy::KilowattHours, fuel::Litres};

    #[test]
    fn test_grid_emission() {
        assert_abs_diff_eq!(
            (KilowattHours(480.0) * GridEmissionFactor(0.82)).0,
            393.6,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_diesel_emission() {
        assert_abs_diff_eq!((Litres(60.0) * DieselEmissionFactor(2.68)).0, 160.8, epsilon = 1e-9);
    }

    #[test]
    fn test_round() {
        assert_abs_diff_eq!(KilogramsCo2(59.04).round().0, 59.0);
        assert_abs_diff_eq!(KilogramsCo2(203.688).round().0, 204.0);
        assert_abs_diff_eq!(KilogramsCo2(0.5).round().0, 1.0);
    }
}
