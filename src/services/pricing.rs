//! Pricing and tax engine
//!
//! Pure computation, no storage access. Part lines carry their own GST rate;
//! labor is taxed at the fixed [`LABOR_GST_RATE`] regardless of product-level
//! rates. Amounts are floating currency units and are never rounded here:
//! rounding is a display concern, and the grand total is always built from the
//! same summed components so the figures stay internally consistent.

/// GST rate applied to labor (service charge). Also used by the financial
/// report to reverse-split stored totals into labor and parts revenue, so the
/// two must never diverge.
pub const LABOR_GST_RATE: f64 = 0.18;

/// One part line as priced at service time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartLine {
    /// Unit price
    pub unit_price: f64,
    /// GST rate as a percentage (e.g. 18.0)
    pub gst_rate: f64,
    /// Units consumed
    pub quantity: u32,
}

impl PartLine {
    /// Cost of this line before tax
    pub fn cost(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }

    /// GST amount for this line
    pub fn gst(&self) -> f64 {
        self.cost() * (self.gst_rate / 100.0)
    }
}

/// Full price breakdown for one service job
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    /// Labor amount
    pub service_charge: f64,
    /// Sum of part line costs
    pub parts_cost: f64,
    /// Sum of part line GST amounts
    pub parts_gst: f64,
    /// GST on labor
    pub labor_gst: f64,
    /// parts_gst + labor_gst
    pub total_gst: f64,
    /// service_charge + parts_cost + total_gst
    pub grand_total: f64,
}

/// Price a service job from its labor charge and consumed parts
pub fn price_service(service_charge: f64, parts: &[PartLine]) -> PriceBreakdown {
    let parts_cost: f64 = parts.iter().map(PartLine::cost).sum();
    let parts_gst: f64 = parts.iter().map(PartLine::gst).sum();
    let labor_gst = service_charge * LABOR_GST_RATE;
    let total_gst = parts_gst + labor_gst;

    PriceBreakdown {
        service_charge,
        parts_cost,
        parts_gst,
        labor_gst,
        total_gst,
        grand_total: service_charge + parts_cost + total_gst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data_example() {
        // charge 2000, one part at 850 with 18% GST, qty 1
        let parts = [PartLine {
            unit_price: 850.0,
            gst_rate: 18.0,
            quantity: 1,
        }];
        let breakdown = price_service(2000.0, &parts);

        assert_eq!(breakdown.parts_cost, 850.0);
        assert_eq!(breakdown.parts_gst, 153.0);
        assert_eq!(breakdown.labor_gst, 360.0);
        assert_eq!(breakdown.total_gst, 513.0);
        assert_eq!(breakdown.grand_total, 3363.0);
    }

    #[test]
    fn test_zero_parts() {
        let breakdown = price_service(1000.0, &[]);
        assert_eq!(breakdown.parts_cost, 0.0);
        assert_eq!(breakdown.parts_gst, 0.0);
        assert_eq!(breakdown.total_gst, breakdown.labor_gst);
        assert_eq!(breakdown.grand_total, 1180.0);
    }

    #[test]
    fn test_mixed_gst_rates() {
        let parts = [
            PartLine { unit_price: 100.0, gst_rate: 18.0, quantity: 2 },
            PartLine { unit_price: 50.0, gst_rate: 5.0, quantity: 4 },
        ];
        let breakdown = price_service(0.0, &parts);

        assert_eq!(breakdown.parts_cost, 400.0);
        assert_eq!(breakdown.parts_gst, 36.0 + 10.0);
        assert_eq!(breakdown.labor_gst, 0.0);
        assert_eq!(breakdown.grand_total, 446.0);
    }

    #[test]
    fn test_pure_function_repeatable() {
        let parts = [PartLine { unit_price: 1234.56, gst_rate: 18.0, quantity: 3 }];
        let a = price_service(789.12, &parts);
        let b = price_service(789.12, &parts);
        assert_eq!(a, b);
    }

    #[test]
    fn test_grand_total_consistent_with_components() {
        let parts = [
            PartLine { unit_price: 333.33, gst_rate: 12.0, quantity: 1 },
            PartLine { unit_price: 91.7, gst_rate: 28.0, quantity: 5 },
        ];
        let b = price_service(555.55, &parts);
        // The total is defined in terms of the summed components, not an
        // independent computation.
        assert_eq!(b.grand_total, b.service_charge + b.parts_cost + b.total_gst);
        assert_eq!(b.total_gst, b.parts_gst + b.labor_gst);
    }
}
