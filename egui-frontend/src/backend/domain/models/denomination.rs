/// A single denomination slot in the drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Denomination {
    pub label: &'static str,
    /// Face value of one unit, in dollars
    pub unit_value: f64,
}

/// Fixed US denomination table, coins first. Count fields in the UI and the
/// `counts` vector of a saved snapshot are parallel to this order.
pub const DENOMINATIONS: &[Denomination] = &[
    Denomination { label: "Pennies", unit_value: 0.01 },
    Denomination { label: "Nickels", unit_value: 0.05 },
    Denomination { label: "Dimes", unit_value: 0.10 },
    Denomination { label: "Quarters", unit_value: 0.25 },
    Denomination { label: "$1 Bills", unit_value: 1.00 },
    Denomination { label: "$5 Bills", unit_value: 5.00 },
    Denomination { label: "$10 Bills", unit_value: 10.00 },
    Denomination { label: "$20 Bills", unit_value: 20.00 },
    Denomination { label: "$50 Bills", unit_value: 50.00 },
    Denomination { label: "$100 Bills", unit_value: 100.00 },
];
