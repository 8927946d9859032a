pub type Mass = i64;
pub type Fuel = i64;

/// Fuel needed to lift `mass`: a third of it, rounded down, minus two.
///
/// Small or negative masses give a zero or negative result; clamping is left
/// to the caller.
pub fn fuel_for_mass(mass: Mass) -> Fuel {
    mass.div_euclid(3) - 2
}

/// Fuel needed to lift `mass` along with all the fuel added for it.
///
/// Each round of fuel is treated as more mass until a round needs nothing.
pub fn fuel_requirement(mass: Mass) -> Fuel {
    let mut total = 0;
    let mut load = mass;

    loop {
        let fuel = fuel_for_mass(load);
        if fuel <= 0 {
            return total;
        }

        total += fuel;
        load = fuel;
    }
}
