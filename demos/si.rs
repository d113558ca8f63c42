//! A few SI computations, printing values along with their canonical tags

use dimal::{systems::si::*, Derived, Quantity, Unit};

fn main() {
    let dist = AstronomicalUnit::quantity(4.0f64);
    println!("{dist} is {} km", dist.convert::<Kilometre>().get());

    let mass = Kilogram::quantity(1200.0f64);
    let speed = KilometrePerHour::quantity(90.0f64).convert::<MetrePerSecond>();
    let energy: Quantity<f64, Joule> = (mass * speed * speed / 2.0).convert();
    println!("kinetic energy: {energy} ({} kJ)", energy.convert::<Kilo<Joule>>().get());

    let power = Volt::quantity(230.0f64) * Ampere::quantity(16.0f64);
    let used: Quantity<f64, Kilo<Derived<(Watt, Hour)>>> = (power * Hour::quantity(2.5f64)).convert();
    println!("{} kWh used, ie. {}", used.get(), used.convert::<Mega<Joule>>());

    let area = Hectare::quantity(2.0f64);
    let rain = Millimetre::quantity(12.0f64);
    let water: Quantity<f64, Litre> = (area * rain).convert();
    println!("{} L of rain fell on {area}", water.get());
}
