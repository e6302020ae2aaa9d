use byte_bitvec::{BitVector, Error};

// Tracks which of 20 sensors reported in a round, then keeps only the ones that
// are both online and enabled.
fn main() -> Result<(), Error> {
    const SENSORS: usize = 20;
    let mut online = BitVector::new(SENSORS)?;
    for sensor in [0, 3, 4, 9, 15, 19] {
        online.try_set(sensor)?;
    }
    println!("online:  {online:?}");

    let enabled = BitVector::from_u32(0b1000_0000_0010_0001_1001);
    println!("enabled: {enabled:?}");

    let mut active = online.clone();
    active.and_mask(&enabled);
    println!("active:  {active:?}");

    for (sensor, is_active) in active.iter().take(SENSORS).enumerate() {
        if is_active {
            println!("sensor {sensor} is active");
        }
    }
    println!("active as integer: {:#x}", active.to_u32_safe());
    Ok(())
}
