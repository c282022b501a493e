use closest_pair_gen::{read_point_set, FIXTURE_PATH};
use std::{fs, io, time::Instant};

fn main() -> io::Result<()> {
    let data = fs::read(FIXTURE_PATH)?;

    let start_time = Instant::now();
    let set = read_point_set(&mut data.as_slice())?;
    let end_time = Instant::now();

    dbg!(set.len());

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &x in &set.coordinates {
        min = min.min(x);
        max = max.max(x);
    }

    println!("Points = {} x {}", set.len(), set.dimensions);
    if !set.is_empty() {
        println!("Extent = [{min}, {max}]");
    }
    println!(
        "Parse = {} seconds",
        (end_time - start_time).as_millis() as f32 / 1000.0
    );
    println!(
        "Throughput = {} coordinates/second",
        set.coordinates.len() as f32 / (end_time - start_time).as_secs_f32()
    );

    Ok(())
}
