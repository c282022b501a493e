use closest_pair_gen::{generate, write_point_set, GenConfig, FIXTURE_PATH};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

// Hand-edit and rerun to change the fixture.
const CONFIG: GenConfig = GenConfig {
    point_count: 10,
    dimension_count: 2,
    coordinate_low: 0.0,
    coordinate_high: 10_000.0,
};

fn main() -> io::Result<()> {
    let set = generate(&CONFIG, &mut rand::thread_rng());

    let mut out = BufWriter::new(File::create(FIXTURE_PATH)?);
    write_point_set(&mut out, &set)?;
    out.flush()?;

    println!(
        "Wrote {} {}d points to {FIXTURE_PATH}",
        set.len(),
        set.dimensions
    );

    Ok(())
}
