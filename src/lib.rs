use rand::Rng;
use std::io::{self, BufRead, Error, ErrorKind, Write};

/// File the generator writes and the reader consumes. The name is the
/// one `ClosestPairDim` expects as its input.
pub const FIXTURE_PATH: &str = "ClosestPairDim-In.txt";

/// Generation parameters. Hand-edited constants in `gen_input`, never
/// supplied externally.
#[derive(Copy, Clone, Debug)]
pub struct GenConfig {
    pub point_count: usize,
    pub dimension_count: usize,
    pub coordinate_low: f64,
    pub coordinate_high: f64,
}

/// A point set in generation order, coordinates stored flat.
#[derive(Default, Debug, PartialEq)]
pub struct PointSet {
    pub dimensions: usize,
    pub coordinates: Vec<f64>,
}

impl PointSet {
    pub fn len(&self) -> usize {
        self.coordinates.len() / self.dimensions.max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &[f64]> {
        self.coordinates.chunks_exact(self.dimensions)
    }
}

/// Samples `point_count` points with each coordinate drawn uniformly
/// from `[coordinate_low, coordinate_high)`. Generic over the rng so a
/// seeded `StdRng` gives reproducible fixtures.
pub fn generate<R: Rng>(config: &GenConfig, rng: &mut R) -> PointSet {
    let mut coordinates = Vec::with_capacity(config.point_count * config.dimension_count);

    for _ in 0..config.point_count {
        for _ in 0..config.dimension_count {
            coordinates.push(rng.gen_range(config.coordinate_low..config.coordinate_high));
        }
    }

    PointSet {
        dimensions: config.dimension_count,
        coordinates,
    }
}

/// Emits the `ClosestPairDim` input layout: a `"<N> <D>\n"` header,
/// then one line per point with every coordinate followed by a single
/// space. The trailing space before each newline is part of the layout
/// the consumer was written against, so it stays.
pub fn write_point_set(out: &mut impl Write, set: &PointSet) -> io::Result<()> {
    writeln!(out, "{} {}", set.len(), set.dimensions)?;

    for point in set.points() {
        for x in point {
            write!(out, "{x} ")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Parses a fixture back into a `PointSet`, checking that the body
/// matches the counts the header promised.
pub fn read_point_set(input: &mut impl BufRead) -> io::Result<PointSet> {
    let mut line = String::new();

    input.read_line(&mut line)?;
    let mut header = line.split_whitespace();
    let point_count = parse_count(header.next())?;
    let dimensions = parse_count(header.next())?;

    let mut coordinates = Vec::with_capacity(point_count * dimensions);

    for _ in 0..point_count {
        line.clear();
        input.read_line(&mut line)?;

        let tokens = line.split_whitespace();
        let before = coordinates.len();

        for token in tokens {
            let x = fast_float::parse(token)
                .map_err(|_| Error::new(ErrorKind::InvalidData, "bad coordinate"))?;
            coordinates.push(x);
        }

        if coordinates.len() - before != dimensions {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "wrong coordinate count for point",
            ));
        }
    }

    Ok(PointSet {
        dimensions,
        coordinates,
    })
}

fn parse_count(token: Option<&str>) -> io::Result<usize> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| Error::new(ErrorKind::InvalidData, "bad header"))
}
